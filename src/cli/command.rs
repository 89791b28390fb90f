use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::Level;

use crate::config::{BackendKind, Config, DEFAULT_DATA_DIR, DEFAULT_REMOTE_TIMEOUT_SECS};

#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "Simple Contact Book")]
pub struct Cli {
    /// Storage backend (local, remote)
    #[arg(long, env = "CONTACTS_BACKEND", value_enum, default_value_t = BackendKind::Local)]
    pub backend: BackendKind,

    /// Directory holding the local contacts file
    #[arg(long, env = "CONTACTS_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Base url of the remote contacts API
    #[arg(long, env = "CONTACTS_REMOTE_URL")]
    pub remote_url: Option<String>,

    /// Seconds to wait for the remote API
    #[arg(
        long,
        env = "CONTACTS_REMOTE_TIMEOUT_SECS",
        default_value_t = DEFAULT_REMOTE_TIMEOUT_SECS
    )]
    pub remote_timeout_secs: u64,

    /// Fill a never-written local store with sample contacts (ignored for remote)
    #[arg(long, env = "CONTACTS_SEED_SAMPLES")]
    pub seed_samples: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, env = "CONTACTS_LOG", default_value_t = Level::WARN)]
    pub log_level: Level,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all contacts
    List,

    /// Add a new contact
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact phone number
        #[arg(long)]
        phone: String,

        /// Contact email address
        #[arg(long)]
        email: Option<String>,

        /// Contact postal address
        #[arg(long)]
        address: Option<String>,
    },

    /// Edit an existing contact by id
    /// Fields left out keep their current value
    Edit {
        /// Id of the contact to edit
        #[arg(long)]
        id: u64,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New phone number
        #[arg(long)]
        phone: Option<String>,

        /// New email address (pass "" to clear)
        #[arg(long)]
        email: Option<String>,

        /// New postal address (pass "" to clear)
        #[arg(long)]
        address: Option<String>,
    },

    /// Delete a contact by id
    Delete {
        /// Id of the contact to delete
        #[arg(long)]
        id: u64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Search name, phone and email
    Search {
        /// Text to look for
        #[arg(default_value = "")]
        query: String,
    },

    /// Replace all contacts with those in a .json backup
    Import {
        /// Path to the backup file
        #[arg(short, long)]
        src: PathBuf,
    },

    /// Write all contacts to a .json backup
    Export {
        /// Destination file or directory
        #[arg(short, long)]
        des: Option<PathBuf>,
    },

    /// Show contact counts
    Stats,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config {
            backend: self.backend,
            data_dir: self.data_dir.clone(),
            remote_url: self.remote_url.clone().filter(|url| !url.trim().is_empty()),
            remote_timeout: Duration::from_secs(self.remote_timeout_secs),
            seed_samples: self.seed_samples,
            log_level: self.log_level,
        }
    }
}
