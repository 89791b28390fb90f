use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;
use tracing::Level;

pub const DEFAULT_DATA_DIR: &str = "./.instance";
pub const DEFAULT_REMOTE_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendKind {
    /// JSON collection in a file under the data directory
    Local,
    /// HTTP record API
    Remote,
}

/// Settings the store is opened with. The binary fills this from its flags
/// and their `CONTACTS_*` environment fallbacks.
#[derive(Debug, Clone)]
pub struct Config {
    pub backend: BackendKind,
    pub data_dir: PathBuf,
    pub remote_url: Option<String>,
    pub remote_timeout: Duration,
    pub seed_samples: bool,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendKind::Local,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            remote_url: None,
            remote_timeout: Duration::from_secs(DEFAULT_REMOTE_TIMEOUT_SECS),
            seed_samples: false,
            log_level: Level::WARN,
        }
    }
}
