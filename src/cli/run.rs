use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use dotenv::dotenv;
use tracing::info;

use crate::{
    domain::{Contact, ContactStore, Draft, EXPORT_FILE_NAME},
    errors::AppError,
    setup_logging,
};

use super::command::{Cli, Commands};

pub fn run_app() -> Result<(), AppError> {
    // .env has to be loaded before clap reads the environment
    dotenv().ok();
    let cli = Cli::parse();

    let config = cli.config();
    setup_logging(config.log_level);

    let mut store = ContactStore::open(&config)?;

    if config.seed_samples && store.seed_samples()? {
        println!("Sample contacts added");
    }

    let stats = store.stats();
    info!(
        medium = store.medium(),
        "Loaded {} contacts ({} with email)",
        stats.total,
        stats.with_email
    );

    run_command(&mut store, cli.command)
}

pub fn run_command(store: &mut ContactStore, command: Commands) -> Result<(), AppError> {
    match command {
        Commands::List => {
            print_contacts(&store.list(), "No contacts found");
            Ok(())
        }

        Commands::Add {
            name,
            phone,
            email,
            address,
        } => {
            let contact = store.add(Draft {
                name,
                phone,
                email,
                address,
            })?;

            println!("Contact \"{}\" added successfully!", contact.name);
            Ok(())
        }

        Commands::Edit {
            id,
            name,
            phone,
            email,
            address,
        } => {
            let current = store.get(id)?;
            let draft = Draft {
                name: name.unwrap_or_else(|| current.name.clone()),
                phone: phone.unwrap_or_else(|| current.phone.clone()),
                email: email.or_else(|| current.email.clone()),
                address: address.or_else(|| current.address.clone()),
            };

            store.update(id, draft)?;
            println!("Contact \"{}\" updated successfully!", current.name);
            Ok(())
        }

        Commands::Delete { id, yes } => {
            let contact = store.get(id)?;

            if !yes {
                confirm_action(&format!("delete contact \"{}\"", contact.name))?;
                if get_input_to_lower()? != "y" {
                    println!("Delete cancelled");
                    return Ok(());
                }
            }

            let removed = store.delete(id)?;
            println!("Contact \"{}\" deleted successfully!", removed.name);
            Ok(())
        }

        Commands::Search { query } => {
            print_contacts(
                &store.search(&query),
                "No contacts found matching your search.",
            );
            Ok(())
        }

        Commands::Import { src } => {
            let document = fs::read(&src).map_err(|e| {
                let message = format!("Error reading file {}: {e}", src.display());
                io::Error::new(e.kind(), message)
            })?;

            let total = store.import(&document)?;
            println!("Successfully imported {total} contacts!");
            Ok(())
        }

        Commands::Export { des } => {
            let document = store.export()?;
            let path = export_path(des);

            fs::write(&path, document)?;
            println!("Contacts exported successfully to {}", path.display());
            Ok(())
        }

        Commands::Stats => {
            let stats = store.stats();
            println!("Total: {}", stats.total);
            println!("With email: {}", stats.with_email);
            println!("Without email: {}", stats.without_email);
            Ok(())
        }
    }
}

fn export_path(des: Option<PathBuf>) -> PathBuf {
    match des {
        Some(path) if path.is_dir() => path.join(EXPORT_FILE_NAME),
        Some(path) => path,
        None => PathBuf::from(EXPORT_FILE_NAME),
    }
}

fn print_contacts(contacts: &[Contact], empty_message: &str) {
    if contacts.is_empty() {
        println!("{empty_message}");
        return;
    }

    for contact in contacts {
        println!("{}", display_contact(contact));
    }
}

pub fn display_contact(contact: &Contact) -> String {
    let line = format!(
        "{:>3}. {:<20} {:15} {:^30}",
        contact.id,
        contact.name,
        contact.phone,
        contact.email.as_deref().unwrap_or_default()
    );

    match &contact.address {
        Some(address) => format!("{line} {address}"),
        None => line.trim_end().to_string(),
    }
}

fn confirm_action(action: &str) -> Result<(), AppError> {
    println!("Are you sure you want to {action}? (y/n)");
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}

fn get_input_to_lower() -> Result<String, AppError> {
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_lowercase())
}
