pub mod kv;
pub mod local;
pub mod remote;

use std::fs;
use std::path::Path;

use crate::config::{BackendKind, Config};
use crate::domain::contact::{Contact, Draft};
use crate::errors::{AppError, BackendError};

pub use kv::{FileKeyValue, KeyValueStore, MemoryKeyValue};
pub use local::{CONTACTS_KEY, LocalStorage};
pub use remote::RemoteStorage;

/// Persistence medium behind a [`crate::ContactStore`].
///
/// Implementations do no validation; they receive drafts that already passed
/// the store's checks.
pub trait ContactBackend {
    fn medium(&self) -> &str;

    /// The whole collection in stored order.
    fn load(&self) -> Result<Vec<Contact>, AppError>;

    /// Whether the medium has ever held a collection. Sample seeding only
    /// happens when this is false.
    fn is_initialized(&self) -> Result<bool, AppError>;

    /// Appends a record and returns it with its assigned id.
    fn create(&self, draft: Draft) -> Result<Contact, AppError>;

    /// Overwrites the record sharing `contact.id`, keeping its position.
    fn replace(&self, contact: Contact) -> Result<Contact, AppError>;

    fn remove(&self, id: u64) -> Result<(), AppError>;

    /// Drops the current collection and stores `drafts` under fresh ids.
    /// On error the previous collection is still there.
    fn replace_all(&self, drafts: Vec<Draft>) -> Result<usize, AppError>;
}

pub fn open_backend(config: &Config) -> Result<Box<dyn ContactBackend>, AppError> {
    match config.backend {
        BackendKind::Local => Ok(Box::new(LocalStorage::new(FileKeyValue::new(
            &config.data_dir,
        )))),
        BackendKind::Remote => {
            let url = config.remote_url.as_deref().ok_or_else(|| {
                BackendError::Config("remote backend selected but no remote url set".to_string())
            })?;
            Ok(Box::new(RemoteStorage::new(url, config.remote_timeout)?))
        }
    }
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
