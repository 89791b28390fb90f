use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::domain::contact::{Contact, Draft, sample_contacts};
use crate::domain::stats::ContactStats;
use crate::domain::validation::validate_draft;
use crate::errors::{AppError, BackendError};
use crate::storage::{self, ContactBackend};

/// File name suggested for exported collections.
pub const EXPORT_FILE_NAME: &str = "contacts_backup.json";

/// The contact collection and every operation on it.
///
/// Nothing is cached: each call reads the collection from the backend and
/// each change is written straight back. Two writers on the same backend can
/// lose each other's updates; callers serialize their mutations.
pub struct ContactStore {
    backend: Box<dyn ContactBackend>,
}

impl ContactStore {
    pub fn new(backend: Box<dyn ContactBackend>) -> Self {
        Self { backend }
    }

    pub fn open(config: &Config) -> Result<Self, AppError> {
        Ok(Self::new(storage::open_backend(config)?))
    }

    pub fn medium(&self) -> &str {
        self.backend.medium()
    }

    /// Full collection in stored order. A backend that cannot be read yields
    /// an empty list so the caller stays usable.
    pub fn list(&self) -> Vec<Contact> {
        match self.backend.load() {
            Ok(contacts) => contacts,
            Err(e) => {
                warn!(medium = self.medium(), error = %e, "could not read contacts");
                Vec::new()
            }
        }
    }

    pub fn get(&self, id: u64) -> Result<Contact, AppError> {
        self.backend
            .load()?
            .into_iter()
            .find(|c| c.id == id)
            .ok_or(AppError::NotFound { id })
    }

    pub fn add(&mut self, draft: Draft) -> Result<Contact, AppError> {
        let draft = validate_draft(draft)?;
        let contact = self.backend.create(draft)?;

        debug!(id = contact.id, name = %contact.name, "contact added");
        Ok(contact)
    }

    pub fn update(&mut self, id: u64, draft: Draft) -> Result<Contact, AppError> {
        self.get(id)?;
        let draft = validate_draft(draft)?;
        let contact = self.backend.replace(Contact::from_draft(id, draft))?;

        debug!(id, name = %contact.name, "contact updated");
        Ok(contact)
    }

    /// Removes the record unconditionally; confirming with the user is the
    /// caller's job.
    pub fn delete(&mut self, id: u64) -> Result<Contact, AppError> {
        let contact = self.get(id)?;
        self.backend.remove(id)?;

        debug!(id, name = %contact.name, "contact deleted");
        Ok(contact)
    }

    pub fn search(&self, query: &str) -> Vec<Contact> {
        let contacts = self.list();
        if query.trim().is_empty() {
            return contacts;
        }

        let needle = query.to_lowercase();
        contacts
            .into_iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&needle)
                    || c.phone.contains(query)
                    || c.email
                        .as_deref()
                        .is_some_and(|e| e.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Pretty-printed JSON array of the whole collection.
    pub fn export(&self) -> Result<Vec<u8>, AppError> {
        let contacts = self.backend.load()?;
        if contacts.is_empty() {
            return Err(AppError::EmptyCollection);
        }

        let document = serde_json::to_vec_pretty(&contacts).map_err(BackendError::Encode)?;
        info!(count = contacts.len(), "contacts exported");
        Ok(document)
    }

    /// Replaces the collection with the usable entries of `document`.
    ///
    /// Entries that are not objects, or lack a non-blank string `name` and
    /// `phone`, are skipped. Accepted entries get new ids; any ids in the document are
    /// ignored. On error the stored collection is left as it was.
    pub fn import(&mut self, document: &[u8]) -> Result<usize, AppError> {
        let value: Value =
            serde_json::from_slice(document).map_err(|e| AppError::Format(e.to_string()))?;

        let Value::Array(entries) = value else {
            return Err(AppError::Format("expected a list of contacts".to_string()));
        };

        let total = entries.len();
        let drafts: Vec<Draft> = entries
            .iter()
            .filter_map(Value::as_object)
            .filter_map(draft_from_record)
            .collect();

        if drafts.is_empty() {
            return Err(AppError::NoValidRecords);
        }

        let accepted = self.backend.replace_all(drafts)?;
        info!(accepted, skipped = total - accepted, "contacts imported");
        Ok(accepted)
    }

    pub fn stats(&self) -> ContactStats {
        ContactStats::of(&self.list())
    }

    /// Writes the sample contacts when the backend has never held a
    /// collection. Returns whether it did.
    pub fn seed_samples(&mut self) -> Result<bool, AppError> {
        if self.backend.is_initialized()? {
            return Ok(false);
        }

        let drafts = sample_contacts().iter().map(Draft::from).collect();
        let count = self.backend.replace_all(drafts)?;

        info!(count, "seeded sample contacts");
        Ok(true)
    }
}

fn draft_from_record(record: &Map<String, Value>) -> Option<Draft> {
    let text = |key: &str| {
        record
            .get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    Some(Draft {
        name: text("name")?,
        phone: text("phone")?,
        email: text("email"),
        address: text("address"),
    })
}
