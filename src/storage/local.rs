use tracing::warn;

use super::kv::KeyValueStore;
use super::ContactBackend;
use crate::domain::contact::{next_id, Contact, Draft};
use crate::errors::{AppError, BackendError};

/// Key holding the whole serialized collection.
pub const CONTACTS_KEY: &str = "contacts_data";

/// Keeps the full collection as one JSON array under a single key and
/// rewrites it on every change.
pub struct LocalStorage<K: KeyValueStore> {
    pub medium: String,
    pub key: String,
    kv: K,
}

impl<K: KeyValueStore> LocalStorage<K> {
    pub fn new(kv: K) -> Self {
        Self {
            medium: "local".to_string(),
            key: CONTACTS_KEY.to_string(),
            kv,
        }
    }

    fn write(&self, contacts: &[Contact]) -> Result<(), AppError> {
        let data = serde_json::to_string(contacts).map_err(BackendError::Encode)?;
        self.kv.set(&self.key, &data)
    }

    fn position(contacts: &[Contact], id: u64) -> Result<usize, AppError> {
        contacts
            .iter()
            .position(|c| c.id == id)
            .ok_or(AppError::NotFound { id })
    }
}

impl<K: KeyValueStore> ContactBackend for LocalStorage<K> {
    fn medium(&self) -> &str {
        &self.medium
    }

    fn load(&self) -> Result<Vec<Contact>, AppError> {
        let Some(data) = self.kv.get(&self.key)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<Contact>>(&data) {
            Ok(contacts) => Ok(contacts),
            Err(e) => {
                warn!(key = %self.key, error = %e, "stored contacts are unreadable, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    fn is_initialized(&self) -> Result<bool, AppError> {
        Ok(self.kv.get(&self.key)?.is_some())
    }

    fn create(&self, draft: Draft) -> Result<Contact, AppError> {
        let mut contacts = self.load()?;
        let contact = Contact::from_draft(next_id(&contacts)?, draft);

        contacts.push(contact.clone());
        self.write(&contacts)?;
        Ok(contact)
    }

    fn replace(&self, contact: Contact) -> Result<Contact, AppError> {
        let mut contacts = self.load()?;
        let index = Self::position(&contacts, contact.id)?;

        contacts[index] = contact.clone();
        self.write(&contacts)?;
        Ok(contact)
    }

    fn remove(&self, id: u64) -> Result<(), AppError> {
        let mut contacts = self.load()?;
        let index = Self::position(&contacts, id)?;

        contacts.remove(index);
        self.write(&contacts)
    }

    fn replace_all(&self, drafts: Vec<Draft>) -> Result<usize, AppError> {
        let contacts: Vec<Contact> = drafts
            .into_iter()
            .zip(1u64..)
            .map(|(draft, id)| Contact::from_draft(id, draft))
            .collect();

        self.write(&contacts)?;
        Ok(contacts.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::kv::{FileKeyValue, MemoryKeyValue};
    use tempfile::tempdir;

    #[test]
    fn missing_and_malformed_data_load_as_empty() -> Result<(), AppError> {
        let storage = LocalStorage::new(MemoryKeyValue::new());
        assert!(storage.load()?.is_empty());
        assert!(!storage.is_initialized()?);

        let storage = LocalStorage::new(MemoryKeyValue::with_entry(CONTACTS_KEY, "{not json"));
        assert!(storage.load()?.is_empty());

        let storage = LocalStorage::new(MemoryKeyValue::with_entry(CONTACTS_KEY, r#"{"id":1}"#));
        assert!(storage.load()?.is_empty());
        Ok(())
    }

    #[test]
    fn create_assigns_ids_after_the_largest() -> Result<(), AppError> {
        let kv = MemoryKeyValue::with_entry(
            CONTACTS_KEY,
            r#"[{"id":4,"name":"Ann","phone":"1234567","email":""}]"#,
        );
        let storage = LocalStorage::new(kv.clone());

        let created = storage.create(Draft::new("Bob", "7654321"))?;
        assert_eq!(created.id, 5);

        let stored = kv.raw(CONTACTS_KEY).unwrap_or_default();
        assert!(stored.contains(r#""name":"Bob""#));
        assert_eq!(storage.load()?.len(), 2);
        Ok(())
    }

    #[test]
    fn replace_keeps_position_and_remove_reports_missing() -> Result<(), AppError> {
        let storage = LocalStorage::new(MemoryKeyValue::new());
        storage.create(Draft::new("Ann", "1234567"))?;
        storage.create(Draft::new("Bob", "7654321"))?;
        storage.create(Draft::new("Cid", "5551234"))?;

        storage.replace(Contact::from_draft(2, Draft::new("Bobby", "7654321")))?;
        let names: Vec<String> = storage.load()?.into_iter().map(|c| c.name).collect();
        assert_eq!(names, ["Ann", "Bobby", "Cid"]);

        assert!(matches!(
            storage.remove(9),
            Err(AppError::NotFound { id: 9 })
        ));
        storage.remove(1)?;
        assert_eq!(storage.load()?[0].name, "Bobby");
        Ok(())
    }

    #[test]
    fn file_backed_collection_persists() -> Result<(), AppError> {
        let dir = tempdir()?;
        let storage = LocalStorage::new(FileKeyValue::new(dir.path()));

        storage.replace_all(vec![
            Draft::new("Uche", "01234567890").with_email("ucheuche@gmail.com"),
            Draft::new("Alex", "01234567890"),
        ])?;

        let reopened = LocalStorage::new(FileKeyValue::new(dir.path()));
        let contacts = reopened.load()?;

        assert!(reopened.is_initialized()?);
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].id, 1);
        assert_eq!(contacts[1].id, 2);
        assert_eq!(contacts[0].email.as_deref(), Some("ucheuche@gmail.com"));
        Ok(())
    }
}
