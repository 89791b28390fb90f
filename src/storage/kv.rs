use std::cell::RefCell;
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use super::create_file_parent;
use crate::errors::AppError;

/// String values addressed by key. Backs [`super::LocalStorage`].
pub trait KeyValueStore {
    /// `None` when the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Overwrites whatever the key held before.
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
}

/// One file per key: `<dir>/<key>.json`.
pub struct FileKeyValue {
    pub dir: PathBuf,
}

impl FileKeyValue {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileKeyValue {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let path = self.path_for(key);
        if !fs::exists(&path)? {
            return Ok(None);
        }

        let mut file = OpenOptions::new().read(true).open(&path)?;
        let mut data = String::new();
        file.read_to_string(&mut data)?;

        // An empty file reads the same as a key that was never set
        if data.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(data))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let path = self.path_for(key);
        create_file_parent(&path)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)?;
        file.write_all(value.as_bytes())?;

        Ok(())
    }
}

/// In-process map. Clones share the same entries, so a test can keep a
/// handle on what the store wrote.
#[derive(Clone, Default)]
pub struct MemoryKeyValue {
    data: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryKeyValue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let kv = Self::new();
        kv.data.borrow_mut().insert(key.to_string(), value.to_string());
        kv
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.data.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryKeyValue {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.data
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
