pub use crate::config::{BackendKind, Config};
pub use crate::domain::{
    ContactStats, ContactStore, EXPORT_FILE_NAME,
    contact::{self, Contact, Draft},
    validation::{self, ValidationReq},
};
pub use crate::errors::{AppError, BackendError, Field};
pub use crate::storage::{
    self, CONTACTS_KEY, ContactBackend, FileKeyValue, KeyValueStore, LocalStorage,
    MemoryKeyValue, RemoteStorage,
};
