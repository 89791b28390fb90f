pub mod contact;
pub mod manager;
pub mod stats;
pub mod validation;

pub use contact::{Contact, Draft};
pub use manager::{ContactStore, EXPORT_FILE_NAME};
pub use stats::ContactStats;
