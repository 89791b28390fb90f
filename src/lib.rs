//! Contact book: a record store for names, phone numbers, emails and
//! addresses, persisted in a local key-value file or behind a remote API.

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod prelude;
pub mod storage;

pub use domain::ContactStore;

use tracing::Level;

/// Installs a plain-text subscriber writing to stderr. Calling it again
/// after a subscriber is set is a no-op.
pub fn setup_logging(level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
