use core::fmt;

use thiserror::Error;

/// Draft field named by a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Phone,
    Email,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Email => "email",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { field: Field, message: String },

    #[error("Contact with id {id} not found")]
    NotFound { id: u64 },

    #[error("Invalid file format: {0}")]
    Format(String),

    #[error("No valid contacts found in file")]
    NoValidRecords,

    #[error("No contacts to export!")]
    EmptyCollection,

    #[error("No contact id left to assign after {last}")]
    IdsExhausted { last: u64 },

    #[error("Storage failure: {0}")]
    Backend(#[from] BackendError),
}

/// Anything that goes wrong while talking to the persistence medium.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("remote API answered {status} for {method} {url}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
    },

    #[error("could not encode contacts: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl AppError {
    pub fn validation(field: Field, message: &str) -> Self {
        AppError::Validation {
            field,
            message: message.to_string(),
        }
    }

    /// Field to refocus in the caller, if this is a validation failure.
    pub fn field(&self) -> Option<Field> {
        match self {
            AppError::Validation { field, .. } => Some(*field),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Backend(BackendError::Io(err))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Backend(BackendError::Request(err))
    }
}
