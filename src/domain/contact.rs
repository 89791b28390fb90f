use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::AppError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: u64,
    pub name: String,
    pub phone: String,

    // Stored as "" when absent so data written by older clients keeps its shape.
    #[serde(
        default,
        serialize_with = "serialize_email",
        deserialize_with = "deserialize_optional_text"
    )]
    pub email: Option<String>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_text"
    )]
    pub address: Option<String>,
}

/// Caller-supplied contact fields, before validation and without an id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Draft {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Contact {
    pub fn from_draft(id: u64, draft: Draft) -> Self {
        Contact {
            id,
            name: draft.name,
            phone: draft.phone,
            email: draft.email,
            address: draft.address,
        }
    }

    pub fn has_email(&self) -> bool {
        self.email.as_deref().is_some_and(|e| !e.is_empty())
    }

    /// Same person by the fields that survive an export/import round trip.
    pub fn same_details(&self, other: &Contact) -> bool {
        self.name == other.name && self.phone == other.phone && self.email == other.email
    }
}

impl Draft {
    pub fn new(name: &str, phone: &str) -> Self {
        Draft {
            name: name.to_string(),
            phone: phone.to_string(),
            email: None,
            address: None,
        }
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = Some(email.to_string());
        self
    }

    pub fn with_address(mut self, address: &str) -> Self {
        self.address = Some(address.to_string());
        self
    }
}

impl From<&Contact> for Draft {
    fn from(contact: &Contact) -> Self {
        Draft {
            name: contact.name.clone(),
            phone: contact.phone.clone(),
            email: contact.email.clone(),
            address: contact.address.clone(),
        }
    }
}

/// Next id for a new record: one past the largest id in use, or 1.
pub fn next_id(contacts: &[Contact]) -> Result<u64, AppError> {
    match contacts.iter().map(|c| c.id).max() {
        None => Ok(1),
        Some(last) => last.checked_add(1).ok_or(AppError::IdsExhausted { last }),
    }
}

/// The records a fresh local store starts with when seeding is enabled.
pub fn sample_contacts() -> Vec<Contact> {
    vec![
        Contact::from_draft(
            1,
            Draft::new("John Smith", "1234567890").with_email("john.smith@example.com"),
        ),
        Contact::from_draft(
            2,
            Draft::new("Emily Johnson", "0987654321").with_email("emily.johnson@example.com"),
        ),
        Contact::from_draft(
            3,
            Draft::new("Michael Brown", "5551234567").with_email("michael.brown@example.com"),
        ),
    ]
}

fn serialize_email<S>(email: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(email.as_deref().unwrap_or_default())
}

fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty())) // "" and null both mean absent
}
