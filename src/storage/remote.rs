use std::time::Duration;

use reqwest::blocking::{Client, Response};
use tracing::{debug, warn};
use url::Url;

use super::ContactBackend;
use crate::domain::contact::{Contact, Draft};
use crate::errors::{AppError, BackendError};

const CONTACTS_ENDPOINT: &str = "api/contacts";

/// Talks to a record API exposing `/api/contacts` and `/api/contacts/{id}`.
///
/// Every call is a single blocking request. Any status outside 2xx is a
/// [`BackendError::Status`]; the store does not tell 4xx and 5xx apart.
pub struct RemoteStorage {
    pub medium: String,
    pub base_url: Url,
    client: Client,
}

impl RemoteStorage {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AppError> {
        let mut base_url = Url::parse(base_url)
            .map_err(|e| BackendError::Config(format!("remote url {base_url:?}: {e}")))?;

        // Url::join drops the last path segment unless it ends with '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            medium: "remote".to_string(),
            base_url,
            client,
        })
    }

    pub fn collection_url(&self) -> Result<Url, AppError> {
        self.join(CONTACTS_ENDPOINT)
    }

    pub fn record_url(&self, id: u64) -> Result<Url, AppError> {
        self.join(&format!("{CONTACTS_ENDPOINT}/{id}"))
    }

    fn join(&self, path: &str) -> Result<Url, AppError> {
        Ok(self
            .base_url
            .join(path)
            .map_err(|e| BackendError::Config(e.to_string()))?)
    }

    // Rollback of a failed import; the error that caused it is the one reported.
    fn discard(&self, ids: &[u64]) {
        for &id in ids {
            if let Err(e) = self.remove(id) {
                warn!(id, error = %e, "could not roll back imported contact");
            }
        }
    }
}

fn check_status(method: &'static str, response: Response) -> Result<Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    Err(BackendError::Status {
        method,
        url: response.url().to_string(),
        status: status.as_u16(),
    }
    .into())
}

impl ContactBackend for RemoteStorage {
    fn medium(&self) -> &str {
        &self.medium
    }

    fn load(&self) -> Result<Vec<Contact>, AppError> {
        let url = self.collection_url()?;
        debug!(%url, "GET contacts");

        let response = check_status("GET", self.client.get(url).send()?)?;
        Ok(response.json::<Vec<Contact>>()?)
    }

    /// The server owns its collection and cannot tell an emptied collection
    /// from a new one, so it never counts as fresh.
    fn is_initialized(&self) -> Result<bool, AppError> {
        Ok(true)
    }

    fn create(&self, draft: Draft) -> Result<Contact, AppError> {
        let url = self.collection_url()?;
        debug!(%url, name = %draft.name, "POST contact");

        let response = check_status("POST", self.client.post(url).json(&draft).send()?)?;
        Ok(response.json::<Contact>()?)
    }

    fn replace(&self, contact: Contact) -> Result<Contact, AppError> {
        let url = self.record_url(contact.id)?;
        debug!(%url, "PUT contact");

        let response = check_status("PUT", self.client.put(url).json(&contact).send()?)?;
        Ok(response.json::<Contact>()?)
    }

    fn remove(&self, id: u64) -> Result<(), AppError> {
        let url = self.record_url(id)?;
        debug!(%url, "DELETE contact");

        check_status("DELETE", self.client.delete(url).send()?)?;
        Ok(())
    }

    /// Posts every draft first and only then deletes the previous records.
    /// A failed post removes the records created so far, leaving the old
    /// collection in place. A failed delete afterwards leaves both.
    fn replace_all(&self, drafts: Vec<Draft>) -> Result<usize, AppError> {
        let previous: Vec<u64> = self.load()?.into_iter().map(|c| c.id).collect();

        let mut created = Vec::with_capacity(drafts.len());
        for draft in drafts {
            match self.create(draft) {
                Ok(contact) => created.push(contact.id),
                Err(e) => {
                    self.discard(&created);
                    return Err(e);
                }
            }
        }

        for id in previous {
            self.remove(id)?;
        }
        Ok(created.len())
    }
}
