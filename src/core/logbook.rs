//! Append-only contact and chat persistence, one JSON document per line.
//!
//! Deliberately decoupled from the analyzer: no shared state, no ordering
//! guarantees under concurrent writers.

use crate::core::Storage;
use crate::domain::model::{ChatMessage, ContactSubmission};
use crate::utils::error::{ReportError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub const CONTACTS_FILE: &str = "contacts.jsonl";
pub const CHAT_FILE: &str = "chat.jsonl";

pub struct Logbook<S: Storage> {
    storage: S,
    dir: String,
}

impl<S: Storage> Logbook<S> {
    pub fn new(storage: S, dir: String) -> Self {
        Self { storage, dir }
    }

    /// Validates and appends a registration to the contact log.
    ///
    /// A submission needs a name plus at least one of phone/email.
    pub async fn append_contact(&self, submission: &ContactSubmission) -> Result<()> {
        if submission.name.trim().is_empty() {
            return Err(ReportError::ValidationError {
                message: "name is required".to_string(),
            });
        }
        let has_phone = submission.phone.as_deref().is_some_and(|p| !p.trim().is_empty());
        let has_email = submission.email.as_deref().is_some_and(|e| !e.trim().is_empty());
        if !has_phone && !has_email {
            return Err(ReportError::ValidationError {
                message: "at least one of phone or email is required".to_string(),
            });
        }

        self.append(CONTACTS_FILE, submission).await
    }

    pub async fn append_chat(&self, message: &ChatMessage) -> Result<()> {
        if message.author.trim().is_empty() || message.message.trim().is_empty() {
            return Err(ReportError::ValidationError {
                message: "author and message are both required".to_string(),
            });
        }

        self.append(CHAT_FILE, message).await
    }

    /// All registrations, in append order.
    pub async fn contacts(&self) -> Result<Vec<ContactSubmission>> {
        self.read_log(CONTACTS_FILE).await
    }

    /// All chat messages, in append order.
    pub async fn chat_log(&self) -> Result<Vec<ChatMessage>> {
        self.read_log(CHAT_FILE).await
    }

    async fn append<T: Serialize>(&self, file: &str, entry: &T) -> Result<()> {
        let path = self.path(file);

        let mut data = self.read_or_empty(&path).await?;
        data.extend_from_slice(serde_json::to_string(entry)?.as_bytes());
        data.push(b'\n');

        self.storage.write_file(&path, &data).await
    }

    async fn read_log<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>> {
        let path = self.path(file);
        let data = self.read_or_empty(&path).await?;

        let text = String::from_utf8(data).map_err(|e| ReportError::ProcessingError {
            message: format!("log file {} is not valid UTF-8: {}", path, e),
        })?;

        text.lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| Ok(serde_json::from_str(line)?))
            .collect()
    }

    /// A missing log file just means nothing has been appended yet; any
    /// other read failure must not be mistaken for an empty log, or an
    /// append would overwrite the existing history.
    async fn read_or_empty(&self, path: &str) -> Result<Vec<u8>> {
        match self.storage.read_file(path).await {
            Ok(data) => Ok(data),
            Err(ReportError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    fn path(&self, file: &str) -> String {
        format!("{}/{}", self.dir, file)
    }
}
