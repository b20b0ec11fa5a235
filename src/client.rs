use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid API address: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("API answered with HTTP status {0}")]
    HttpStatus(StatusCode),

    // Connection refused, DNS, timeouts, ...
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
}

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

opaque_id!(
    /// Identifies a folder. Never inspected, only forwarded.
    FolderId
);
opaque_id!(
    /// Identifies a note. Never inspected, only forwarded.
    NoteId
);

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteFolderRequest<'a> {
    pub folder_id: &'a FolderId,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteNoteRequest<'a> {
    pub note_id: &'a NoteId,
}

/// Talks to the server owning folders and notes.
///
/// Cloning is cheap, the underlying connection pool is shared.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: reqwest::Client,
    base: Url,
    strict_status: bool,
}

impl ApiClient {
    pub fn new(api_addr: &str) -> Result<Self, ClientError> {
        let mut base = Url::parse(api_addr)?;
        // Endpoints are joined relative to the base, keep any mount prefix
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Self {
            client: reqwest::Client::new(),
            base,
            strict_status: false,
        })
    }

    /// Treat non-2xx answers as failures instead of settled requests.
    pub fn with_strict_status(mut self, strict_status: bool) -> Self {
        self.strict_status = strict_status;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    pub async fn delete_folder(&self, folder_id: &FolderId) -> Result<(), ClientError> {
        self.post("delete-folder", &DeleteFolderRequest { folder_id })
            .await
    }

    pub async fn delete_note(&self, note_id: &NoteId) -> Result<(), ClientError> {
        self.post("delete-note", &DeleteNoteRequest { note_id }).await
    }

    async fn post<T: Serialize>(&self, endpoint: &str, body: &T) -> Result<(), ClientError> {
        let url = self.base.join(endpoint)?;
        debug!(%url, "Sending POST");

        // The response body carries nothing we use
        let response = self.client.post(url).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            if self.strict_status {
                return Err(ClientError::HttpStatus(status));
            }
            warn!(%status, endpoint, "Non-success status, request still counts as settled");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn folder_body_uses_camel_case_key() {
        let folder_id = FolderId::from("f1");
        let body = serde_json::to_value(DeleteFolderRequest {
            folder_id: &folder_id,
        })
        .unwrap();
        assert_eq!(body, json!({ "folderId": "f1" }));
    }

    #[test]
    fn note_body_only_carries_note_id() {
        let note_id = NoteId::from("n1");
        let body = serde_json::to_value(DeleteNoteRequest { note_id: &note_id }).unwrap();
        assert_eq!(body, json!({ "noteId": "n1" }));
    }

    #[test]
    fn ids_are_forwarded_verbatim() {
        let folder_id = FolderId::from(" weird/ id?#");
        let body = serde_json::to_value(DeleteFolderRequest {
            folder_id: &folder_id,
        })
        .unwrap();
        assert_eq!(body, json!({ "folderId": " weird/ id?#" }));
    }

    #[test]
    fn rejects_invalid_api_address() {
        let err = ApiClient::new("not a url").unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }

    #[test]
    fn keeps_mount_prefix_of_api_address() {
        let client = ApiClient::new("http://localhost:5000/api").unwrap();
        assert_eq!(
            client.base_url().join("delete-note").unwrap().as_str(),
            "http://localhost:5000/api/delete-note"
        );

        let client = ApiClient::new("http://localhost:5000").unwrap();
        assert_eq!(
            client.base_url().join("delete-folder").unwrap().as_str(),
            "http://localhost:5000/delete-folder"
        );
    }
}
