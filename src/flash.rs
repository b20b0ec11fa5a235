use serde::{Deserialize, Serialize};
use tower_sessions::{session, Session};

const FLASH_KEY: &str = "flash";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FlashMessage {
    pub kind: String, // "success", "error"
    pub message: String,
}

impl FlashMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: String::from("success"),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: String::from("error"),
            message: message.into(),
        }
    }
}

/// One-shot messages kept in the session until the next page reads them.
#[allow(async_fn_in_trait)]
pub trait FlashMessageStore {
    async fn set_flash(&self, flash: FlashMessage) -> Result<(), session::Error>;
    async fn take_flash(&self) -> Result<Option<FlashMessage>, session::Error>;
}

impl FlashMessageStore for Session {
    async fn set_flash(&self, flash: FlashMessage) -> Result<(), session::Error> {
        self.insert(FLASH_KEY, flash).await
    }

    async fn take_flash(&self) -> Result<Option<FlashMessage>, session::Error> {
        self.remove::<FlashMessage>(FLASH_KEY).await
    }
}
