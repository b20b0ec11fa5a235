pub mod actions;
pub mod client;
pub mod flash;
pub mod navigation;
pub mod routes;
pub mod server;
pub mod state;
mod templates;

pub use actions::{delete_folder, delete_note};
pub use client::{ApiClient, ClientError, FolderId, NoteId};
pub use navigation::{Destination, Navigator};
