//! Deletion triggers: ask the API to delete something, then move the user on.
//!
//! Navigation happens only once the request has settled successfully. A
//! failed request skips it and hands the error back to the caller.

use crate::client::{ApiClient, ClientError, FolderId, NoteId};
use crate::navigation::{Destination, Navigator};
use tracing::{error, info};

pub async fn delete_folder<N: Navigator>(
    client: &ApiClient,
    navigator: &mut N,
    folder_id: &FolderId,
) -> Result<(), ClientError> {
    if let Err(e) = client.delete_folder(folder_id).await {
        error!("Failed to delete folder {folder_id}: {e}");
        return Err(e);
    }

    info!("Deleted folder {folder_id}");
    navigator.navigate(Destination::Folders);
    Ok(())
}

/// The note id goes to the API, the folder id only picks the page to return to.
pub async fn delete_note<N: Navigator>(
    client: &ApiClient,
    navigator: &mut N,
    note_id: &NoteId,
    folder_id: &FolderId,
) -> Result<(), ClientError> {
    if let Err(e) = client.delete_note(note_id).await {
        error!("Failed to delete note {note_id}: {e}");
        return Err(e);
    }

    info!("Deleted note {note_id} of folder {folder_id}");
    navigator.navigate(Destination::Folder(folder_id.clone()));
    Ok(())
}
