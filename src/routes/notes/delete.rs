use crate::actions::delete_note;
use crate::client::{FolderId, NoteId};
use crate::flash::{FlashMessage, FlashMessageStore};
use crate::routes::{deletion_failed, RedirectNavigator};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use tower_sessions::Session;
use tracing::warn;

pub async fn route_delete_note(
    session: Session,
    State(state): State<AppState>,
    Path((folder_id, note_id)): Path<(String, String)>,
) -> Response {
    let folder_id = FolderId::from(folder_id);
    let note_id = NoteId::from(note_id);
    let mut navigator = RedirectNavigator::default();

    match delete_note(&state.client, &mut navigator, &note_id, &folder_id).await {
        Ok(()) => {
            session
                .set_flash(FlashMessage::success("Note deleted successfully"))
                .await
                .unwrap_or_else(|e| {
                    warn!("Failed to set flash message: {:#?}", e);
                });

            navigator.into_response()
        }
        Err(e) => deletion_failed("Failed to delete note", &e),
    }
}
