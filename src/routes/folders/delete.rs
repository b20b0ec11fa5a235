use crate::actions::delete_folder;
use crate::client::FolderId;
use crate::flash::{FlashMessage, FlashMessageStore};
use crate::routes::{deletion_failed, RedirectNavigator};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use tower_sessions::Session;
use tracing::warn;

pub async fn route_delete_folder(
    session: Session,
    State(state): State<AppState>,
    Path(folder_id): Path<String>,
) -> Response {
    let folder_id = FolderId::from(folder_id);
    let mut navigator = RedirectNavigator::default();

    match delete_folder(&state.client, &mut navigator, &folder_id).await {
        Ok(()) => {
            session
                .set_flash(FlashMessage::success("Folder deleted successfully"))
                .await
                .unwrap_or_else(|e| {
                    warn!("Failed to set flash message: {:#?}", e);
                });

            navigator.into_response()
        }
        Err(e) => deletion_failed("Failed to delete folder", &e),
    }
}
