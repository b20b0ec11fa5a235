use crate::flash::{FlashMessage, FlashMessageStore};
use axum::Json;
use tower_sessions::Session;
use tracing::warn;

/// Hands the pending flash message to the listing page, once.
pub async fn route_take_flash(session: Session) -> Json<Option<FlashMessage>> {
    let flash = session.take_flash().await.unwrap_or_else(|e| {
        warn!("Failed to read flash message: {:#?}", e);
        None
    });

    Json(flash)
}
