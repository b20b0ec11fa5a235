use crate::client::ApiClient;
use crate::routes::{
    flash::route_take_flash, folders::delete::route_delete_folder,
    notes::delete::route_delete_note,
};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_sessions::{MemoryStore, SessionManagerLayer};
use tracing::info;

/// Routes of the web front. Each delete route runs a deletion trigger and
/// answers with the redirect the trigger asked for.
pub fn app(client: ApiClient) -> Router {
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store).with_secure(false);

    Router::new()
        .route("/folders/:folder_id/delete", post(route_delete_folder))
        .route(
            "/folders/:folder_id/notes/:note_id/delete",
            post(route_delete_note),
        )
        .route("/flash", get(route_take_flash))
        .layer(session_layer)
        .with_state(AppState::new(client))
}

pub async fn serve(client: ApiClient, host: &str, port: &str) -> std::io::Result<()> {
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Serving Web App at {addr} using API {}", client.base_url());

    axum::serve(listener, app(client)).await
}
