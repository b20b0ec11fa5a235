pub mod flash;
pub mod folders;
pub mod notes;

use crate::client::ClientError;
use crate::navigation::{Destination, Navigator};
use crate::templates::render_error_page;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};

/// Turns the trigger's navigation into a redirect for the browser.
#[derive(Debug, Default)]
pub struct RedirectNavigator {
    destination: Option<Destination>,
}

impl Navigator for RedirectNavigator {
    fn navigate(&mut self, destination: Destination) {
        self.destination = Some(destination);
    }
}

impl IntoResponse for RedirectNavigator {
    fn into_response(self) -> Response {
        match self.destination {
            Some(destination) => Redirect::to(&destination.path()).into_response(),
            None => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// The upstream request did not go through: no redirect, just say so.
pub fn deletion_failed(title: &str, err: &ClientError) -> Response {
    (
        StatusCode::BAD_GATEWAY,
        Html(render_error_page(title, &err.to_string())),
    )
        .into_response()
}
