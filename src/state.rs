use crate::client::ApiClient;

#[derive(Clone)]
pub struct AppState {
    pub client: ApiClient,
}

impl AppState {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}
