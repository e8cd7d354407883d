pub mod error;
pub mod models;
pub mod routes;
pub mod store;
pub mod views;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};

use store::TodoStore;

/// Shared handler state: the store behind the routes. Backends synchronize
/// internally, so cloning the state just bumps the `Arc`.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn TodoStore>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish()
    }
}

impl AppState {
    pub fn new(store: impl TodoStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn store(&self) -> &dyn TodoStore {
        self.store.as_ref()
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/todos", get(routes::list_todos).post(routes::create_todo))
        .route("/todos/toggle/:id", post(routes::toggle_todo))
        .route("/todos/:id", delete(routes::delete_todo))
        .with_state(state)
}
