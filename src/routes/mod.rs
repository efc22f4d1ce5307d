pub mod health;
pub mod home;
pub mod version;

use axum::routing::get;
use axum::Router;

use crate::AppState;

/// Build the route table mapping (method, path) to handlers.
///
/// Anything outside this table falls through to Axum's built-in responses
/// (404 for unknown paths, 405 for wrong methods); the handlers are never
/// invoked for such requests.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::home))
        .route("/health", get(health::health))
        .route("/version", get(version::version))
        .with_state(state)
}
