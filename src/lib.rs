pub mod app_info;
pub mod config;
pub mod routes;

use crate::app_info::AppInfo;

/// Shared application state passed to all route handlers via Axum's State extractor.
///
/// `AppInfo` is resolved once at startup and never mutated, so cloning the
/// state per handler is all the sharing this service needs.
#[derive(Clone)]
pub struct AppState {
    pub info: AppInfo,
}
