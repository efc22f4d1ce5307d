use axum::extract::State;
use axum::Json;

use crate::app_info::AppInfo;
use crate::AppState;

/// GET /version
///
/// Reports the identity of this deployment slot. The metadata was resolved
/// once at startup (placeholder values substituted if it was unavailable),
/// so this never fails a request.
pub async fn version(State(state): State<AppState>) -> Json<AppInfo> {
    Json(state.info.clone())
}
