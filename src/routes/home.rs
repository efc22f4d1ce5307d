use axum::Json;
use serde::Serialize;

/// Response body for `GET /`. Field order fixes the JSON key order.
#[derive(Serialize)]
pub struct HomeResponse {
    pub message: &'static str,
    pub status: &'static str,
}

/// GET /
///
/// Welcome banner for the deployment app. No inputs, always succeeds.
pub async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: "Welcome to the Blue-Green Deployment App!",
        status: "success",
    })
}
