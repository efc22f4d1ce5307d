use axum::Json;
use serde::Serialize;

/// Response body for `GET /health`. The `status` key comes first.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// GET /health
///
/// Liveness probe for the deployment orchestrator. The values are literal
/// constants, not computed from any internal check: a process that can
/// answer at all is healthy.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "UP",
        message: "Application is healthy and running.",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_body_is_exact() {
        let body = serde_json::to_string(&health().await.0).unwrap();
        assert_eq!(
            body,
            r#"{"status":"UP","message":"Application is healthy and running."}"#
        );
    }
}
