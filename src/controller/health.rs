use axum::{extract::State, http::StatusCode, Json};
use sea_orm::DatabaseConnection;

use crate::{model::api::HealthDto, state::AppState};

/// Reports whether the service can reach its database.
///
/// # Returns
/// - `200 OK` - `{"status": "ok", "database": "up"}`
/// - `503 Service Unavailable` - `{"status": "degraded", "database": "down"}`
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthDto>) {
    check_health(&state.db).await
}

async fn check_health(db: &DatabaseConnection) -> (StatusCode, Json<HealthDto>) {
    match db.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthDto {
                status: "ok".to_string(),
                database: "up".to_string(),
            }),
        ),
        Err(e) => {
            tracing::warn!("Health check database ping failed: {}", e);

            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthDto {
                    status: "degraded".to_string(),
                    database: "down".to_string(),
                }),
            )
        }
    }
}
