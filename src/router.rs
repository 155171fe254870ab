use axum::{routing::get, Router};

use crate::{controller::health::health, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
