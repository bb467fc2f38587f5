use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{handlers::race::get_race_results, utils::state::AppState};

pub fn race_routes() -> Router<Arc<AppState>> {
    Router::new().route("/{session_key}/results", get(get_race_results))
}
