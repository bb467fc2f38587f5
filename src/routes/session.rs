use crate::{
    handlers::session::{get_latest_laps, get_session, get_sessions},
    utils::state::AppState,
};
use axum::{routing::get, Router};
use std::sync::Arc;

pub fn session_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/by_year/{year}", get(get_sessions))
        .route("/{session_key}", get(get_session))
        .route("/{session_key}/latest_laps", get(get_latest_laps))
}
