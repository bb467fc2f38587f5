use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{handlers::tracks::get_tracks, utils::state::AppState};

pub fn track_routes() -> Router<Arc<AppState>> {
    Router::new().route("/{year}", get(get_tracks))
}
