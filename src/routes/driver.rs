use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{handlers::driver::get_driver_profile, utils::state::AppState};

pub fn driver_routes() -> Router<Arc<AppState>> {
    Router::new().route("/{driver_number}/profile", get(get_driver_profile))
}
