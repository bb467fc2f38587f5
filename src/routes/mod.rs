pub mod driver;
pub mod race;
pub mod session;
pub mod tracks;
use axum::{response::IntoResponse, routing::get, Json, Router};
use http::StatusCode;
use serde_json::json;
use std::{error::Error, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt, Registry};

use crate::{
    routes::{
        driver::driver_routes, race::race_routes, session::session_routes, tracks::track_routes,
    },
    utils::{config::Config, openf1::OpenF1Client, state::AppState, telemetry::Telemetry},
};

pub async fn make_app(config: Config) -> Result<Router, Box<dyn Error>> {
    init_tracing(&config.log_level);

    info!("Initializing application...");
    let client = OpenF1Client::new(&config)?;
    info!("Telemetry client initialized for {}", config.openf1_base_url);

    let state = Arc::new(AppState {
        telemetry: Telemetry::new(Arc::new(client)),
        config,
    });
    let app = build_router(state);
    info!("Application initialized successfully");

    Ok(app)
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health_check))
        .nest("/session", session_routes())
        .nest("/race", race_routes())
        .nest("/driver", driver_routes())
        .nest("/tracks", track_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn init_tracing(log_level: &str) {
    let level = match log_level {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    };

    let filter = filter::Targets::new()
        .with_target("tower_http::trace::on_response", Level::TRACE)
        .with_target("tower_http::trace::on_request", Level::TRACE)
        .with_target("tower_http::trace::make_span", Level::DEBUG)
        .with_target("axum::rejection", Level::TRACE)
        .with_target(env!("CARGO_PKG_NAME"), level)
        .with_default(Level::INFO);

    let tracing_layer = tracing_subscriber::fmt::layer();

    // Already installed when the app is built more than once in a process.
    let _ = Registry::default().with(tracing_layer).with(filter).try_init();
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"message": "Race analytics is running"})))
}
