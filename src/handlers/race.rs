use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use http::StatusCode;
use tracing::info;

use crate::{
    analytics::{
        charts::{lap_time_chart, position_chart},
        standings::build_standings,
        SessionSnapshot,
    },
    models::{error::ApiError, report::RaceReport},
    utils::{state::AppState, track_images::track_image_url},
};

pub async fn get_race_results(
    State(state): State<Arc<AppState>>,
    Path(session_key): Path<u32>,
) -> Result<impl IntoResponse, ApiError> {
    let session = state
        .telemetry
        .session(session_key)
        .await
        .ok_or_else(|| ApiError::not_found("Session not found."))?;

    let snapshot = SessionSnapshot::fetch(&state.telemetry, session_key).await;
    let standings = build_standings(&snapshot);
    info!(
        "Race {} ({}): {} classified drivers",
        session_key,
        session.country_name,
        standings.len()
    );

    let report = RaceReport {
        session_key,
        title: format!("{} Grand Prix", session.country_name),
        date: session.date_start.format("%B %d, %Y").to_string(),
        track_image_url: track_image_url(
            &state.config.track_image_base_url,
            &session.circuit_short_name,
        ),
        position_chart: position_chart(&snapshot),
        lap_time_chart: lap_time_chart(&snapshot),
        standings,
    };
    Ok((StatusCode::OK, Json(report)))
}
