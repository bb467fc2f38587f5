use std::sync::Arc;

use crate::{
    analytics::laps::latest_laps,
    models::error::ApiError,
    utils::state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use http::StatusCode;
use serde::Deserialize;
use tracing::info;

#[derive(Deserialize)]
pub struct SessionsQuery {
    country: Option<String>,
}

pub async fn get_sessions(
    State(state): State<Arc<AppState>>,
    Path(year): Path<i32>,
    Query(params): Query<SessionsQuery>,
) -> impl IntoResponse {
    let sessions = state
        .telemetry
        .sessions(year, params.country.as_deref())
        .await;
    info!("{} sessions for {}", sessions.len(), year);
    (StatusCode::OK, Json(sessions))
}

pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(session_key): Path<u32>,
) -> Result<impl IntoResponse, ApiError> {
    let session = state
        .telemetry
        .session(session_key)
        .await
        .ok_or_else(|| ApiError::not_found("Session not found."))?;
    Ok((StatusCode::OK, Json(session)))
}

pub async fn get_latest_laps(
    State(state): State<Arc<AppState>>,
    Path(session_key): Path<u32>,
) -> impl IntoResponse {
    let laps = state.telemetry.laps(session_key).await;
    (StatusCode::OK, Json(latest_laps(&laps)))
}
