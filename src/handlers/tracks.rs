use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use http::StatusCode;

use crate::{
    models::track::TrackInfo,
    utils::{race_utils::country_flag_url, state::AppState, track_images::track_image_url},
};

pub async fn get_tracks(
    State(state): State<Arc<AppState>>,
    Path(year): Path<i32>,
) -> impl IntoResponse {
    let config = &state.config;
    let tracks: Vec<TrackInfo> = state
        .telemetry
        .meetings(year)
        .await
        .into_iter()
        .map(|m| TrackInfo {
            image_url: track_image_url(&config.track_image_base_url, &m.circuit_short_name),
            flag_url: country_flag_url(&config.flag_image_base_url, &m.country_code),
            meeting_key: m.meeting_key,
            meeting_official_name: m.meeting_official_name,
            circuit_short_name: m.circuit_short_name,
            country_name: m.country_name,
            year: m.year,
        })
        .collect();
    (StatusCode::OK, Json(tracks))
}
