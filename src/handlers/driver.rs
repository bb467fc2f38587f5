use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use http::StatusCode;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::{
    analytics::{drivers::DriverDirectory, stats::gather_detached},
    models::{error::ApiError, report::DriverProfile, session::Session},
    utils::state::AppState,
};

pub async fn get_driver_profile(
    State(state): State<Arc<AppState>>,
    Path(driver_number): Path<u32>,
) -> Result<impl IntoResponse, ApiError> {
    let mut races: Vec<Session> = Vec::new();
    for year in state.config.stats_years() {
        races.extend(
            state
                .telemetry
                .sessions(year, None)
                .await
                .into_iter()
                .filter(Session::is_grand_prix),
        );
    }

    let latest = races
        .iter()
        .max_by_key(|s| s.date_start)
        .ok_or_else(|| ApiError::not_found("Driver not found."))?;
    let drivers = state.telemetry.drivers(latest.session_key).await;
    if !drivers.iter().any(|d| d.driver_number == driver_number) {
        return Err(ApiError::not_found("Driver not found."));
    }
    let driver = DriverDirectory::new(&drivers).resolve(driver_number);

    let stats = gather_detached(
        state.telemetry.clone(),
        races,
        driver_number,
        CancellationToken::new(),
    )
    .await?;

    info!(
        "Driver {}: {} races, {} points over {} seasons",
        driver_number,
        stats.career.total_races,
        stats.career.points,
        stats.seasons.len()
    );
    Ok((StatusCode::OK, Json(DriverProfile { driver, stats })))
}
