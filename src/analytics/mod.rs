//! Turns raw session records into standings, statistics and chart series.
//!
//! Everything here is synchronous and works on an owned snapshot of one
//! session, except [`stats::collect_career_stats`] which fetches position
//! records race by race.

pub mod charts;
pub mod drivers;
pub mod laps;
pub mod standings;
pub mod stats;
pub mod timeline;

use crate::{
    models::{
        driver::Driver,
        session::SessionResult,
        telemetry::{Lap, PitStop, Position, Stint},
    },
    utils::telemetry::Telemetry,
};

/// Every record of one session needed to build its race report.
#[derive(Debug, Clone, Default)]
pub struct SessionSnapshot {
    pub drivers: Vec<Driver>,
    pub positions: Vec<Position>,
    pub laps: Vec<Lap>,
    pub pit_stops: Vec<PitStop>,
    pub stints: Vec<Stint>,
    pub results: Vec<SessionResult>,
}

impl SessionSnapshot {
    /// Reads each collection in turn; a failed read leaves that one empty.
    pub async fn fetch(telemetry: &Telemetry, session_key: u32) -> Self {
        SessionSnapshot {
            drivers: telemetry.drivers(session_key).await,
            positions: telemetry.positions(session_key).await,
            pit_stops: telemetry.pit_stops(session_key).await,
            laps: telemetry.laps(session_key).await,
            stints: telemetry.stints(session_key).await,
            results: telemetry.session_results(session_key).await,
        }
    }
}
