use serde::Serialize;

use super::driver::DriverIdentity;

/// Tyre compound run for a contiguous interval of laps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TireStint {
    pub compound: String,
    pub lap_start: u32,
    pub lap_end: Option<u32>,
    /// Absent when the interval cannot be measured.
    pub laps: Option<u32>,
    /// Stint had no recorded end and was measured to the last lap seen.
    pub open: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverStanding {
    pub position: u32,
    pub start_position: u32,
    /// Start minus final position; positive means places gained.
    pub position_delta: i32,
    pub driver: DriverIdentity,
    pub points: u32,
    pub dnf: bool,
    pub dns: bool,
    pub dsq: bool,
    pub best_lap_time: Option<f64>,
    pub best_lap_display: Option<String>,
    pub pit_stops: usize,
    pub tire_stints: Vec<TireStint>,
    pub has_fastest_lap: bool,
}
