use serde::Serialize;

use super::{
    chart::{LapTimeSeries, PositionSeries},
    driver::DriverIdentity,
    standing::DriverStanding,
    stats::CareerStats,
};

#[derive(Debug, Clone, Serialize)]
pub struct RaceReport {
    pub session_key: u32,
    pub title: String,
    pub date: String,
    pub track_image_url: String,
    pub standings: Vec<DriverStanding>,
    pub position_chart: Vec<PositionSeries>,
    pub lap_time_chart: Vec<LapTimeSeries>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DriverProfile {
    pub driver: DriverIdentity,
    pub stats: CareerStats,
}
