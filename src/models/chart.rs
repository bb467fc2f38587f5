use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionPoint {
    /// 1-based observation index within the driver's timeline.
    pub index: usize,
    pub position: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionSeries {
    pub driver_number: u32,
    pub driver_code: String,
    pub team_colour: String,
    pub positions: Vec<PositionPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LapTimePoint {
    pub lap: u32,
    pub time: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LapTimeSeries {
    pub driver_number: u32,
    pub driver_code: String,
    pub team_colour: String,
    pub lap_times: Vec<LapTimePoint>,
}
