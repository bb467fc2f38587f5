use std::collections::BTreeMap;

use serde::Serialize;

/// Finishing record of one driver over a set of races.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DriverStats {
    pub total_races: u32,
    pub podiums: u32,
    pub points: u32,
    pub best_position: Option<u32>,
    pub worst_position: Option<u32>,
    /// Absent when no race was counted.
    pub average_position: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CareerStats {
    pub career: DriverStats,
    /// Only years with at least one classified finish.
    pub seasons: BTreeMap<i32, DriverStats>,
    pub races_considered: usize,
    pub races_processed: usize,
    pub cancelled: bool,
}
