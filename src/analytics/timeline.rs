use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::models::telemetry::Position;

/// A record with a usable running position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub date: DateTime<Utc>,
    pub position: u32,
}

/// All running-order observations of one driver, oldest first.
#[derive(Debug, Clone)]
pub struct DriverTimeline {
    pub driver_number: u32,
    pub observations: Vec<Observation>,
}

impl DriverTimeline {
    pub fn start_position(&self) -> u32 {
        self.observations.first().map_or(0, |p| p.position)
    }

    pub fn final_position(&self) -> u32 {
        self.observations.last().map_or(0, |p| p.position)
    }
}

/// Groups observations by driver and orders the groups by final position.
///
/// Records without a valid position are not observations: they neither
/// move a driver's start or final position nor appear in charts, and a
/// driver with only such records is left out. Observations with equal
/// timestamps keep their input order, and drivers with equal final
/// positions keep the order they first appeared in.
pub fn driver_timelines(positions: &[Position]) -> Vec<DriverTimeline> {
    let mut index: HashMap<u32, usize> = HashMap::new();
    let mut timelines: Vec<DriverTimeline> = Vec::new();

    for record in positions {
        let Some(position) = record.valid_position() else {
            continue;
        };
        let slot = *index.entry(record.driver_number).or_insert_with(|| {
            timelines.push(DriverTimeline {
                driver_number: record.driver_number,
                observations: Vec::new(),
            });
            timelines.len() - 1
        });
        timelines[slot].observations.push(Observation {
            date: record.date,
            position,
        });
    }

    for timeline in &mut timelines {
        timeline.observations.sort_by_key(|p| p.date);
    }
    timelines.sort_by_key(|t| t.final_position());
    timelines
}

/// Final position of one driver, or `None` when the driver has no record
/// with a valid position.
pub fn final_position_of(positions: &[Position], driver_number: u32) -> Option<u32> {
    let mut latest: Option<Observation> = None;
    for record in positions.iter().filter(|p| p.driver_number == driver_number) {
        let Some(position) = record.valid_position() else {
            continue;
        };
        if latest.map_or(true, |l| record.date >= l.date) {
            latest = Some(Observation {
                date: record.date,
                position,
            });
        }
    }
    latest.map(|o| o.position)
}

#[cfg(test)]
pub(crate) fn position(driver_number: u32, position: i32, minute: u32) -> Position {
    Position {
        driver_number,
        position: Some(position),
        date: format!("2024-03-02T15:{minute:02}:00+00:00").parse().unwrap(),
    }
}
