use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::null_as_default;

/// One timestamped running-order observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub driver_number: u32,
    /// Placeholder records carry `null`, zero or negative values.
    #[serde(default)]
    pub position: Option<i32>,
    pub date: DateTime<Utc>,
}

impl Position {
    /// Running position when the record holds a real, strictly positive one.
    pub fn valid_position(&self) -> Option<u32> {
        self.position
            .filter(|p| *p > 0)
            .and_then(|p| u32::try_from(p).ok())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lap {
    pub driver_number: u32,
    pub lap_number: u32,
    #[serde(default)]
    pub lap_duration: Option<f64>,
    #[serde(default)]
    pub duration_sector_1: Option<f64>,
    #[serde(default)]
    pub duration_sector_2: Option<f64>,
    #[serde(default)]
    pub duration_sector_3: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_pit_out_lap: bool,
    #[serde(default)]
    pub date_start: Option<DateTime<Utc>>,
}

impl Lap {
    /// Duration usable for timing aggregates: present and positive.
    pub fn valid_duration(&self) -> Option<f64> {
        self.lap_duration.filter(|d| *d > 0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitStop {
    pub driver_number: u32,
    pub lap_number: u32,
    #[serde(default)]
    pub pit_duration: Option<f64>,
    #[serde(default)]
    pub total_time: Option<f64>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stint {
    pub driver_number: u32,
    pub stint_number: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub compound: String,
    pub lap_start: u32,
    #[serde(default)]
    pub lap_end: Option<u32>,
    #[serde(default)]
    pub tyre_age_at_start: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_duration_excludes_null_and_non_positive() {
        let mut lap: Lap = serde_json::from_str(
            r#"{"driver_number":1,"lap_number":3,"lap_duration":null,"is_pit_out_lap":null}"#,
        )
        .unwrap();
        assert_eq!(lap.valid_duration(), None);
        assert!(!lap.is_pit_out_lap);

        lap.lap_duration = Some(0.0);
        assert_eq!(lap.valid_duration(), None);

        lap.lap_duration = Some(92.5);
        assert_eq!(lap.valid_duration(), Some(92.5));
    }

    #[test]
    fn placeholder_positions_decode_but_are_not_valid() {
        let records: Vec<Position> = serde_json::from_str(
            r#"[{"driver_number":1,"position":4,"date":"2024-03-02T15:00:00+00:00"},
                {"driver_number":55,"position":-1,"date":"2024-03-02T15:00:00+00:00"},
                {"driver_number":55,"position":null,"date":"2024-03-02T15:01:00+00:00"},
                {"driver_number":55,"position":0,"date":"2024-03-02T15:02:00+00:00"}]"#,
        )
        .unwrap();
        assert_eq!(records.len(), 4);
        let valid: Vec<Option<u32>> = records.iter().map(Position::valid_position).collect();
        assert_eq!(valid, vec![Some(4), None, None, None]);
    }

    #[test]
    fn open_stint_decodes_without_end() {
        let stint: Stint = serde_json::from_str(
            r#"{"driver_number":44,"stint_number":3,"compound":"HARD","lap_start":38,"lap_end":null}"#,
        )
        .unwrap();
        assert_eq!(stint.lap_end, None);
        assert_eq!(stint.tyre_age_at_start, None);
    }
}
