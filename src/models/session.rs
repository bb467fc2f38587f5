use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::null_as_default;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub session_key: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub session_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub session_type: String,
    pub date_start: DateTime<Utc>,
    pub date_end: DateTime<Utc>,
    pub meeting_key: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub country_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub circuit_short_name: String,
    pub year: i32,
}

impl Session {
    /// A session must not end before it starts.
    pub fn has_valid_window(&self) -> bool {
        self.date_start <= self.date_end
    }

    /// Grand Prix races only: sprint races share the "Race" type upstream.
    pub fn is_grand_prix(&self) -> bool {
        self.session_type == "Race" && !self.session_name.to_lowercase().contains("sprint")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    pub meeting_key: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub meeting_official_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub country_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub country_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub circuit_short_name: String,
    pub year: i32,
}

/// Classified outcome of a driver in a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionResult {
    pub driver_number: u32,
    #[serde(default)]
    pub position: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dnf: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dns: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dsq: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(name: &str, kind: &str) -> Session {
        Session {
            session_key: 9158,
            session_name: name.to_string(),
            session_type: kind.to_string(),
            date_start: "2023-09-17T12:00:00+00:00".parse().unwrap(),
            date_end: "2023-09-17T14:00:00+00:00".parse().unwrap(),
            meeting_key: 1219,
            location: "Marina Bay".to_string(),
            country_name: "Singapore".to_string(),
            circuit_short_name: "Singapore".to_string(),
            year: 2023,
        }
    }

    #[test]
    fn sprint_races_are_not_grand_prix() {
        assert!(session("Race", "Race").is_grand_prix());
        assert!(!session("Sprint", "Race").is_grand_prix());
        assert!(!session("SPRINT Shootout", "Race").is_grand_prix());
        assert!(!session("Qualifying", "Qualifying").is_grand_prix());
    }

    #[test]
    fn window_check_rejects_reversed_dates() {
        let mut s = session("Race", "Race");
        assert!(s.has_valid_window());
        s.date_end = "2023-09-17T11:00:00+00:00".parse().unwrap();
        assert!(!s.has_valid_window());
    }

    #[test]
    fn null_strings_decode_to_empty() {
        let raw = r#"{"session_key":1,"session_name":null,"session_type":"Race",
            "date_start":"2024-03-02T15:00:00+00:00","date_end":"2024-03-02T17:00:00+00:00",
            "meeting_key":2,"country_name":"Bahrain","year":2024}"#;
        let s: Session = serde_json::from_str(raw).unwrap();
        assert_eq!(s.session_name, "");
        assert_eq!(s.location, "");
        assert_eq!(s.country_name, "Bahrain");
    }
}
