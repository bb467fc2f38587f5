use serde::{Deserialize, Serialize};

use super::null_as_default;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub driver_number: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub broadcast_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name_acronym: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub team_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub team_colour: String,
    #[serde(default)]
    pub headshot_url: Option<String>,
}

/// Display identity of a driver after the join against the session's
/// driver list. `known` is false when the placeholder was substituted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverIdentity {
    pub driver_number: u32,
    pub full_name: String,
    pub name_acronym: String,
    pub team_name: String,
    pub team_colour: String,
    pub headshot_url: Option<String>,
    pub known: bool,
}
