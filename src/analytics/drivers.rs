use std::collections::HashMap;

use crate::models::driver::{Driver, DriverIdentity};

pub const UNKNOWN_TEAM: &str = "Unknown";
pub const DEFAULT_TEAM_COLOUR: &str = "FFFFFF";

/// Join of driver numbers against a session's driver list. Every lookup
/// resolves: numbers with no driver record get a placeholder identity.
pub struct DriverDirectory<'a> {
    by_number: HashMap<u32, &'a Driver>,
}

impl<'a> DriverDirectory<'a> {
    pub fn new(drivers: &'a [Driver]) -> Self {
        let mut by_number = HashMap::with_capacity(drivers.len());
        for driver in drivers {
            // First record wins when the source repeats a driver.
            by_number.entry(driver.driver_number).or_insert(driver);
        }
        DriverDirectory { by_number }
    }

    pub fn resolve(&self, driver_number: u32) -> DriverIdentity {
        match self.by_number.get(&driver_number) {
            Some(driver) => DriverIdentity {
                driver_number,
                full_name: non_empty(&driver.full_name)
                    .unwrap_or_else(|| placeholder_name(driver_number)),
                name_acronym: non_empty(&driver.name_acronym)
                    .unwrap_or_else(|| placeholder_code(driver_number)),
                team_name: non_empty(&driver.team_name).unwrap_or_else(|| UNKNOWN_TEAM.to_string()),
                team_colour: non_empty(&driver.team_colour)
                    .unwrap_or_else(|| DEFAULT_TEAM_COLOUR.to_string()),
                headshot_url: driver.headshot_url.clone().filter(|u| !u.is_empty()),
                known: true,
            },
            None => DriverIdentity {
                driver_number,
                full_name: placeholder_name(driver_number),
                name_acronym: placeholder_code(driver_number),
                team_name: UNKNOWN_TEAM.to_string(),
                team_colour: DEFAULT_TEAM_COLOUR.to_string(),
                headshot_url: None,
                known: false,
            },
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn placeholder_name(driver_number: u32) -> String {
    format!("Driver {driver_number}")
}

fn placeholder_code(driver_number: u32) -> String {
    format!("DR{driver_number}")
}
