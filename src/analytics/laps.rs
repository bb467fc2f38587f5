use std::collections::BTreeMap;

use crate::models::telemetry::Lap;

/// Most recently started lap of each driver, by driver number.
/// Laps without a start timestamp are ignored.
pub fn latest_laps(laps: &[Lap]) -> Vec<Lap> {
    let mut latest: BTreeMap<u32, &Lap> = BTreeMap::new();

    for lap in laps {
        let Some(date) = lap.date_start else {
            continue;
        };
        latest
            .entry(lap.driver_number)
            .and_modify(|existing| {
                if existing.date_start.map_or(true, |d| date > d) {
                    *existing = lap;
                }
            })
            .or_insert(lap);
    }

    latest.into_values().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lap(driver_number: u32, lap_number: u32, start: Option<&str>) -> Lap {
        Lap {
            driver_number,
            lap_number,
            lap_duration: Some(90.0),
            duration_sector_1: None,
            duration_sector_2: None,
            duration_sector_3: None,
            is_pit_out_lap: false,
            date_start: start.map(|s| s.parse().unwrap()),
        }
    }

    #[test]
    fn keeps_latest_started_lap_per_driver() {
        let laps = vec![
            lap(81, 1, Some("2024-05-05T20:03:00+00:00")),
            lap(4, 2, Some("2024-05-05T20:05:00+00:00")),
            lap(81, 3, Some("2024-05-05T20:06:00+00:00")),
            lap(81, 2, Some("2024-05-05T20:04:30+00:00")),
            lap(4, 3, None),
        ];
        let latest = latest_laps(&laps);
        let summary: Vec<(u32, u32)> = latest.iter().map(|l| (l.driver_number, l.lap_number)).collect();
        assert_eq!(summary, vec![(4, 2), (81, 3)]);
    }

    #[test]
    fn driver_with_only_untimed_laps_is_absent() {
        assert!(latest_laps(&[lap(10, 1, None)]).is_empty());
    }
}
