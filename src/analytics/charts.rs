use crate::{
    analytics::{drivers::DriverDirectory, timeline::driver_timelines, SessionSnapshot},
    models::chart::{LapTimePoint, LapTimeSeries, PositionPoint, PositionSeries},
};

/// One series per driver in standings order, one point per observation.
pub fn position_chart(snapshot: &SessionSnapshot) -> Vec<PositionSeries> {
    let directory = DriverDirectory::new(&snapshot.drivers);
    driver_timelines(&snapshot.positions)
        .into_iter()
        .map(|timeline| {
            let identity = directory.resolve(timeline.driver_number);
            PositionSeries {
                driver_number: timeline.driver_number,
                driver_code: identity.name_acronym,
                team_colour: identity.team_colour,
                positions: timeline
                    .observations
                    .iter()
                    .enumerate()
                    .map(|(i, p)| PositionPoint {
                        index: i + 1,
                        position: p.position,
                    })
                    .collect(),
            }
        })
        .collect()
}

/// Timed laps per driver in standings order, by lap number.
pub fn lap_time_chart(snapshot: &SessionSnapshot) -> Vec<LapTimeSeries> {
    let directory = DriverDirectory::new(&snapshot.drivers);
    driver_timelines(&snapshot.positions)
        .into_iter()
        .map(|timeline| {
            let identity = directory.resolve(timeline.driver_number);
            let mut lap_times: Vec<LapTimePoint> = snapshot
                .laps
                .iter()
                .filter(|l| l.driver_number == timeline.driver_number)
                .filter_map(|l| {
                    l.valid_duration().map(|time| LapTimePoint {
                        lap: l.lap_number,
                        time,
                    })
                })
                .collect();
            lap_times.sort_by_key(|p| p.lap);

            LapTimeSeries {
                driver_number: timeline.driver_number,
                driver_code: identity.name_acronym,
                team_colour: identity.team_colour,
                lap_times,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        analytics::timeline::position,
        models::{driver::Driver, telemetry::Lap},
    };

    fn lap(driver_number: u32, lap_number: u32, duration: Option<f64>) -> Lap {
        Lap {
            driver_number,
            lap_number,
            lap_duration: duration,
            duration_sector_1: None,
            duration_sector_2: None,
            duration_sector_3: None,
            is_pit_out_lap: lap_number == 1,
            date_start: None,
        }
    }

    fn snapshot() -> SessionSnapshot {
        SessionSnapshot {
            drivers: vec![Driver {
                driver_number: 63,
                broadcast_name: "G RUSSELL".to_string(),
                full_name: "George Russell".to_string(),
                name_acronym: "RUS".to_string(),
                team_name: "Mercedes".to_string(),
                team_colour: "27F4D2".to_string(),
                headshot_url: None,
            }],
            positions: vec![
                position(63, 5, 10),
                position(63, 7, 0),
                position(22, 4, 0),
                position(63, 3, 20),
                position(22, 9, 20),
            ],
            laps: vec![
                lap(63, 3, Some(95.2)),
                lap(63, 1, Some(101.4)),
                lap(63, 2, None),
                lap(22, 1, Some(0.0)),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn position_series_follow_timestamp_order() {
        let chart = position_chart(&snapshot());
        assert_eq!(chart[0].driver_number, 63);
        assert_eq!(chart[0].driver_code, "RUS");
        assert_eq!(chart[0].team_colour, "27F4D2");
        let points: Vec<(usize, u32)> = chart[0]
            .positions
            .iter()
            .map(|p| (p.index, p.position))
            .collect();
        assert_eq!(points, vec![(1, 7), (2, 5), (3, 3)]);
    }

    #[test]
    fn unidentified_driver_gets_fallback_tags() {
        let chart = position_chart(&snapshot());
        assert_eq!(chart[1].driver_code, "DR22");
        assert_eq!(chart[1].team_colour, "FFFFFF");
    }

    #[test]
    fn lap_series_keep_timed_laps_in_lap_order() {
        let chart = lap_time_chart(&snapshot());
        let laps: Vec<u32> = chart[0].lap_times.iter().map(|p| p.lap).collect();
        assert_eq!(laps, vec![1, 3]);
        assert_eq!(chart[0].lap_times[1].time, 95.2);
        assert!(chart[1].lap_times.is_empty());
    }
}
