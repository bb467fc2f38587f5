use std::collections::HashMap;

use crate::{
    analytics::{drivers::DriverDirectory, timeline::driver_timelines, SessionSnapshot},
    models::{
        session::SessionResult,
        standing::{DriverStanding, TireStint},
        telemetry::{Lap, Stint},
    },
    utils::race_utils::{format_lap_time, points_for_position},
};

/// Final classification of a session, ordered by final position.
pub fn build_standings(snapshot: &SessionSnapshot) -> Vec<DriverStanding> {
    let directory = DriverDirectory::new(&snapshot.drivers);

    let mut standings: Vec<DriverStanding> = driver_timelines(&snapshot.positions)
        .into_iter()
        .map(|timeline| {
            let number = timeline.driver_number;
            let position = timeline.final_position();
            let start_position = timeline.start_position();
            let driver_laps: Vec<&Lap> = snapshot
                .laps
                .iter()
                .filter(|l| l.driver_number == number)
                .collect();
            let best_lap_time = best_lap(&driver_laps);

            DriverStanding {
                position,
                start_position,
                position_delta: start_position as i32 - position as i32,
                driver: directory.resolve(number),
                points: points_for_position(position),
                dnf: false,
                dns: false,
                dsq: false,
                best_lap_time,
                best_lap_display: best_lap_time.map(format_lap_time),
                pit_stops: snapshot
                    .pit_stops
                    .iter()
                    .filter(|p| p.driver_number == number)
                    .count(),
                tire_stints: tire_stints(&snapshot.stints, number, last_lap(&driver_laps)),
                has_fastest_lap: false,
            }
        })
        .collect();

    apply_session_results(&mut standings, &snapshot.results);
    mark_fastest_lap(&mut standings);
    standings
}

/// Quickest present, positive lap duration.
pub fn best_lap(laps: &[&Lap]) -> Option<f64> {
    laps.iter()
        .filter_map(|l| l.valid_duration())
        .fold(None, |best, d| Some(best.map_or(d, |b: f64| b.min(d))))
}

fn last_lap(laps: &[&Lap]) -> Option<u32> {
    laps.iter().map(|l| l.lap_number).max()
}

/// A driver's stints in lap order. A stint with no recorded end is measured
/// up to `last_lap`; without one its length stays unknown.
pub fn tire_stints(stints: &[Stint], driver_number: u32, last_lap: Option<u32>) -> Vec<TireStint> {
    let mut own: Vec<&Stint> = stints
        .iter()
        .filter(|s| s.driver_number == driver_number)
        .collect();
    own.sort_by_key(|s| s.lap_start);

    own.into_iter()
        .map(|s| {
            let end = s.lap_end.or(last_lap);
            TireStint {
                compound: s.compound.clone(),
                lap_start: s.lap_start,
                lap_end: s.lap_end,
                laps: end.and_then(|e| e.checked_sub(s.lap_start)).map(|d| d + 1),
                open: s.lap_end.is_none(),
            }
        })
        .collect()
}

/// Flags exactly one driver: the lowest best lap, first in order on ties.
pub fn mark_fastest_lap(standings: &mut [DriverStanding]) {
    let mut fastest: Option<(usize, f64)> = None;
    for (i, standing) in standings.iter().enumerate() {
        if let Some(time) = standing.best_lap_time.filter(|t| *t > 0.0) {
            if fastest.map_or(true, |(_, best)| time < best) {
                fastest = Some((i, time));
            }
        }
    }
    if let Some((i, _)) = fastest {
        standings[i].has_fastest_lap = true;
    }
}

pub fn apply_session_results(standings: &mut [DriverStanding], results: &[SessionResult]) {
    let by_number: HashMap<u32, &SessionResult> =
        results.iter().map(|r| (r.driver_number, r)).collect();
    for standing in standings.iter_mut() {
        if let Some(result) = by_number.get(&standing.driver.driver_number) {
            standing.dnf = result.dnf;
            standing.dns = result.dns;
            standing.dsq = result.dsq;
        }
    }
}
