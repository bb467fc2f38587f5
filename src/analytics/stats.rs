use std::collections::BTreeMap;

use tokio::task::JoinError;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::{
    analytics::timeline::final_position_of,
    models::{
        session::Session,
        stats::{CareerStats, DriverStats},
    },
    utils::{race_utils::points_for_position, telemetry::Telemetry},
};

/// Running totals over classified finishes.
#[derive(Debug, Clone, Default)]
pub struct StatsAccumulator {
    races: u32,
    podiums: u32,
    points: u32,
    positions: Vec<u32>,
}

impl StatsAccumulator {
    /// Counts a finish. Non-positive positions are placeholders and ignored.
    pub fn record_finish(&mut self, position: u32) -> bool {
        if position == 0 {
            return false;
        }
        self.races += 1;
        self.points += points_for_position(position);
        if position <= 3 {
            self.podiums += 1;
        }
        self.positions.push(position);
        true
    }

    pub fn is_empty(&self) -> bool {
        self.races == 0
    }

    pub fn stats(&self) -> DriverStats {
        let average_position = (!self.positions.is_empty()).then(|| {
            self.positions.iter().map(|p| f64::from(*p)).sum::<f64>() / self.positions.len() as f64
        });
        DriverStats {
            total_races: self.races,
            podiums: self.podiums,
            points: self.points,
            best_position: self.positions.iter().copied().min(),
            worst_position: self.positions.iter().copied().max(),
            average_position,
        }
    }
}

/// Career and per-season totals fed from a single pass over finishes.
#[derive(Debug, Clone, Default)]
pub struct CareerAccumulator {
    career: StatsAccumulator,
    seasons: BTreeMap<i32, StatsAccumulator>,
}

impl CareerAccumulator {
    pub fn record_finish(&mut self, year: i32, position: u32) {
        if self.career.record_finish(position) {
            self.seasons.entry(year).or_default().record_finish(position);
        }
    }

    pub fn career(&self) -> DriverStats {
        self.career.stats()
    }

    pub fn seasons(&self) -> BTreeMap<i32, DriverStats> {
        self.seasons
            .iter()
            .filter(|(_, acc)| !acc.is_empty())
            .map(|(year, acc)| (*year, acc.stats()))
            .collect()
    }
}

/// Grand Prix races in visiting order: newest season first, races within a
/// season oldest first.
pub fn race_visit_order(sessions: &[Session]) -> Vec<&Session> {
    let mut races: Vec<&Session> = sessions.iter().filter(|s| s.is_grand_prix()).collect();
    races.sort_by(|a, b| b.year.cmp(&a.year).then(a.date_start.cmp(&b.date_start)));
    races
}

/// Walks every race fetching the driver's positions. A race whose positions
/// could not be read, or where the driver has no records, contributes
/// nothing. Cancellation is checked between races and keeps the totals
/// gathered so far.
pub async fn collect_career_stats(
    telemetry: &Telemetry,
    sessions: &[Session],
    driver_number: u32,
    cancel: &CancellationToken,
) -> CareerStats {
    let races = race_visit_order(sessions);
    let total = races.len();
    let mut acc = CareerAccumulator::default();
    let mut processed = 0;
    let mut cancelled = false;

    for (i, race) in races.iter().enumerate() {
        if cancel.is_cancelled() {
            info!(
                "Stats gathering for driver {} cancelled after {}/{} races",
                driver_number, processed, total
            );
            cancelled = true;
            break;
        }
        debug!(
            "Race {}/{}: {} - {}",
            i + 1,
            total,
            race.country_name,
            race.circuit_short_name
        );

        let positions = telemetry.positions(race.session_key).await;
        if let Some(final_position) = final_position_of(&positions, driver_number) {
            acc.record_finish(race.year, final_position);
        }
        processed += 1;
    }

    CareerStats {
        career: acc.career(),
        seasons: acc.seasons(),
        races_considered: total,
        races_processed: processed,
        cancelled,
    }
}

/// Runs the gather on its own task. Dropping the returned future before it
/// resolves cancels the task at its next race boundary.
pub async fn gather_detached(
    telemetry: Telemetry,
    races: Vec<Session>,
    driver_number: u32,
    cancel: CancellationToken,
) -> Result<CareerStats, JoinError> {
    let _guard = cancel.clone().drop_guard();
    tokio::spawn(async move {
        collect_career_stats(&telemetry, &races, driver_number, &cancel).await
    })
    .await
}
