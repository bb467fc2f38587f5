pub mod chart;
pub mod driver;
pub mod error;
pub mod report;
pub mod session;
pub mod standing;
pub mod stats;
pub mod telemetry;
pub mod track;

use serde::{Deserialize, Deserializer};

/// OpenF1 sends `null` for fields it has no value for yet (team colour,
/// compound, acronym). Those decode to the type's default instead of
/// rejecting the whole batch.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
