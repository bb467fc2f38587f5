use serde::Serialize;

/// Gallery card for one race weekend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackInfo {
    pub meeting_key: u32,
    pub meeting_official_name: String,
    pub circuit_short_name: String,
    pub country_name: String,
    pub year: i32,
    /// Empty when the circuit is not in the image table.
    pub image_url: String,
    pub flag_url: String,
}
