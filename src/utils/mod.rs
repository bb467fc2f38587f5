pub mod config;
pub mod openf1;
pub mod race_utils;
pub mod rate_limiter;
pub mod state;
pub mod telemetry;
pub mod track_images;
