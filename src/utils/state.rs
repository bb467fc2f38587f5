use crate::utils::{config::Config, telemetry::Telemetry};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub telemetry: Telemetry,
}
