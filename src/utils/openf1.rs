use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::{
    models::error::FetchError,
    utils::{config::Config, rate_limiter::RateLimiter},
};

/// Read-only collections exposed by the telemetry API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Sessions,
    Meetings,
    Drivers,
    Positions,
    Laps,
    PitStops,
    Stints,
    SessionResults,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Sessions => "sessions",
            Endpoint::Meetings => "meetings",
            Endpoint::Drivers => "drivers",
            Endpoint::Positions => "position",
            Endpoint::Laps => "laps",
            Endpoint::PitStops => "pit",
            Endpoint::Stints => "stints",
            Endpoint::SessionResults => "session_result",
        }
    }

    /// Entity name used in log lines.
    pub fn entity(self) -> &'static str {
        match self {
            Endpoint::Sessions => "Session",
            Endpoint::Meetings => "Meeting",
            Endpoint::Drivers => "Driver",
            Endpoint::Positions => "Position",
            Endpoint::Laps => "Lap",
            Endpoint::PitStops => "PitStop",
            Endpoint::Stints => "Stint",
            Endpoint::SessionResults => "SessionResult",
        }
    }
}

/// Anything that can answer a filtered read with a raw JSON body.
#[async_trait]
pub trait TelemetrySource: Send + Sync {
    async fn get(&self, endpoint: Endpoint, params: &[(&str, String)])
        -> Result<String, FetchError>;
}

pub struct OpenF1Client {
    http_client: Client,
    base_url: String,
    limiter: RateLimiter,
}

impl OpenF1Client {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(OpenF1Client {
            http_client,
            base_url: config.openf1_base_url.clone(),
            limiter: RateLimiter::new(config.max_concurrent_requests, config.request_min_delay),
        })
    }
}

#[async_trait]
impl TelemetrySource for OpenF1Client {
    async fn get(
        &self,
        endpoint: Endpoint,
        params: &[(&str, String)],
    ) -> Result<String, FetchError> {
        let _slot = self.limiter.acquire().await;
        let url = format!("{}/{}", self.base_url, endpoint.path());
        debug!(
            "GET {} {:?} ({} slots free)",
            url,
            params,
            self.limiter.available_permits()
        );

        let res = self.http_client.get(&url).query(params).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::status(status.as_u16(), res.url().as_str()));
        }
        Ok(res.text().await?)
    }
}
