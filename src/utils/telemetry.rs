//! Typed, failure-tolerant reads against a [`TelemetrySource`].
//!
//! Every public query applies [`empty_on_error`]: a transport, status or
//! decode failure is logged and the caller receives an empty collection.
//! "No records" may therefore also mean "the read failed", and the
//! aggregation code is written to be correct on partial or empty input.
//! Callers that need the failure use [`Telemetry::try_records`].

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::warn;

use crate::{
    models::{
        driver::Driver,
        error::FetchError,
        session::{Meeting, Session, SessionResult},
        telemetry::{Lap, PitStop, Position, Stint},
    },
    utils::openf1::{Endpoint, TelemetrySource},
};

#[derive(Clone)]
pub struct Telemetry {
    source: Arc<dyn TelemetrySource>,
}

impl Telemetry {
    pub fn new(source: Arc<dyn TelemetrySource>) -> Self {
        Telemetry { source }
    }

    pub async fn sessions(&self, year: i32, country_name: Option<&str>) -> Vec<Session> {
        let mut params = vec![("year", year.to_string())];
        if let Some(country) = country_name.filter(|c| !c.is_empty()) {
            params.push(("country_name", country.to_string()));
        }
        self.records::<Session>(Endpoint::Sessions, &params)
            .await
            .into_iter()
            .filter(|s| {
                let valid = s.has_valid_window();
                if !valid {
                    warn!("Dropping session {}: ends before it starts", s.session_key);
                }
                valid
            })
            .collect()
    }

    pub async fn session(&self, session_key: u32) -> Option<Session> {
        self.records::<Session>(Endpoint::Sessions, &[("session_key", session_key.to_string())])
            .await
            .into_iter()
            .next()
    }

    pub async fn meetings(&self, year: i32) -> Vec<Meeting> {
        self.records(Endpoint::Meetings, &[("year", year.to_string())])
            .await
    }

    pub async fn drivers(&self, session_key: u32) -> Vec<Driver> {
        self.by_session(Endpoint::Drivers, session_key).await
    }

    pub async fn positions(&self, session_key: u32) -> Vec<Position> {
        self.by_session(Endpoint::Positions, session_key).await
    }

    pub async fn laps(&self, session_key: u32) -> Vec<Lap> {
        self.by_session(Endpoint::Laps, session_key).await
    }

    pub async fn pit_stops(&self, session_key: u32) -> Vec<PitStop> {
        self.by_session(Endpoint::PitStops, session_key).await
    }

    pub async fn stints(&self, session_key: u32) -> Vec<Stint> {
        self.by_session(Endpoint::Stints, session_key).await
    }

    pub async fn session_results(&self, session_key: u32) -> Vec<SessionResult> {
        self.by_session(Endpoint::SessionResults, session_key).await
    }

    async fn by_session<T: DeserializeOwned>(&self, endpoint: Endpoint, session_key: u32) -> Vec<T> {
        self.records(endpoint, &[("session_key", session_key.to_string())])
            .await
    }

    async fn records<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        params: &[(&str, String)],
    ) -> Vec<T> {
        empty_on_error(endpoint, self.try_records(endpoint, params).await)
    }

    /// Raw read without the empty-on-error policy.
    pub async fn try_records<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        params: &[(&str, String)],
    ) -> Result<Vec<T>, FetchError> {
        let body = self.source.get(endpoint, params).await?;
        decode_records(&body)
    }
}

/// Policy for reads that must never fail a view: log and yield no records.
pub fn empty_on_error<T>(endpoint: Endpoint, result: Result<Vec<T>, FetchError>) -> Vec<T> {
    match result {
        Ok(records) => records,
        Err(err) => {
            warn!("Error fetching {}: {}", endpoint.entity(), err);
            Vec::new()
        }
    }
}

/// Decodes a JSON array of records, matching field names case-insensitively.
pub fn decode_records<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, FetchError> {
    let value: Value = serde_json::from_str(body)?;
    Ok(serde_json::from_value(lowercase_keys(value))?)
}

fn lowercase_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k.to_lowercase(), lowercase_keys(v)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(lowercase_keys).collect()),
        other => other,
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use std::{collections::HashMap, sync::Mutex, time::Duration};

    use async_trait::async_trait;
    use tokio_util::sync::CancellationToken;

    use crate::{
        models::error::FetchError,
        utils::openf1::{Endpoint, TelemetrySource},
    };

    enum Reply {
        Body(String),
        Status(u16),
    }

    /// In-memory source keyed by endpoint and the value of its first filter.
    /// Unregistered reads answer with an empty array.
    #[derive(Default)]
    pub struct FakeSource {
        replies: HashMap<(Endpoint, String), Reply>,
        delay: Option<Duration>,
        cancel_after: Option<(usize, CancellationToken)>,
        pub calls: Mutex<Vec<(Endpoint, Vec<(String, String)>)>>,
    }

    impl FakeSource {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with(mut self, endpoint: Endpoint, key: impl ToString, body: impl Into<String>) -> Self {
            self.replies
                .insert((endpoint, key.to_string()), Reply::Body(body.into()));
            self
        }

        pub fn failing(mut self, endpoint: Endpoint, key: impl ToString, status: u16) -> Self {
            self.replies
                .insert((endpoint, key.to_string()), Reply::Status(status));
            self
        }

        /// Every reply is held back for `delay`.
        pub fn delayed(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }

        /// Cancels `token` once `replies` reads have been answered.
        pub fn cancelling_after(mut self, replies: usize, token: CancellationToken) -> Self {
            self.cancel_after = Some((replies, token));
            self
        }

        pub fn call_count(&self, endpoint: Endpoint) -> usize {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .filter(|(e, _)| *e == endpoint)
                .count()
        }
    }

    #[async_trait]
    impl TelemetrySource for FakeSource {
        async fn get(
            &self,
            endpoint: Endpoint,
            params: &[(&str, String)],
        ) -> Result<String, FetchError> {
            let answered = {
                let mut calls = self.calls.lock().unwrap();
                calls.push((
                    endpoint,
                    params
                        .iter()
                        .map(|(k, v)| (k.to_string(), v.clone()))
                        .collect(),
                ));
                calls.len()
            };
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            if let Some((after, token)) = &self.cancel_after {
                if answered >= *after {
                    token.cancel();
                }
            }
            let key = params.first().map(|(_, v)| v.clone()).unwrap_or_default();
            match self.replies.get(&(endpoint, key)) {
                Some(Reply::Body(body)) => Ok(body.clone()),
                Some(Reply::Status(status)) => {
                    Err(FetchError::status(*status, endpoint.path()))
                }
                None => Ok("[]".to_string()),
            }
        }
    }
}
