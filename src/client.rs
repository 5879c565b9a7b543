// src/client.rs
use std::sync::Arc;

use chrono::{DateTime, Datelike, Utc};
use serde_json::Value;

use crate::{
    calendar::{self, Period},
    config::{Credential, options::ApiOptions},
    core::net::{HttpTransport, Transport},
    endpoint::Endpoint,
    error::{Fetch, FetchError, Result},
    games::{self, Game},
};

/// Query parameters for one call.
pub type Params<'a> = [(&'a str, String)];

/// CollegeFootballData client. Cheap to clone; clones share the transport.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    base_url: String,
    credential: Credential,
}

impl ApiClient {
    pub fn new(options: &ApiOptions, credential: Credential) -> Result<Self> {
        let transport = Arc::new(HttpTransport::new()?);
        Ok(Self::with_transport(transport, &options.base_url, credential))
    }

    pub fn with_transport(
        transport: Arc<dyn Transport>,
        base_url: &str,
        credential: Credential,
    ) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
            credential,
        }
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Same transport and base URL, different token.
    pub fn with_credential(&self, credential: Credential) -> Self {
        Self { credential, ..self.clone() }
    }

    fn url(&self, endpoint: Endpoint) -> String {
        format!("{}/{}", self.base_url, endpoint.path())
    }

    /// True only when the API answers 200 to this token.
    pub fn validate_credential(&self, token: &Credential) -> bool {
        if token.is_empty() {
            return false;
        }
        match self.transport.get(&self.url(Endpoint::FbsTeams), &[], token.as_str()) {
            Ok(resp) => {
                logd!("Credential check: HTTP {}", resp.status);
                resp.status == 200
            }
            Err(e) => {
                logw!("Credential check failed: {}", e);
                false
            }
        }
    }

    /// GET + decode, no shaping.
    fn get_json(&self, endpoint: Endpoint, params: &Params) -> Fetch {
        let query: Vec<(String, String)> = params
            .iter()
            .map(|(k, v)| (s!(*k), v.clone()))
            .collect();

        let resp = self
            .transport
            .get(&self.url(endpoint), &query, self.credential.as_str())?;

        if !resp.is_success() {
            return Err(FetchError::from_status(resp.status));
        }
        Ok(serde_json::from_str(&resp.body)?)
    }

    /// One API call, shaped per endpoint. Failures are logged and returned typed.
    pub fn fetch(&self, endpoint: Endpoint, params: &Params) -> Fetch {
        match self.get_json(endpoint, params) {
            Ok(body) => Ok(shape(endpoint, body)),
            Err(e) => {
                logw!("Failed to fetch data from {}: {}", endpoint.path(), e);
                Err(e)
            }
        }
    }

    pub fn resolve_current_period(&self) -> Period {
        self.resolve_period_at(Utc::now())
    }

    /// Period for `now`; any failure to get the calendar falls back to week 1.
    pub fn resolve_period_at(&self, now: DateTime<Utc>) -> Period {
        let year = now.year();
        match self.fetch(Endpoint::Calendar, &[("year", year.to_string())]) {
            Ok(cal) => calendar::resolve_period(&cal, now),
            Err(_) => {
                logw!("Calendar: unavailable, using fallback period");
                Period::fallback(year)
            }
        }
    }

    /// Games for one week. Empty on any failure.
    pub fn list_games(
        &self,
        year: i32,
        week: u32,
        season_type: &str,
        division: Option<&str>,
    ) -> Vec<Game> {
        let mut params = vec![
            ("year", year.to_string()),
            ("week", week.to_string()),
            ("seasonType", s!(season_type)),
        ];
        if let Some(d) = division {
            params.push(("division", s!(d)));
        }

        match self.fetch(Endpoint::Games, &params) {
            Ok(body) => {
                let games = games::parse_games(&body);
                logf!("Games: {} for week {} {} ({})", games.len(), week, year, season_type);
                games
            }
            Err(_) => Vec::new(),
        }
    }
}

/// Multi-result endpoints pass through; otherwise a non-empty list unwraps to its head.
fn shape(endpoint: Endpoint, body: Value) -> Value {
    if endpoint.is_multi_result() {
        return body;
    }
    match body {
        Value::Array(mut list) if !list.is_empty() => list.swap_remove(0),
        other => other,
    }
}
