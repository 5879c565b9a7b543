// tests/common/mod.rs
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use cfb_picker::{
    client::ApiClient,
    config::Credential,
    core::{HttpResponse, Transport},
    error::FetchError,
    games::Game,
};
use serde_json::{Value, json};

pub const BASE: &str = "https://api.test";

/// Paths requested so far, in order.
pub type Calls = Arc<Mutex<Vec<String>>>;

/// Canned API: each path answers with a fixed status and body; anything
/// unrouted is a 404. A later route for the same path replaces an earlier one.
#[derive(Default)]
pub struct FakeApi {
    routes: Vec<(String, u16, String)>,
    default_status: Option<u16>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every request, routed or not, answers with `status` and an empty body.
    pub fn failing(status: u16) -> Self {
        Self { routes: Vec::new(), default_status: Some(status) }
    }

    pub fn route(mut self, path: &str, body: Value) -> Self {
        self.routes.push((path.to_string(), 200, body.to_string()));
        self
    }

    pub fn route_status(mut self, path: &str, status: u16) -> Self {
        self.routes.push((path.to_string(), status, String::new()));
        self
    }

    pub fn client(self, token: &str) -> (ApiClient, Calls) {
        let calls: Calls = Arc::default();
        let log = Arc::clone(&calls);
        let prefix = format!("{BASE}/");

        let transport = move |url: &str, _q: &[(String, String)], _bearer: &str| {
            let path = url.strip_prefix(&prefix).unwrap_or(url).to_string();
            log.lock().unwrap().push(path.clone());

            if let Some(status) = self.default_status {
                return Ok::<_, FetchError>(HttpResponse { status, body: String::new() });
            }
            match self.routes.iter().rev().find(|(p, _, _)| *p == path) {
                Some((_, status, body)) => Ok(HttpResponse { status: *status, body: body.clone() }),
                None => Ok(HttpResponse { status: 404, body: String::new() }),
            }
        };

        let transport: Arc<dyn Transport> = Arc::new(transport);
        (ApiClient::with_transport(transport, BASE, Credential::new(token)), calls)
    }
}

pub fn game() -> Game {
    serde_json::from_value(json!({
        "id": 401,
        "season": 2024,
        "week": 7,
        "season_type": "regular",
        "start_date": "2024-10-12T19:30:00.000Z",
        "venue": "Ohio Stadium",
        "home_team": "Ohio State",
        "home_conference": "Big Ten",
        "away_team": "Penn State",
        "away_conference": "Big Ten"
    }))
    .unwrap()
}

pub fn games_list(n: usize) -> Value {
    Value::Array(
        (0..n)
            .map(|i| {
                json!({
                    "id": 100 + i,
                    "season": 2024,
                    "week": 1,
                    "seasonType": "regular",
                    "homeTeam": format!("Home {i}"),
                    "awayTeam": format!("Away {i}")
                })
            })
            .collect(),
    )
}
