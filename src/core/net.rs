// src/core/net.rs
//
// HTTP GET seam. `ApiClient` only talks to `Transport`, so tests can
// swap the network for a closure.

use reqwest::{StatusCode, blocking::Client, header::ACCEPT};

use crate::{
    config::consts::USER_AGENT,
    error::{FetchError, Result},
};

/// Status + body of one GET. Body is left undecoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self { status: 200, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub trait Transport: Send + Sync {
    /// GET `url` with `query` and `Authorization: Bearer <bearer>`.
    /// Only transport-level failures are errors; any HTTP status is a response.
    fn get(
        &self,
        url: &str,
        query: &[(String, String)],
        bearer: &str,
    ) -> std::result::Result<HttpResponse, FetchError>;
}

impl<F> Transport for F
where
    F: Fn(&str, &[(String, String)], &str) -> std::result::Result<HttpResponse, FetchError>
        + Send
        + Sync,
{
    fn get(
        &self,
        url: &str,
        query: &[(String, String)],
        bearer: &str,
    ) -> std::result::Result<HttpResponse, FetchError> {
        self(url, query, bearer)
    }
}

/// reqwest-backed transport. Blocking: callers are plain threads.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(
        &self,
        url: &str,
        query: &[(String, String)],
        bearer: &str,
    ) -> std::result::Result<HttpResponse, FetchError> {
        let resp = self
            .client
            .get(url)
            .bearer_auth(bearer)
            .header(ACCEPT, "application/json")
            .query(query)
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status: StatusCode = resp.status();
        let body = resp.text().map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(HttpResponse { status: status.as_u16(), body })
    }
}
