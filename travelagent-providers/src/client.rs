use crate::agent_api::build_chat_request;
use crate::parse::{body_preview, parse_trip_response};
use crate::runtime::{self, HttpTimeouts};
use travelagent_core::config::AgentEndpoint;
use travelagent_core::error::TransportError;
use travelagent_core::types::TripResponse;

/// Stateless client for the agent's `/chat` endpoint.
///
/// One call is one POST: no retries, nothing cached between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentClient {
    base_url: String,
    timeouts: HttpTimeouts,
}

impl AgentClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeouts: HttpTimeouts::default(),
        }
    }

    pub fn from_endpoint(endpoint: &AgentEndpoint) -> Self {
        Self {
            base_url: endpoint.base_url.clone(),
            timeouts: HttpTimeouts::from(endpoint),
        }
    }

    pub fn with_timeouts(mut self, timeouts: HttpTimeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn send_trip_request(&self, message: &str) -> Result<TripResponse, TransportError> {
        let req = build_chat_request(&self.base_url, message)?;
        log::debug!("dispatching {req:?}");

        let resp = runtime::execute(&req, self.timeouts)
            .await
            .map_err(|e| self.classify(&e))?;

        if !resp.is_success() {
            log::debug!(
                "agent returned HTTP {}: {}",
                resp.status,
                body_preview(&resp.body)
            );
            return Err(TransportError::status(resp.status));
        }

        parse_trip_response(&resp.body)
    }

    fn classify(&self, err: &anyhow::Error) -> TransportError {
        match runtime::http_error(err) {
            Some(e) if e.is_timeout() => TransportError::timeout("The request timed out."),
            Some(e) if e.is_connect() => TransportError::connect(format!(
                "Could not connect to the travel agent at {}.",
                self.base_url
            )),
            Some(e) if e.is_decode() || e.is_body() => {
                TransportError::decode(format!("The response could not be read: {e}"))
            }
            _ => TransportError::connect(format!("The request failed: {err:#}")),
        }
    }
}
