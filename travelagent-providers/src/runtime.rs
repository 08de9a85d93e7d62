use crate::request::HttpRequest;
use anyhow::Context;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;
use travelagent_core::config::AgentEndpoint;

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTimeouts {
    pub connect: Duration,
    pub total: Duration,
}

impl From<&AgentEndpoint> for HttpTimeouts {
    fn from(endpoint: &AgentEndpoint) -> Self {
        Self {
            connect: Duration::from_secs(endpoint.connect_timeout_secs),
            total: Duration::from_secs(endpoint.request_timeout_secs),
        }
    }
}

impl Default for HttpTimeouts {
    fn default() -> Self {
        Self::from(&AgentEndpoint::default())
    }
}

pub async fn execute(req: &HttpRequest, timeouts: HttpTimeouts) -> anyhow::Result<HttpResponse> {
    // Without a deadline a stalled agent would leave the session loading forever.
    let client = reqwest::Client::builder()
        .connect_timeout(timeouts.connect)
        .timeout(timeouts.total)
        .build()
        .context("build http client")?;

    let mut headers = HeaderMap::new();
    for (k, v) in &req.headers {
        let name = HeaderName::from_bytes(k.as_bytes())
            .with_context(|| format!("invalid header name: {k}"))?;
        let value =
            HeaderValue::from_str(v).with_context(|| format!("invalid header value for {k}"))?;
        headers.insert(name, value);
    }

    let resp = client
        .post(&req.url)
        .headers(headers)
        .body(req.body.clone())
        .send()
        .await
        .context("http request failed")?;
    let status = resp.status().as_u16();
    let body = resp
        .bytes()
        .await
        .context("failed reading response body")?
        .to_vec();

    Ok(HttpResponse { status, body })
}

/// Finds the underlying reqwest error, if the failure came from the HTTP stack.
pub fn http_error(err: &anyhow::Error) -> Option<&reqwest::Error> {
    err.chain().find_map(|e| e.downcast_ref::<reqwest::Error>())
}
