use anyhow::Context;
use serde::Serialize;

/// A fully built JSON POST, independent of the HTTP stack that sends it.
#[derive(Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl std::fmt::Debug for HttpRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let headers: Vec<(String, String)> = self
            .headers
            .iter()
            .map(|(k, v)| {
                let v = if is_sensitive(k) { "[REDACTED]".into() } else { v.clone() };
                (k.clone(), v)
            })
            .collect();

        f.debug_struct("HttpRequest")
            .field("method", &"POST")
            .field("url", &self.url)
            .field("headers", &headers)
            .field("body_len", &self.body.len())
            .finish()
    }
}

fn is_sensitive(name: &str) -> bool {
    let name = name.to_ascii_lowercase();
    name == "authorization" || name == "cookie" || name.contains("api-key")
}

impl HttpRequest {
    pub fn post_json<T: Serialize>(url: impl Into<String>, payload: &T) -> anyhow::Result<Self> {
        let body = serde_json::to_string(payload).context("encode request JSON")?;
        Ok(Self {
            url: url.into(),
            headers: vec![("Content-Type".into(), "application/json".into())],
            body,
        })
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}
