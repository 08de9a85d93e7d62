use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentEndpoint {
    pub base_url: String,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    // Agent graphs backed by local models can take a while; keep this generous.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for AgentEndpoint {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

fn default_connect_timeout_secs() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECS
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub agent: AgentEndpoint,

    /// Pre-filled request text.
    #[serde(default)]
    pub default_message: String,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.agent.base_url.trim();
        let parsed = url::Url::parse(url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                url: url.to_string(),
                reason: format!("unsupported scheme {:?}", parsed.scheme()),
            });
        }

        if self.agent.connect_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout {
                field: "connect_timeout_secs",
            });
        }
        if self.agent.request_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout {
                field: "request_timeout_secs",
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(base_url: &str) -> AppConfig {
        AppConfig {
            agent: AgentEndpoint {
                base_url: base_url.into(),
                ..Default::default()
            },
            default_message: String::new(),
        }
    }

    #[test]
    fn accepts_local_http_endpoint() {
        assert!(cfg("http://127.0.0.1:8000").validate().is_ok());
        assert!(cfg("https://agent.example.com/api/").validate().is_ok());
    }

    #[test]
    fn rejects_relative_or_non_http_urls() {
        assert!(matches!(
            cfg("127.0.0.1:8000/chat").validate(),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            cfg("ftp://example.com").validate(),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn rejects_zero_timeouts() {
        let mut c = cfg(DEFAULT_BASE_URL);
        c.agent.request_timeout_secs = 0;
        assert_eq!(
            c.validate(),
            Err(ConfigError::ZeroTimeout {
                field: "request_timeout_secs"
            })
        );
    }

    #[test]
    fn timeouts_default_when_missing_from_json() {
        let c: AppConfig =
            serde_json::from_str(r#"{"agent":{"base_url":"http://localhost:9000"}}"#).unwrap();
        assert_eq!(c.agent.connect_timeout_secs, DEFAULT_CONNECT_TIMEOUT_SECS);
        assert_eq!(c.agent.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
        assert_eq!(c.default_message, "");
    }

    #[test]
    fn agent_section_is_optional() {
        let c: AppConfig = serde_json::from_str(r#"{"default_message":"Lisbon"}"#).unwrap();
        assert_eq!(c.agent, AgentEndpoint::default());
        assert_eq!(c.default_message, "Lisbon");
        assert!(c.validate().is_ok());
    }
}
