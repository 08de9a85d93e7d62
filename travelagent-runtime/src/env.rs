use travelagent_core::config::AppConfig;
use travelagent_core::error::ConfigError;

pub const ENV_BASE_URL: &str = "TRAVEL_AGENT_BASE_URL";
pub const ENV_HOST: &str = "TRAVEL_AGENT_HOST";
pub const ENV_PORT: &str = "TRAVEL_AGENT_PORT";
pub const ENV_TIMEOUT_SECS: &str = "TRAVEL_AGENT_TIMEOUT_SECS";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;

pub fn apply_env_overrides(cfg: &mut AppConfig) -> Result<(), ConfigError> {
    apply_overrides_from(cfg, |key| std::env::var(key).ok())
}

/// `TRAVEL_AGENT_BASE_URL` wins over the host/port pair the agent server itself reads.
/// Empty values are ignored.
pub fn apply_overrides_from<F>(cfg: &mut AppConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    if let Some(url) = get(ENV_BASE_URL) {
        cfg.agent.base_url = url;
    } else {
        let host = get(ENV_HOST);
        let port = get(ENV_PORT);
        if host.is_some() || port.is_some() {
            let port = match port {
                Some(p) => p.parse::<u16>().map_err(|_| ConfigError::InvalidEnv {
                    var: ENV_PORT,
                    value: p.clone(),
                })?,
                None => DEFAULT_PORT,
            };
            let host = host.unwrap_or_else(|| DEFAULT_HOST.to_string());
            cfg.agent.base_url = format!("http://{host}:{port}");
        }
    }

    if let Some(secs) = get(ENV_TIMEOUT_SECS) {
        cfg.agent.request_timeout_secs =
            secs.parse::<u64>().map_err(|_| ConfigError::InvalidEnv {
                var: ENV_TIMEOUT_SECS,
                value: secs.clone(),
            })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_app_config;
    use std::collections::HashMap;

    fn apply(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let mut cfg = default_app_config();
        apply_overrides_from(&mut cfg, |k| vars.get(k).cloned())?;
        Ok(cfg)
    }

    #[test]
    fn no_vars_keeps_config() {
        assert_eq!(apply(&[]).unwrap(), default_app_config());
    }

    #[test]
    fn base_url_wins_over_host_and_port() {
        let cfg = apply(&[
            (ENV_BASE_URL, "http://agent.internal:9000"),
            (ENV_HOST, "0.0.0.0"),
        ])
        .unwrap();
        assert_eq!(cfg.agent.base_url, "http://agent.internal:9000");
    }

    #[test]
    fn host_and_port_build_url() {
        let cfg = apply(&[(ENV_PORT, "8081")]).unwrap();
        assert_eq!(cfg.agent.base_url, "http://127.0.0.1:8081");

        let cfg = apply(&[(ENV_HOST, "192.168.1.20"), (ENV_PORT, " ")]).unwrap();
        assert_eq!(cfg.agent.base_url, "http://192.168.1.20:8000");
    }

    #[test]
    fn bad_numbers_are_rejected() {
        assert_eq!(
            apply(&[(ENV_PORT, "eighty")]),
            Err(ConfigError::InvalidEnv {
                var: ENV_PORT,
                value: "eighty".into()
            })
        );
        assert!(apply(&[(ENV_TIMEOUT_SECS, "-1")]).is_err());
    }

    #[test]
    fn timeout_override() {
        let cfg = apply(&[(ENV_TIMEOUT_SECS, "30")]).unwrap();
        assert_eq!(cfg.agent.request_timeout_secs, 30);
    }
}
