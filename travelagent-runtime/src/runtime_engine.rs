use std::sync::Arc;

use travelagent_core::config::AppConfig;
use travelagent_engine::orchestrator::RequestOrchestrator;

use crate::transport::HttpTripTransport;

/// Build the process-wide orchestrator from a validated config.
///
/// Call once at startup and share clones of the handle.
pub fn build_orchestrator(cfg: &AppConfig) -> anyhow::Result<RequestOrchestrator> {
    cfg.validate()?;

    let transport = HttpTripTransport::new(&cfg.agent);
    log::info!("travel agent endpoint: {}", transport.base_url());

    Ok(RequestOrchestrator::new(
        Arc::new(transport),
        cfg.default_message.clone(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_app_config;
    use travelagent_engine::orchestrator::SubmitOutcome;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn invalid_config_is_rejected() {
        let mut cfg = default_app_config();
        cfg.agent.base_url = "not a url".into();
        assert!(build_orchestrator(&cfg).is_err());
    }

    #[test]
    fn session_starts_with_configured_message() {
        let orch = build_orchestrator(&default_app_config()).unwrap();
        let s = orch.snapshot();
        assert_eq!(s.message, crate::defaults::DEFAULT_MESSAGE);
        assert!(!s.is_loading);
    }

    #[tokio::test]
    async fn submits_against_configured_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"answer":"Try a different date.","status":"COMPLETED"}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let mut cfg = default_app_config();
        cfg.agent.base_url = format!("{}/", server.uri());

        let orch = build_orchestrator(&cfg).unwrap();
        assert_eq!(orch.submit().await, SubmitOutcome::Completed);
        assert_eq!(orch.snapshot().result_answer, "Try a different date.");
    }
}
