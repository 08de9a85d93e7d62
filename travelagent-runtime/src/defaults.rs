use travelagent_core::config::{AgentEndpoint, AppConfig};

pub const DEFAULT_MESSAGE: &str = "SFO to LAX, depart 2025-01-10. Flights only.";

pub fn default_agent_endpoint() -> AgentEndpoint {
    AgentEndpoint::default()
}

pub fn default_app_config() -> AppConfig {
    AppConfig {
        agent: default_agent_endpoint(),
        default_message: DEFAULT_MESSAGE.into(),
    }
}
