use travelagent_core::config::AgentEndpoint;
use travelagent_core::error::TransportError;
use travelagent_core::types::TripResponse;
use travelagent_engine::traits::TripTransport;
use travelagent_providers::AgentClient;

/// Plugs the `/chat` HTTP client into the orchestrator.
#[derive(Debug, Clone)]
pub struct HttpTripTransport {
    client: AgentClient,
}

impl HttpTripTransport {
    pub fn new(endpoint: &AgentEndpoint) -> Self {
        Self {
            client: AgentClient::from_endpoint(endpoint),
        }
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }
}

#[async_trait::async_trait]
impl TripTransport for HttpTripTransport {
    async fn send_trip_request(&self, message: &str) -> Result<TripResponse, TransportError> {
        self.client.send_trip_request(message).await
    }
}
