use async_trait::async_trait;
use travelagent_core::error::TransportError;
use travelagent_core::types::TripResponse;

/// Sends one trip request to the agent service.
///
/// Implementations must not trim or validate `message`, and must not retry.
#[async_trait]
pub trait TripTransport: Send + Sync {
    async fn send_trip_request(&self, message: &str) -> Result<TripResponse, TransportError>;
}
