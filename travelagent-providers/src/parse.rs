use travelagent_core::error::TransportError;
use travelagent_core::types::TripResponse;

const BODY_PREVIEW_CHARS: usize = 200;

/// Decode a `/chat` body. Missing or `null` keys are fine; anything that is
/// not a JSON object of the expected shape is a transport failure.
pub fn parse_trip_response(body: &[u8]) -> Result<TripResponse, TransportError> {
    serde_json::from_slice(body).map_err(|e| {
        log::debug!("undecodable /chat body: {}", body_preview(body));
        TransportError::decode(format!("The response could not be read: {e}"))
    })
}

pub(crate) fn body_preview(body: &[u8]) -> String {
    String::from_utf8_lossy(body)
        .chars()
        .take(BODY_PREVIEW_CHARS)
        .collect()
}
