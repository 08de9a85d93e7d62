use crate::request::HttpRequest;
use travelagent_core::error::{TransportError, TransportErrorKind};
use travelagent_core::types::TripRequest;

pub const CHAT_PATH: &str = "/chat";

/// `POST {base_url}/chat` with `{"message": ...}`. The message is sent as-is.
pub fn build_chat_request(base_url: &str, message: &str) -> Result<HttpRequest, TransportError> {
    let url = join_url(base_url, CHAT_PATH);
    HttpRequest::post_json(url, &TripRequest::new(message)).map_err(|e| {
        TransportError::new(
            TransportErrorKind::InvalidRequest,
            format!("The request could not be encoded: {e:#}"),
        )
    })
}

pub(crate) fn join_url(base: &str, path: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}", base, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_handles_slashes() {
        assert_eq!(
            join_url("http://127.0.0.1:8000/", "/chat"),
            "http://127.0.0.1:8000/chat"
        );
        assert_eq!(
            join_url("http://agent.local/api", "chat"),
            "http://agent.local/api/chat"
        );
    }

    #[test]
    fn message_is_sent_verbatim() {
        let req = build_chat_request("http://127.0.0.1:8000", "  SFO to LAX \n").unwrap();
        assert_eq!(req.url, "http://127.0.0.1:8000/chat");
        assert_eq!(req.header("Content-Type"), Some("application/json"));

        let body: serde_json::Value = serde_json::from_str(&req.body).unwrap();
        assert_eq!(body, serde_json::json!({"message": "  SFO to LAX \n"}));
    }
}
