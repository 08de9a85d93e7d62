use std::time::Duration;
use travelagent_core::error::TransportErrorKind;
use travelagent_providers::AgentClient;
use travelagent_providers::runtime::HttpTimeouts;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn posts_message_and_decodes_itinerary() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({"message": "Barcelona, 2 nights"})))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{
                "answer": "",
                "query": "Hotels in Barcelona",
                "flights": null,
                "hotels": [{"name":"Hotel Arts","city":"Barcelona","checkout":"2025-02-03",
                            "price_usd_per_night": 240, "currency": "USD"}],
                "status": "COMPLETED",
                "execution_time_ms": 2210
            }"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = AgentClient::new(server.uri());
    let resp = client.send_trip_request("Barcelona, 2 nights").await.unwrap();

    assert_eq!(resp.query.as_deref(), Some("Hotels in Barcelona"));
    assert_eq!(resp.flights, None);
    let hotels = resp.hotels.unwrap();
    assert_eq!(hotels[0].nightly_price_string(), "240.00 USD / night");
    assert_eq!(resp.execution_time_ms, Some(2210.0));
}

#[tokio::test]
async fn non_2xx_is_a_status_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(500).set_body_string("graph crashed"))
        .mount(&server)
        .await;

    let err = AgentClient::new(server.uri())
        .send_trip_request("anything")
        .await
        .unwrap_err();
    assert_eq!(err.kind, TransportErrorKind::Status(500));
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn malformed_body_is_a_decode_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"answer\": "))
        .mount(&server)
        .await;

    let err = AgentClient::new(server.uri())
        .send_trip_request("anything")
        .await
        .unwrap_err();
    assert_eq!(err.kind, TransportErrorKind::Decode);
}

#[tokio::test]
async fn unreachable_server_is_a_connect_failure() {
    let uri = {
        let server = MockServer::start().await;
        server.uri()
    };

    let client = AgentClient::new(uri.clone()).with_timeouts(HttpTimeouts {
        connect: Duration::from_secs(2),
        total: Duration::from_secs(5),
    });
    let err = client.send_trip_request("anything").await.unwrap_err();
    assert_eq!(err.kind, TransportErrorKind::Connect);
    assert!(err.to_string().contains(&uri));
}

#[tokio::test]
async fn stalled_server_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("{}")
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let client = AgentClient::new(server.uri()).with_timeouts(HttpTimeouts {
        connect: Duration::from_secs(1),
        total: Duration::from_millis(200),
    });
    let err = client.send_trip_request("anything").await.unwrap_err();
    assert_eq!(err.kind, TransportErrorKind::Timeout);
}
