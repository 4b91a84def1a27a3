//! Request-executor behavior against a stub transport: outcome
//! classification, header handling and concurrency.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{SECRET_KEY, client_for};
use hyperswitch::models::payment::PaymentResponse;
use hyperswitch::services::PaymentService;
use hyperswitch::{HyperswitchClient, HyperswitchError};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn non_2xx_with_structured_error_is_classified() {
    let server = MockServer::start().await;
    let envelope = json!({"error": {"code": "not_found", "message": "no such resource"}});
    Mock::given(method("GET"))
        .and(path("/payments/pay_missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(&envelope))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = PaymentService::new(&client)
        .retrieve("pay_missing")
        .await
        .unwrap_err();

    match &err {
        HyperswitchError::Api {
            status,
            code,
            message,
            body,
        } => {
            assert_eq!(*status, 404);
            assert_eq!(code.as_deref(), Some("not_found"));
            assert_eq!(message, "no such resource");
            // Raw body is preserved verbatim alongside the parsed detail.
            let reparsed: serde_json::Value = serde_json::from_str(body).unwrap();
            assert_eq!(reparsed, envelope);
        }
        other => panic!("expected Api error, got {other:?}"),
    }
    assert_eq!(err.status(), 404);
    assert_eq!(err.error_code(), Some("not_found"));
}

#[tokio::test]
async fn non_2xx_with_opaque_body_keeps_raw_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/payments/pay_1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = PaymentService::new(&client)
        .retrieve("pay_1")
        .await
        .unwrap_err();

    assert_eq!(err.status(), 500);
    assert_eq!(err.error_code(), None);
    assert_eq!(err.response_body(), Some("<html>oops</html>"));
    assert!(err.to_string().contains("request failed with status 500"));
}

#[tokio::test]
async fn empty_2xx_body_is_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/payments/pay_1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let outcome = PaymentService::new(&client).retrieve("pay_1").await.unwrap();
    assert!(outcome.is_none());
}

#[tokio::test]
async fn mismatched_2xx_body_is_a_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/payments/pay_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([1, 2, 3])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = PaymentService::new(&client)
        .retrieve("pay_1")
        .await
        .unwrap_err();

    // The HTTP layer succeeded; the failure is the violated contract.
    match &err {
        HyperswitchError::Decode { status, body, .. } => {
            assert_eq!(*status, 200);
            assert_eq!(body, "[1,2,3]");
        }
        other => panic!("expected Decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn timed_out_request_is_cancelled_not_transport() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/payments/pay_slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"payment_id": "pay_slow", "amount": 100}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let client = HyperswitchClient::builder(SECRET_KEY, "pk")
        .with_base_url(server.uri())
        .with_timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let err = PaymentService::new(&client)
        .retrieve("pay_slow")
        .await
        .unwrap_err();
    assert!(matches!(err, HyperswitchError::Cancelled(_)));
    assert_eq!(err.status(), 0);
}

#[tokio::test]
async fn unreachable_host_is_a_transport_failure() {
    // Nothing listens on the discard port.
    let client = HyperswitchClient::builder(SECRET_KEY, "pk")
        .with_base_url("http://127.0.0.1:9")
        .build()
        .unwrap();

    let err = PaymentService::new(&client)
        .retrieve("pay_1")
        .await
        .unwrap_err();
    assert!(matches!(err, HyperswitchError::Transport(_)));
    assert_eq!(err.status(), 0);
}

#[tokio::test]
async fn secret_key_travels_in_the_api_key_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/payments/pay_1"))
        .and(header("api-key", SECRET_KEY))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"payment_id": "pay_1", "amount": 100})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let payment = PaymentService::new(&client)
        .retrieve("pay_1")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(payment.payment_id.as_deref(), Some("pay_1"));
}

#[tokio::test]
async fn force_sync_is_passed_as_a_query_parameter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/payments/pay_1"))
        .and(query_param("force_sync", "true"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"payment_id": "pay_1", "amount": 100, "status": "succeeded"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let payment = PaymentService::new(&client)
        .sync_status("pay_1", true)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(payment.status.as_deref(), Some("succeeded"));
}

#[tokio::test]
async fn concurrent_calls_share_the_pool_safely() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/payments/pay_1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"payment_id": "pay_1", "amount": 100}))
                .set_delay(Duration::from_millis(100)),
        )
        .expect(8)
        .mount(&server)
        .await;

    let client = Arc::new(client_for(&server));
    let mut handles = Vec::new();
    for _ in 0..8 {
        let client = Arc::clone(&client);
        handles.push(tokio::spawn(async move {
            PaymentService::new(&client).retrieve("pay_1").await
        }));
    }

    for handle in handles {
        let payment: Option<PaymentResponse> = handle.await.unwrap().unwrap();
        assert_eq!(payment.unwrap().payment_id.as_deref(), Some("pay_1"));
    }
}
