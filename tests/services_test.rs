//! Resource-service behavior: path/verb bindings, payload shape, argument
//! validation and default-profile substitution.

mod common;

use common::{PUBLISHABLE_KEY, SECRET_KEY, client_for, client_with_profile};
use hyperswitch::HyperswitchError;
use hyperswitch::models::customer::CustomerListRequest;
use hyperswitch::models::merchant::PaymentMethodListRequest;
use hyperswitch::models::payment::PaymentCreateRequest;
use hyperswitch::models::payout::{
    PayoutBank, PayoutCreateRequest, PayoutMethodData, PayoutType,
};
use hyperswitch::models::refund::{RefundCreateRequest, RefundListRequest};
use hyperswitch::services::{
    CustomerService, MerchantService, PaymentService, PayoutService, RefundService,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn payment_create_round_trips_populated_fields() {
    let server = MockServer::start().await;
    // Exact body match: unset optionals must be absent, not null, and the
    // configured default profile id must have been substituted.
    let expected_body = json!({
        "amount": 6540,
        "currency": "USD",
        "confirm": true,
        "customer_id": "cus_1",
        "profile_id": "pro_default",
    });
    Mock::given(method("POST"))
        .and(path("/payments"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "payment_id": "pay_1",
            "amount": 6540,
            "currency": "USD",
            "customer_id": "cus_1",
            "status": "succeeded",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_profile(&server, "pro_default");
    let mut request = PaymentCreateRequest::new(6540, "USD");
    request.customer_id = Some("cus_1".to_string());

    let payment = PaymentService::new(&client)
        .create(request)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(payment.payment_id.as_deref(), Some("pay_1"));
    assert_eq!(payment.amount, 6540);
    assert_eq!(payment.currency.as_deref(), Some("USD"));
    assert_eq!(payment.customer_id.as_deref(), Some("cus_1"));
}

#[tokio::test]
async fn explicit_profile_id_wins_over_the_default() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/payments"))
        .and(body_json(json!({
            "amount": 100,
            "currency": "EUR",
            "confirm": true,
            "profile_id": "pro_explicit",
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"payment_id": "pay_2", "amount": 100})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_profile(&server, "pro_default");
    let mut request = PaymentCreateRequest::new(100, "EUR");
    request.profile_id = Some("pro_explicit".to_string());

    PaymentService::new(&client).create(request).await.unwrap();
}

#[tokio::test]
async fn blank_profile_id_is_treated_as_unset() {
    let server = MockServer::start().await;
    // A whitespace-only profile id counts as absent, so the configured
    // default takes its place in the outgoing body.
    Mock::given(method("POST"))
        .and(path("/payments"))
        .and(body_json(json!({
            "amount": 100,
            "currency": "EUR",
            "confirm": true,
            "profile_id": "pro_default",
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"payment_id": "pay_3", "amount": 100})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_profile(&server, "pro_default");
    let mut request = PaymentCreateRequest::new(100, "EUR");
    request.profile_id = Some("   ".to_string());

    PaymentService::new(&client).create(request).await.unwrap();
}

#[tokio::test]
async fn empty_required_id_fails_before_any_network_call() {
    let server = MockServer::start().await;
    let client = client_for(&server);
    let payments = PaymentService::new(&client);
    let refunds = RefundService::new(&client);
    let customers = CustomerService::new(&client);

    assert!(matches!(
        payments.retrieve("").await.unwrap_err(),
        HyperswitchError::InvalidRequest(_)
    ));
    assert!(matches!(
        payments.capture("   ", None).await.unwrap_err(),
        HyperswitchError::InvalidRequest(_)
    ));
    assert!(matches!(
        refunds.retrieve(" ").await.unwrap_err(),
        HyperswitchError::InvalidRequest(_)
    ));
    assert!(matches!(
        refunds
            .create(&RefundCreateRequest::new(""))
            .await
            .unwrap_err(),
        HyperswitchError::InvalidRequest(_)
    ));
    assert!(matches!(
        customers.delete("").await.unwrap_err(),
        HyperswitchError::InvalidRequest(_)
    ));

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn refund_list_posts_filters_with_default_profile() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/refunds/list"))
        .and(body_json(json!({
            "payment_id": "pay_1",
            "profile_id": "pro_default",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "total_count": 1,
            "data": [{"refund_id": "ref_1", "payment_id": "pay_1", "amount": 6540}],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_profile(&server, "pro_default");
    let listed = RefundService::new(&client)
        .list(Some(RefundListRequest {
            payment_id: Some("pay_1".to_string()),
            ..Default::default()
        }))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(listed.count, 1);
    let data = listed.data.unwrap();
    assert_eq!(data[0].refund_id.as_deref(), Some("ref_1"));
}

#[tokio::test]
async fn customer_list_is_a_get_with_encoded_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/customers/list"))
        .and(query_param("limit", "2"))
        .and(query_param("email", "jenny.rosen@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"customer_id": "cus_1", "email": "jenny.rosen@example.com"},
            {"customer_id": "cus_2", "email": "jenny.rosen@example.com"},
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let customers = CustomerService::new(&client)
        .list(Some(&CustomerListRequest {
            limit: Some(2),
            email: Some("jenny.rosen@example.com".to_string()),
            ..Default::default()
        }))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(customers.len(), 2);
    assert_eq!(customers[0].customer_id.as_deref(), Some("cus_1"));
}

#[tokio::test]
async fn customer_delete_uses_delete_verb() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/customers/cus_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "customer_id": "cus_1",
            "customer_deleted": true,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let deleted = CustomerService::new(&client)
        .delete("cus_1")
        .await
        .unwrap()
        .unwrap();
    assert!(deleted.customer_deleted);
}

#[tokio::test]
async fn merchant_list_with_client_secret_uses_publishable_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/account/payment_methods"))
        .and(query_param("client_secret", "pay_1_secret_abc"))
        .and(header("api-key", PUBLISHABLE_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "currency": "USD",
            "payment_methods": [{"payment_method": "card"}],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let listed = MerchantService::new(&client)
        .list_payment_methods(Some(&PaymentMethodListRequest {
            client_secret: Some("pay_1_secret_abc".to_string()),
            // Ignored while client_secret is present.
            country: Some("US".to_string()),
            ..Default::default()
        }))
        .await
        .unwrap()
        .unwrap();

    let groups = listed.payment_methods.unwrap();
    assert_eq!(groups[0].payment_method_category.as_deref(), Some("card"));
}

#[tokio::test]
async fn merchant_list_without_client_secret_uses_secret_key_and_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/account/payment_methods"))
        .and(query_param("country", "US"))
        .and(query_param("currency", "USD"))
        .and(query_param("amount", "6540"))
        .and(query_param("profile_id", "pro_default"))
        .and(header("api-key", SECRET_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"currency": "USD"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_profile(&server, "pro_default");
    MerchantService::new(&client)
        .list_payment_methods(Some(&PaymentMethodListRequest {
            country: Some("US".to_string()),
            currency: Some("USD".to_string()),
            amount: Some(6540),
            ..Default::default()
        }))
        .await
        .unwrap();
}

#[tokio::test]
async fn payout_create_posts_to_the_create_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/payouts/create"))
        .and(body_json(json!({
            "amount": 1000,
            "currency": "USD",
            "confirm": false,
            "payout_type": "bank",
            "payout_method_data": {"bank": {"iban": "DE89370400440532013000"}},
            "auto_fulfill": false,
            "recurring": false,
            "payout_link": false,
            "profile_id": "pro_default",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "payout_id": "po_1",
            "amount": 1000,
            "status": "requires_confirmation",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_profile(&server, "pro_default");
    let request = PayoutCreateRequest::new(
        1000,
        "USD",
        PayoutType::Bank,
        PayoutMethodData {
            bank: Some(PayoutBank {
                iban: Some("DE89370400440532013000".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        },
    );

    let payout = PayoutService::new(&client)
        .create(request)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(payout.payout_id.as_deref(), Some("po_1"));
    assert_eq!(payout.status.as_deref(), Some("requires_confirmation"));
}
