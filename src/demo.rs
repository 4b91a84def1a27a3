//! Demo HTTP front end: one route per SDK method, mapping the unified error
//! type onto HTTP problem responses. Informative glue, not part of the core
//! client surface.

use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Json;
use serde::Serialize;
use serde_json::json;

use crate::client::HyperswitchClient;
use crate::errors::{HyperswitchError, HyperswitchResult};
use crate::models::customer::{CustomerCreateRequest, CustomerListRequest, CustomerUpdateRequest};
use crate::models::merchant::PaymentMethodListRequest;
use crate::models::payment::{
    PaymentCancelRequest, PaymentCaptureRequest, PaymentConfirmRequest, PaymentCreateRequest,
    PaymentUpdateRequest,
};
use crate::models::payout::PayoutCreateRequest;
use crate::models::refund::{RefundCreateRequest, RefundListRequest, RefundUpdateRequest};
use crate::services::{
    CustomerService, MerchantService, PaymentService, PayoutService, RefundService,
};

type AppState = Arc<HyperswitchClient>;

/// Builds the demo router over a shared client.
pub fn router(client: AppState) -> Router {
    Router::new()
        .route("/payments", post(create_payment))
        .route("/payments/{payment_id}", get(retrieve_payment).post(update_payment))
        .route("/payments/{payment_id}/capture", post(capture_payment))
        .route("/payments/{payment_id}/confirm", post(confirm_payment))
        .route("/payments/{payment_id}/cancel", post(cancel_payment))
        .route("/refunds", post(create_refund))
        .route("/refunds/list", post(list_refunds))
        .route("/refunds/{refund_id}", get(retrieve_refund).post(update_refund))
        .route("/customers", post(create_customer))
        .route("/customers/list", get(list_customers))
        .route(
            "/customers/{customer_id}",
            get(retrieve_customer)
                .post(update_customer)
                .delete(delete_customer),
        )
        .route(
            "/customers/{customer_id}/payment_methods",
            get(list_customer_payment_methods),
        )
        .route("/account/payment_methods", get(list_merchant_payment_methods))
        .route("/payouts/create", post(create_payout))
        .with_state(client)
}

/// Maps SDK outcomes onto HTTP: `Some` becomes a JSON body, `None` becomes
/// 204, and errors become problem responses that keep the remote status
/// when one is known (never downgraded to a blanket 500).
fn respond<T: Serialize>(result: HyperswitchResult<Option<T>>) -> Response {
    match result {
        Ok(Some(value)) => Json(value).into_response(),
        Ok(None) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => problem_response(&err),
    }
}

fn problem_response(err: &HyperswitchError) -> Response {
    let status = match err {
        HyperswitchError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        HyperswitchError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        HyperswitchError::Api { status, .. } => StatusCode::from_u16(*status)
            .unwrap_or(StatusCode::BAD_GATEWAY),
        HyperswitchError::Decode { .. } | HyperswitchError::Transport(_) => {
            StatusCode::BAD_GATEWAY
        }
        HyperswitchError::Cancelled(_) => StatusCode::GATEWAY_TIMEOUT,
    };
    let body = json!({
        "error_type": match err {
            HyperswitchError::InvalidRequest(_) => "invalid_request",
            HyperswitchError::Config(_) => "configuration",
            HyperswitchError::Api { .. } => "api",
            HyperswitchError::Decode { .. } => "decode",
            HyperswitchError::Transport(_) => "transport",
            HyperswitchError::Cancelled(_) => "cancelled",
        },
        "status": err.status(),
        "error_code": err.error_code(),
        "message": err.to_string(),
    });
    (status, Json(body)).into_response()
}

async fn create_payment(
    State(client): State<AppState>,
    Json(request): Json<PaymentCreateRequest>,
) -> Response {
    respond(PaymentService::new(&client).create(request).await)
}

async fn retrieve_payment(
    State(client): State<AppState>,
    Path(payment_id): Path<String>,
) -> Response {
    respond(PaymentService::new(&client).retrieve(&payment_id).await)
}

async fn update_payment(
    State(client): State<AppState>,
    Path(payment_id): Path<String>,
    Json(request): Json<PaymentUpdateRequest>,
) -> Response {
    respond(
        PaymentService::new(&client)
            .update(&payment_id, &request)
            .await,
    )
}

async fn capture_payment(
    State(client): State<AppState>,
    Path(payment_id): Path<String>,
    request: Option<Json<PaymentCaptureRequest>>,
) -> Response {
    let request = request.map(|Json(r)| r);
    respond(
        PaymentService::new(&client)
            .capture(&payment_id, request.as_ref())
            .await,
    )
}

async fn confirm_payment(
    State(client): State<AppState>,
    Path(payment_id): Path<String>,
    request: Option<Json<PaymentConfirmRequest>>,
) -> Response {
    let request = request.map(|Json(r)| r);
    respond(
        PaymentService::new(&client)
            .confirm(&payment_id, request.as_ref())
            .await,
    )
}

async fn cancel_payment(
    State(client): State<AppState>,
    Path(payment_id): Path<String>,
    request: Option<Json<PaymentCancelRequest>>,
) -> Response {
    let request = request.map(|Json(r)| r);
    respond(
        PaymentService::new(&client)
            .cancel(&payment_id, request.as_ref())
            .await,
    )
}

async fn create_refund(
    State(client): State<AppState>,
    Json(request): Json<RefundCreateRequest>,
) -> Response {
    respond(RefundService::new(&client).create(&request).await)
}

async fn retrieve_refund(
    State(client): State<AppState>,
    Path(refund_id): Path<String>,
) -> Response {
    respond(RefundService::new(&client).retrieve(&refund_id).await)
}

async fn update_refund(
    State(client): State<AppState>,
    Path(refund_id): Path<String>,
    Json(request): Json<RefundUpdateRequest>,
) -> Response {
    respond(
        RefundService::new(&client)
            .update(&refund_id, &request)
            .await,
    )
}

async fn list_refunds(
    State(client): State<AppState>,
    request: Option<Json<RefundListRequest>>,
) -> Response {
    let request = request.map(|Json(r)| r);
    respond(RefundService::new(&client).list(request).await)
}

async fn create_customer(
    State(client): State<AppState>,
    Json(request): Json<CustomerCreateRequest>,
) -> Response {
    respond(CustomerService::new(&client).create(&request).await)
}

async fn retrieve_customer(
    State(client): State<AppState>,
    Path(customer_id): Path<String>,
) -> Response {
    respond(CustomerService::new(&client).retrieve(&customer_id).await)
}

async fn update_customer(
    State(client): State<AppState>,
    Path(customer_id): Path<String>,
    Json(request): Json<CustomerUpdateRequest>,
) -> Response {
    respond(
        CustomerService::new(&client)
            .update(&customer_id, &request)
            .await,
    )
}

async fn delete_customer(
    State(client): State<AppState>,
    Path(customer_id): Path<String>,
) -> Response {
    respond(CustomerService::new(&client).delete(&customer_id).await)
}

async fn list_customers(
    State(client): State<AppState>,
    Query(request): Query<CustomerListRequest>,
) -> Response {
    respond(CustomerService::new(&client).list(Some(&request)).await)
}

async fn list_customer_payment_methods(
    State(client): State<AppState>,
    Path(customer_id): Path<String>,
) -> Response {
    respond(
        CustomerService::new(&client)
            .list_payment_methods(&customer_id)
            .await,
    )
}

async fn list_merchant_payment_methods(
    State(client): State<AppState>,
    Query(request): Query<PaymentMethodListRequest>,
) -> Response {
    respond(
        MerchantService::new(&client)
            .list_payment_methods(Some(&request))
            .await,
    )
}

async fn create_payout(
    State(client): State<AppState>,
    Json(request): Json<PayoutCreateRequest>,
) -> Response {
    respond(PayoutService::new(&client).create(request).await)
}
