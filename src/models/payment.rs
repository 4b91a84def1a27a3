//! Payment intent requests and responses.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::common::{
    Address, AddressDetails, BrowserInfo, CustomerAcceptance, MandateData, OrderDetailItem,
    PaymentMethodData, RecurringDetailsInfo,
};

/// Request body for `POST /payments`.
///
/// [`PaymentCreateRequest::new`] applies the defaults the API binding
/// promises (`confirm = true`); everything else starts unset and is omitted
/// from the wire until populated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentCreateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_to_capture: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_data: Option<PaymentMethodData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_info: Option<BrowserInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_details: Option<Vec<OrderDetailItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_link: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_future_usage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandate_data: Option<MandateData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub off_session: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring_details: Option<RecurringDetailsInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_acceptance: Option<CustomerAcceptance>,
}

impl PaymentCreateRequest {
    /// New payment of `amount` minor units in `currency`, confirmed
    /// immediately (the API binding's historical default).
    pub fn new(amount: i64, currency: impl Into<String>) -> Self {
        Self {
            amount: Some(amount),
            currency: Some(currency.into()),
            confirm: Some(true),
            ..Self::empty()
        }
    }

    fn empty() -> Self {
        Self {
            amount: None,
            currency: None,
            profile_id: None,
            customer_id: None,
            description: None,
            name: None,
            email: None,
            phone: None,
            phone_country_code: None,
            confirm: None,
            capture_method: None,
            capture_on: None,
            amount_to_capture: None,
            return_url: None,
            authentication_type: None,
            payment_method: None,
            payment_method_type: None,
            payment_method_data: None,
            shipping: None,
            billing: None,
            browser_info: None,
            metadata: None,
            order_details: None,
            payment_link: None,
            setup_future_usage: None,
            mandate_data: None,
            off_session: None,
            recurring_details: None,
            customer_acceptance: None,
        }
    }
}

impl Default for PaymentCreateRequest {
    /// Same defaults as [`PaymentCreateRequest::new`], with no amount or
    /// currency chosen yet.
    fn default() -> Self {
        Self {
            confirm: Some(true),
            ..Self::empty()
        }
    }
}

/// Partial update for `POST /payments/{id}`. Unset fields are left untouched
/// server-side, which is why they must be absent rather than `null`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PaymentUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_data: Option<PaymentMethodData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_type: Option<String>,
}

/// Optional body for `POST /payments/{id}/confirm`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PaymentConfirmRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_data: Option<PaymentMethodData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<AddressDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing: Option<AddressDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_info: Option<BrowserInfo>,
}

/// Optional body for `POST /payments/{id}/capture`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PaymentCaptureRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_to_capture: Option<i64>,
}

/// Optional body for `POST /payments/{id}/cancel`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PaymentCancelRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_reason: Option<String>,
}

/// Payment intent as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PaymentResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default)]
    pub amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_received: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_capturable: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_action: Option<NextAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_payment_error: Option<PaymentError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NextAction {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_to_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PaymentError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decline_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_defaults_to_confirm() {
        let request = PaymentCreateRequest::new(6540, "USD");
        assert_eq!(request.confirm, Some(true));
        assert_eq!(request.amount, Some(6540));
        assert_eq!(request.currency.as_deref(), Some("USD"));
    }

    #[test]
    fn unset_fields_are_absent_not_null() {
        let json = serde_json::to_value(PaymentCreateRequest::new(100, "EUR")).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("customer_id"));
        assert!(!object.contains_key("metadata"));
        assert_eq!(object.len(), 3); // amount, currency, confirm
    }

    #[test]
    fn response_tolerates_missing_amount() {
        let payment: PaymentResponse =
            serde_json::from_str(r#"{"payment_id":"pay_1","status":"succeeded"}"#).unwrap();
        assert_eq!(payment.payment_id.as_deref(), Some("pay_1"));
        assert_eq!(payment.amount, 0);
    }
}
