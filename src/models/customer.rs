//! Customer requests and responses.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::common::AddressDetails;

/// Request body for `POST /customers`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CustomerCreateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
}

/// Partial update for `POST /customers/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CustomerUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
}

/// Customer as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CustomerResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CustomerDeleteResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub customer_deleted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_methods_deleted: Option<bool>,
}

/// Query parameters for `GET /customers/list`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CustomerListRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// A saved payment method attached to a customer.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CustomerPaymentMethod {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_issuer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_issuer_code: Option<String>,
    #[serde(default)]
    pub recurring_enabled: bool,
    #[serde(default)]
    pub installment_payment_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_experience: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<CardSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_data: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locker_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CardSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last4_digits: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_month: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer_country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokenization_status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CustomerPaymentMethodListResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<CustomerPaymentMethod>>,
    #[serde(default)]
    pub payment_method_count: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    // The remote API trims response bodies freely; missing scalars fall
    // back to their defaults instead of failing the decode.
    #[test]
    fn delete_response_tolerates_missing_flags() {
        let deleted: CustomerDeleteResponse =
            serde_json::from_str(r#"{"customer_id":"cus_1"}"#).unwrap();
        assert_eq!(deleted.customer_id.as_deref(), Some("cus_1"));
        assert!(!deleted.customer_deleted);
    }

    #[test]
    fn payment_method_listing_tolerates_missing_count() {
        let listed: CustomerPaymentMethodListResponse =
            serde_json::from_str(r#"{"customer_id":"cus_1","data":[{"payment_token":"tok_1"}]}"#)
                .unwrap();
        assert_eq!(listed.payment_method_count, 0);
        let method = &listed.data.unwrap()[0];
        assert!(!method.recurring_enabled);
        assert!(!method.installment_payment_enabled);
    }
}
