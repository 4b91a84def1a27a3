//! Payout requests and responses.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoutType {
    Card,
    Bank,
    Wallet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutingType {
    Single,
    Multiple,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Individual,
    Company,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoutPriority {
    Instant,
    Standard,
}

/// Request body for `POST /payouts/create`.
///
/// [`PayoutCreateRequest::new`] takes the required pieces; the boolean flags
/// default to `false` and are always present on the wire, matching the
/// remote API's expectations for payout creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoutCreateRequest {
    pub amount: i64,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing: Option<Routing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connector: Option<Vec<String>>,
    pub confirm: bool,
    pub payout_type: PayoutType,
    pub payout_method_data: PayoutMethodData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing: Option<PayoutBilling>,
    pub auto_fulfill: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<PayoutCustomer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<EntityType>,
    pub recurring: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<PayoutPriority>,
    pub payout_link: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_link_config: Option<PayoutLinkConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_expiry: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_method_id: Option<String>,
}

impl PayoutCreateRequest {
    pub fn new(
        amount: i64,
        currency: impl Into<String>,
        payout_type: PayoutType,
        payout_method_data: PayoutMethodData,
    ) -> Self {
        Self {
            amount,
            currency: currency.into(),
            routing: None,
            connector: None,
            confirm: false,
            payout_type,
            payout_method_data,
            billing: None,
            auto_fulfill: false,
            customer_id: None,
            customer: None,
            return_url: None,
            business_country: None,
            business_label: None,
            description: None,
            entity_type: None,
            recurring: false,
            metadata: None,
            payout_token: None,
            profile_id: None,
            priority: None,
            payout_link: false,
            payout_link_config: None,
            session_expiry: None,
            email: None,
            name: None,
            phone: None,
            phone_country_code: None,
            payout_method_id: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Routing {
    #[serde(rename = "type")]
    pub kind: RoutingType,
    pub data: RoutingData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingData {
    pub connector: String,
    pub merchant_connector_id: String,
}

/// Exactly one of `card` or `bank` is expected to be set.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PayoutMethodData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<PayoutCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank: Option<PayoutBank>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoutCard {
    pub card_number: String,
    pub expiry_month: String,
    pub expiry_year: String,
    pub card_holder_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PayoutBank {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PayoutBilling {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<PayoutAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<PayoutPhoneDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PayoutAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PayoutPhoneDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PayoutCustomer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_country_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PayoutLinkConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_link_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_payment_methods: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_layout: Option<String>,
    pub test_mode: bool,
}

/// Payout as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PayoutResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default)]
    pub amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing: Option<PayoutAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_method_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_method_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_payout_error: Option<PayoutError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PayoutError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_serialize_lower_snake_case() {
        assert_eq!(
            serde_json::to_string(&PayoutType::Card).unwrap(),
            "\"card\""
        );
        assert_eq!(
            serde_json::to_string(&PayoutPriority::Instant).unwrap(),
            "\"instant\""
        );
        assert_eq!(
            serde_json::to_string(&EntityType::Individual).unwrap(),
            "\"individual\""
        );
    }

    #[test]
    fn new_request_keeps_flags_explicit() {
        let request = PayoutCreateRequest::new(
            1000,
            "USD",
            PayoutType::Bank,
            PayoutMethodData::default(),
        );
        let json = serde_json::to_value(&request).unwrap();
        // Boolean flags are part of the payload even when false.
        assert_eq!(json["confirm"], serde_json::json!(false));
        assert_eq!(json["auto_fulfill"], serde_json::json!(false));
        assert!(json.get("customer_id").is_none());
    }
}
