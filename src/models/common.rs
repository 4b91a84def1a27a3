//! Shared nested shapes used across resource families.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Address container: postal details plus an optional phone.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<PhoneDetails>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AddressDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PhoneDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
}

/// Raw card details sent when confirming with `payment_method = "card"`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CardDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_exp_month: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_exp_year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_cvc: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PaymentMethodData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<CardDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing: Option<Address>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BrowserInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_depth: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub java_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub java_script_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen_height: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen_width: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_header: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OrderDetailItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_img_link: Option<String>,
}

/// Evidence that the customer agreed to a mandate.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CustomerAcceptance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acceptance_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub online: Option<OnlineMandate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OnlineMandate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MandateData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_acceptance: Option<CustomerAcceptance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandate_type: Option<MandateType>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MandateType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub single_use: Option<MandateAmountData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi_use: Option<MandateAmountData>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MandateAmountData {
    #[serde(default)]
    pub amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, serde_json::Value>>,
}

/// Reference to a stored payment method for off-session recurring payments.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RecurringDetailsInfo {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}
