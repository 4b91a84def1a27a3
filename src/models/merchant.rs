//! Merchant-account payment-method listing shapes.

use serde::{Deserialize, Serialize};

/// Filters for `GET /account/payment_methods`, sent as query parameters.
///
/// When `client_secret` is set it is the sole parameter and the call is made
/// with the publishable key; otherwise the remaining filters apply and the
/// secret key is used.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PaymentMethodListRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,
}

/// Payment methods enabled for the merchant account.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PaymentMethodListResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_methods: Option<Vec<PaymentMethodGroup>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandate_payment: Option<MandatePaymentInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_surcharge_breakup_screen: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_external_three_ds_authentication: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collect_shipping_details_from_wallets: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collect_billing_details_from_wallets: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_tax_calculation_enabled: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PaymentMethodGroup {
    #[serde(rename = "payment_method", skip_serializing_if = "Option::is_none")]
    pub payment_method_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_types: Option<Vec<DetailedPaymentMethodType>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DetailedPaymentMethodType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_experience: Option<Vec<PaymentExperience>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_networks: Option<Vec<CardNetworkInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_names: Option<Vec<BankNameInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_debits: Option<BankDebitInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_transfers: Option<BankTransferInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_fields: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surcharge_details: Option<SurchargeDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pm_auth_connector: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PaymentExperience {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_experience_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligible_connectors: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CardNetworkInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_network: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surcharge_details: Option<SurchargeDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligible_connectors: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BankNameInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligible_connectors: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BankDebitInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligible_connectors: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BankTransferInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligible_connectors: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SurchargeDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surcharge: Option<SurchargeInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_on_surcharge: Option<TaxOnSurchargeInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_surcharge_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_tax_on_surcharge_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_total_surcharge_amount: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SurchargeInfo {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TaxOnSurchargeInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MandatePaymentInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub single_use: Option<SingleUseMandate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SingleUseMandate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<std::collections::HashMap<String, String>>,
}
