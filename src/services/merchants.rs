use tracing::debug;

use crate::client::{ApiKeyKind, HyperswitchClient};
use crate::errors::HyperswitchResult;
use crate::models::merchant::{PaymentMethodListRequest, PaymentMethodListResponse};

const ACCOUNT_PAYMENT_METHODS_PATH: &str = "/account/payment_methods";

/// Merchant-account level operations.
pub struct MerchantService<'a> {
    client: &'a HyperswitchClient,
}

impl<'a> MerchantService<'a> {
    pub fn new(client: &'a HyperswitchClient) -> Self {
        Self { client }
    }

    /// Lists the payment methods enabled for the merchant account.
    ///
    /// When the request carries a `client_secret` the call emulates a
    /// client-side lookup: the secret is the sole query parameter and the
    /// publishable key authenticates it. Otherwise the remaining filters
    /// apply (profile id falling back to the client default) under the
    /// secret key.
    pub async fn list_payment_methods(
        &self,
        request: Option<&PaymentMethodListRequest>,
    ) -> HyperswitchResult<Option<PaymentMethodListResponse>> {
        let mut path = ACCOUNT_PAYMENT_METHODS_PATH.to_string();
        let mut params = Vec::new();
        let mut key = ApiKeyKind::Secret;

        match request {
            Some(request) => {
                if let Some(client_secret) = request
                    .client_secret
                    .as_deref()
                    .filter(|s| !s.trim().is_empty())
                {
                    params.push(format!(
                        "client_secret={}",
                        urlencoding::encode(client_secret)
                    ));
                    key = ApiKeyKind::Publishable;
                } else {
                    if let Some(country) =
                        request.country.as_deref().filter(|c| !c.trim().is_empty())
                    {
                        params.push(format!("country={}", urlencoding::encode(country)));
                    }
                    if let Some(currency) =
                        request.currency.as_deref().filter(|c| !c.trim().is_empty())
                    {
                        params.push(format!("currency={}", urlencoding::encode(currency)));
                    }
                    if let Some(amount) = request.amount {
                        params.push(format!("amount={amount}"));
                    }
                    let profile_id = request
                        .profile_id
                        .as_deref()
                        .or_else(|| self.client.default_profile_id());
                    if let Some(profile_id) = profile_id.filter(|p| !p.trim().is_empty()) {
                        params.push(format!("profile_id={}", urlencoding::encode(profile_id)));
                    }
                }
            }
            None => {
                if let Some(profile_id) = self.client.default_profile_id() {
                    params.push(format!("profile_id={}", urlencoding::encode(profile_id)));
                }
            }
        }

        if !params.is_empty() {
            path.push('?');
            path.push_str(&params.join("&"));
        }

        debug!(%path, ?key, "listing merchant payment methods");
        self.client.get(&path, key).await
    }
}
