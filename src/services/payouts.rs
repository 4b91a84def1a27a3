use tracing::debug;

use crate::client::{ApiKeyKind, HyperswitchClient};
use crate::errors::HyperswitchResult;
use crate::models::payout::{PayoutCreateRequest, PayoutResponse};

const PAYOUT_CREATE_PATH: &str = "/payouts/create";

/// Operations on payouts.
pub struct PayoutService<'a> {
    client: &'a HyperswitchClient,
}

impl<'a> PayoutService<'a> {
    pub fn new(client: &'a HyperswitchClient) -> Self {
        Self { client }
    }

    /// Creates a payout. A client-level default profile id is substituted
    /// when the request carries none (or a blank one).
    pub async fn create(
        &self,
        mut request: PayoutCreateRequest,
    ) -> HyperswitchResult<Option<PayoutResponse>> {
        let blank = request
            .profile_id
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .is_none();
        if blank {
            if let Some(profile_id) = self.client.default_profile_id() {
                debug!(profile_id, "using default profile id for payout create");
                request.profile_id = Some(profile_id.to_string());
            }
        }
        self.client
            .post(PAYOUT_CREATE_PATH, &request, ApiKeyKind::Secret)
            .await
    }
}
