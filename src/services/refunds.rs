use tracing::debug;

use super::require_id;
use crate::client::{ApiKeyKind, HyperswitchClient};
use crate::errors::HyperswitchResult;
use crate::models::refund::{
    RefundCreateRequest, RefundListRequest, RefundListResponse, RefundResponse,
    RefundUpdateRequest,
};

const REFUNDS_PATH: &str = "/refunds";
const REFUND_LIST_PATH: &str = "/refunds/list";

/// Operations on refunds.
pub struct RefundService<'a> {
    client: &'a HyperswitchClient,
}

impl<'a> RefundService<'a> {
    pub fn new(client: &'a HyperswitchClient) -> Self {
        Self { client }
    }

    /// Creates a refund against a payment. `payment_id` is required.
    pub async fn create(
        &self,
        request: &RefundCreateRequest,
    ) -> HyperswitchResult<Option<RefundResponse>> {
        require_id("payment_id", &request.payment_id)?;
        self.client
            .post(REFUNDS_PATH, request, ApiKeyKind::Secret)
            .await
    }

    /// Retrieves a refund by id.
    pub async fn retrieve(&self, refund_id: &str) -> HyperswitchResult<Option<RefundResponse>> {
        require_id("refund_id", refund_id)?;
        self.client
            .get(&format!("{REFUNDS_PATH}/{refund_id}"), ApiKeyKind::Secret)
            .await
    }

    /// Updates a refund's reason or metadata.
    pub async fn update(
        &self,
        refund_id: &str,
        request: &RefundUpdateRequest,
    ) -> HyperswitchResult<Option<RefundResponse>> {
        require_id("refund_id", refund_id)?;
        self.client
            .post(
                &format!("{REFUNDS_PATH}/{refund_id}"),
                request,
                ApiKeyKind::Secret,
            )
            .await
    }

    /// Lists refunds. This endpoint takes its filters as a POST body; a
    /// client-level default profile id is substituted when the filter
    /// carries none (or a blank one).
    pub async fn list(
        &self,
        request: Option<RefundListRequest>,
    ) -> HyperswitchResult<Option<RefundListResponse>> {
        let mut request = request.unwrap_or_default();
        let blank = request
            .profile_id
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .is_none();
        if blank {
            if let Some(profile_id) = self.client.default_profile_id() {
                debug!(profile_id, "using default profile id for refund list");
                request.profile_id = Some(profile_id.to_string());
            }
        }
        self.client
            .post(REFUND_LIST_PATH, &request, ApiKeyKind::Secret)
            .await
    }
}
