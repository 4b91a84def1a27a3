use tracing::debug;

use super::require_id;
use crate::client::{ApiKeyKind, HyperswitchClient};
use crate::errors::HyperswitchResult;
use crate::models::payment::{
    PaymentCancelRequest, PaymentCaptureRequest, PaymentConfirmRequest, PaymentCreateRequest,
    PaymentResponse, PaymentUpdateRequest,
};

const PAYMENTS_PATH: &str = "/payments";

/// Operations on payment intents.
pub struct PaymentService<'a> {
    client: &'a HyperswitchClient,
}

impl<'a> PaymentService<'a> {
    pub fn new(client: &'a HyperswitchClient) -> Self {
        Self { client }
    }

    /// Creates a payment intent. A client-level default profile id is
    /// substituted when the request carries none (or a blank one).
    pub async fn create(
        &self,
        mut request: PaymentCreateRequest,
    ) -> HyperswitchResult<Option<PaymentResponse>> {
        let blank = request
            .profile_id
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .is_none();
        if blank {
            if let Some(profile_id) = self.client.default_profile_id() {
                debug!(profile_id, "using default profile id for payment create");
                request.profile_id = Some(profile_id.to_string());
            }
        }
        self.client
            .post(PAYMENTS_PATH, &request, ApiKeyKind::Secret)
            .await
    }

    /// Retrieves a payment intent by id.
    pub async fn retrieve(&self, payment_id: &str) -> HyperswitchResult<Option<PaymentResponse>> {
        require_id("payment_id", payment_id)?;
        self.client
            .get(&format!("{PAYMENTS_PATH}/{payment_id}"), ApiKeyKind::Secret)
            .await
    }

    /// Retrieves the latest status, optionally forcing a sync with the
    /// payment processor.
    pub async fn sync_status(
        &self,
        payment_id: &str,
        force_sync: bool,
    ) -> HyperswitchResult<Option<PaymentResponse>> {
        require_id("payment_id", payment_id)?;
        let mut path = format!("{PAYMENTS_PATH}/{payment_id}");
        if force_sync {
            path.push_str("?force_sync=true");
        }
        self.client.get(&path, ApiKeyKind::Secret).await
    }

    /// Captures a previously authorized payment.
    pub async fn capture(
        &self,
        payment_id: &str,
        request: Option<&PaymentCaptureRequest>,
    ) -> HyperswitchResult<Option<PaymentResponse>> {
        require_id("payment_id", payment_id)?;
        let path = format!("{PAYMENTS_PATH}/{payment_id}/capture");
        match request {
            Some(request) => self.client.post(&path, request, ApiKeyKind::Secret).await,
            None => self.client.post_empty(&path, ApiKeyKind::Secret).await,
        }
    }

    /// Confirms a previously created payment intent.
    pub async fn confirm(
        &self,
        payment_id: &str,
        request: Option<&PaymentConfirmRequest>,
    ) -> HyperswitchResult<Option<PaymentResponse>> {
        require_id("payment_id", payment_id)?;
        let path = format!("{PAYMENTS_PATH}/{payment_id}/confirm");
        match request {
            Some(request) => self.client.post(&path, request, ApiKeyKind::Secret).await,
            None => self.client.post_empty(&path, ApiKeyKind::Secret).await,
        }
    }

    /// Cancels (voids) a payment that has not been captured yet.
    pub async fn cancel(
        &self,
        payment_id: &str,
        request: Option<&PaymentCancelRequest>,
    ) -> HyperswitchResult<Option<PaymentResponse>> {
        require_id("payment_id", payment_id)?;
        let path = format!("{PAYMENTS_PATH}/{payment_id}/cancel");
        match request {
            Some(request) => self.client.post(&path, request, ApiKeyKind::Secret).await,
            None => self.client.post_empty(&path, ApiKeyKind::Secret).await,
        }
    }

    /// Updates a payment intent. The remote API uses POST for updates, not
    /// PUT or PATCH.
    pub async fn update(
        &self,
        payment_id: &str,
        request: &PaymentUpdateRequest,
    ) -> HyperswitchResult<Option<PaymentResponse>> {
        require_id("payment_id", payment_id)?;
        self.client
            .post(
                &format!("{PAYMENTS_PATH}/{payment_id}"),
                request,
                ApiKeyKind::Secret,
            )
            .await
    }
}
