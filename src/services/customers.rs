use super::require_id;
use crate::client::{ApiKeyKind, HyperswitchClient};
use crate::errors::HyperswitchResult;
use crate::models::customer::{
    CustomerCreateRequest, CustomerDeleteResponse, CustomerListRequest,
    CustomerPaymentMethodListResponse, CustomerResponse, CustomerUpdateRequest,
};

const CUSTOMERS_PATH: &str = "/customers";
const CUSTOMER_LIST_PATH: &str = "/customers/list";

/// Operations on customers.
pub struct CustomerService<'a> {
    client: &'a HyperswitchClient,
}

impl<'a> CustomerService<'a> {
    pub fn new(client: &'a HyperswitchClient) -> Self {
        Self { client }
    }

    pub async fn create(
        &self,
        request: &CustomerCreateRequest,
    ) -> HyperswitchResult<Option<CustomerResponse>> {
        self.client
            .post(CUSTOMERS_PATH, request, ApiKeyKind::Secret)
            .await
    }

    pub async fn retrieve(&self, customer_id: &str) -> HyperswitchResult<Option<CustomerResponse>> {
        require_id("customer_id", customer_id)?;
        self.client
            .get(&format!("{CUSTOMERS_PATH}/{customer_id}"), ApiKeyKind::Secret)
            .await
    }

    pub async fn update(
        &self,
        customer_id: &str,
        request: &CustomerUpdateRequest,
    ) -> HyperswitchResult<Option<CustomerResponse>> {
        require_id("customer_id", customer_id)?;
        self.client
            .post(
                &format!("{CUSTOMERS_PATH}/{customer_id}"),
                request,
                ApiKeyKind::Secret,
            )
            .await
    }

    pub async fn delete(
        &self,
        customer_id: &str,
    ) -> HyperswitchResult<Option<CustomerDeleteResponse>> {
        require_id("customer_id", customer_id)?;
        self.client
            .delete(&format!("{CUSTOMERS_PATH}/{customer_id}"), ApiKeyKind::Secret)
            .await
    }

    /// Lists customers. Unlike refund listing, this endpoint is a GET whose
    /// filters travel as query parameters; the response is a bare JSON
    /// array.
    pub async fn list(
        &self,
        request: Option<&CustomerListRequest>,
    ) -> HyperswitchResult<Option<Vec<CustomerResponse>>> {
        let mut path = CUSTOMER_LIST_PATH.to_string();
        if let Some(request) = request {
            let mut params = Vec::new();
            if let Some(limit) = request.limit {
                params.push(format!("limit={limit}"));
            }
            if let Some(offset) = request.offset {
                params.push(format!("offset={offset}"));
            }
            if let Some(email) = request.email.as_deref().filter(|e| !e.trim().is_empty()) {
                params.push(format!("email={}", urlencoding::encode(email)));
            }
            if let Some(phone) = request.phone.as_deref().filter(|p| !p.trim().is_empty()) {
                params.push(format!("phone={}", urlencoding::encode(phone)));
            }
            if !params.is_empty() {
                path.push('?');
                path.push_str(&params.join("&"));
            }
        }
        self.client.get(&path, ApiKeyKind::Secret).await
    }

    /// Lists the payment methods saved against a customer.
    pub async fn list_payment_methods(
        &self,
        customer_id: &str,
    ) -> HyperswitchResult<Option<CustomerPaymentMethodListResponse>> {
        require_id("customer_id", customer_id)?;
        self.client
            .get(
                &format!("{CUSTOMERS_PATH}/{customer_id}/payment_methods"),
                ApiKeyKind::Secret,
            )
            .await
    }
}
