//! Per-resource façades over [`HyperswitchClient`](crate::client::HyperswitchClient).
//!
//! Each service binds fixed path templates to client calls and adds nothing
//! else: required ids are validated before any network I/O, and requests
//! that support a profile id get the client-level default filled in when
//! they carry none.

mod customers;
mod merchants;
mod payments;
mod payouts;
mod refunds;

pub use customers::CustomerService;
pub use merchants::MerchantService;
pub use payments::PaymentService;
pub use payouts::PayoutService;
pub use refunds::RefundService;

use crate::errors::{HyperswitchError, HyperswitchResult};

/// Rejects empty or whitespace-only required identifiers before a request
/// is built.
pub(crate) fn require_id(name: &str, value: &str) -> HyperswitchResult<()> {
    if value.trim().is_empty() {
        return Err(HyperswitchError::InvalidRequest(format!(
            "{name} cannot be empty"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_id_rejects_whitespace() {
        assert!(require_id("payment_id", "pay_123").is_ok());
        assert!(matches!(
            require_id("payment_id", "   "),
            Err(HyperswitchError::InvalidRequest(_))
        ));
        assert!(matches!(
            require_id("payment_id", ""),
            Err(HyperswitchError::InvalidRequest(_))
        ));
    }
}
