//! Typed request and response models, one module per resource family.
//!
//! All shapes serialize with lower snake_case keys; unset optional fields
//! are omitted from the payload entirely, never sent as `null` (the remote
//! API distinguishes the two for partial updates).

pub mod common;
pub mod customer;
pub mod error;
pub mod merchant;
pub mod payment;
pub mod payout;
pub mod refund;
