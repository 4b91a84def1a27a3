//! Async Rust client for the Hyperswitch payments API.
//!
//! The [`client::HyperswitchClient`] owns the connection pool and executes
//! every call: it serializes a typed request to JSON, attaches one of two
//! configured API keys under the `api-key` header, and classifies the
//! outcome into a typed response or a single [`errors::HyperswitchError`].
//! The per-resource services in [`services`] bind path templates to that
//! executor.
//!
//! ```no_run
//! use hyperswitch::{HyperswitchClient, services::PaymentService};
//! use hyperswitch::models::payment::PaymentCreateRequest;
//!
//! # async fn run() -> Result<(), hyperswitch::HyperswitchError> {
//! let client = HyperswitchClient::builder("sk_test_...", "pk_test_...")
//!     .with_default_profile_id("pro_...")
//!     .build()?;
//!
//! let payments = PaymentService::new(&client);
//! let payment = payments
//!     .create(PaymentCreateRequest::new(6540, "USD"))
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
#[cfg(feature = "axum")]
pub mod demo;
pub mod errors;
pub mod models;
pub mod services;

pub use client::{ApiKeyKind, HyperswitchClient, HyperswitchClientBuilder};
pub use errors::{HyperswitchError, HyperswitchResult};
