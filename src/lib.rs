//! # momo-sdk
//!
//! An MTN Mobile Money (MoMo) API client library for Rust.
//!
//! This library provides typed, non-blocking access to the MoMo REST API:
//! sandbox user provisioning, balance and account-holder lookups, payment
//! collection (request-to-pay), withdrawals, transaction-status polling, and
//! delivery notifications.
//!
//! ## Security
//!
//! - Subscription keys are redacted in Debug output
//! - Issued API keys are returned to the caller and never persisted
//! - Request logging lists header names, not values
//!
//! ## Crates
//!
//! - **momo-sdk-client** - HTTP infrastructure: shared pooled client,
//!   connectivity pre-flight, body-level tracing, error taxonomy
//! - **momo-sdk-api** - API surface: facade, endpoint descriptors, per-call
//!   headers, exactly-once dispatch, wire models
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use momo_sdk::api::{CallbackHost, MomoApi, MomoConfig, SubscriptionType};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = MomoConfig::builder()
//!         .collection_key(std::env::var("MOMO_COLLECTION_KEY")?)
//!         .callback_host("https://merchant.example.com")
//!         .build()?;
//!     let api = MomoApi::new(config)?;
//!
//!     let balance = api.account_balance(SubscriptionType::Collection).await?;
//!     println!("{} {}", balance.available_balance, balance.currency);
//!
//!     Ok(())
//! }
//! ```

// Re-export member crates for convenient access
#[cfg(feature = "api")]
pub use momo_sdk_api as api;
#[cfg(feature = "client")]
pub use momo_sdk_client as client;
