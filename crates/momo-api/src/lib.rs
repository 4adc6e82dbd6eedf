//! # momo-sdk-api
//!
//! MTN Mobile Money API surface: sandbox user provisioning, balance and
//! account-holder lookups, request-to-pay, withdrawals, and transaction
//! status polling.
//!
//! ## Features
//!
//! - **Facade** - one non-blocking method per business operation
//! - **Typed endpoints** - immutable compile-time descriptors per operation
//! - **Per-call headers** - header sets built fresh per call, never shared
//! - **Exactly-once completion** - every dispatched call resolves to exactly
//!   one success or failure, awaitable or callback-delivered
//!
//! ## Example
//!
//! ```rust,ignore
//! use momo_sdk_api::{CallbackHost, MomoApi, MomoConfig, SubscriptionType};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), momo_sdk_api::Error> {
//!     let config = MomoConfig::builder()
//!         .collection_key("subscription-key")
//!         .build()?;
//!     let api = MomoApi::new(config)?;
//!
//!     // Provision a sandbox user; the fresh reference id rides the call.
//!     let call = api.create_user(&CallbackHost::new("https://merchant.example.com"));
//!     let user_reference = call.reference_id().unwrap().to_string();
//!     call.await?;
//!
//!     let api_key = api.create_api_key(&user_reference).await?;
//!
//!     // Or take the outcome through a callback instead of awaiting.
//!     api.account_balance(SubscriptionType::Collection)
//!         .on_complete(|outcome| match outcome {
//!             Ok(balance) => println!("{} {}", balance.available_balance, balance.currency),
//!             Err(err) => eprintln!("balance failed: {err}"),
//!         });
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
pub mod correlation;
mod dispatch;
pub mod endpoint;
pub mod headers;
mod models;
mod product;

// Main facade
pub use client::MomoApi;

// Configuration
pub use config::{MomoConfig, MomoConfigBuilder, SANDBOX_BASE_URL, SANDBOX_ENVIRONMENT};

// Dispatch
pub use dispatch::{dispatch, PendingCall};

// Product selection
pub use product::SubscriptionType;

// Wire models
pub use models::{
    AccountBalance, AccountHolderStatus, AccountIdentifier, ApiKey, ApiUser, BasicUserInfo,
    CallbackHost, DeliveryNotification, ErrorReason, Party, RequestPay, RequestPayStatus,
    StatusResponse, Withdraw, WithdrawStatus,
};

// Re-export momo-sdk-client types that users might need
pub use momo_sdk_client::{ClientConfig, ClientConfigBuilder, Error, ErrorKind, Result};
