//! # momo-sdk-client
//!
//! Core HTTP client infrastructure for the MTN Mobile Money API.
//!
//! This crate provides the foundational HTTP client with:
//! - Fixed 30s connect/read timeouts matching the provider's guidance
//! - Pre-flight connectivity checking that fails fast when offline
//! - Request/response body logging via `tracing`
//! - Connection pooling with a process-wide shared client
//! - A structured error taxonomy (connectivity, transport, HTTP, decode)
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     momo-sdk-api                            │
//! │  (facade, headers, endpoint descriptors, dispatch)          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    MomoHttpClient                           │
//! │  - Raw HTTP with connectivity pre-flight and body logging   │
//! │  - Buffered responses with error-body mapping               │
//! │  - Single attempt per call; no retries                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use momo_sdk_client::{shared_client, ClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), momo_sdk_client::Error> {
//!     let client = shared_client()?;
//!     let response = client
//!         .execute(client.get("https://sandbox.momodeveloper.mtn.com/v1_0/apiuser/abc"))
//!         .await?;
//!     let user: serde_json::Value = response.json()?;
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod connectivity;
mod error;
mod provider;
mod request;
mod response;

pub use client::MomoHttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use connectivity::{AlwaysOnline, ConnectivityMonitor, ManualConnectivity};
pub use error::{Error, ErrorKind, Result};
pub use provider::shared_client;
pub use request::{RequestBuilder, RequestMethod};
pub use response::Response;

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("momo-sdk/", env!("CARGO_PKG_VERSION"));
