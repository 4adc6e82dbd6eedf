//! Per-call header assembly.
//!
//! Header sets are built fresh for every call and never shared between calls;
//! concurrent dispatches cannot observe each other's headers.

use std::collections::HashMap;

use momo_sdk_client::Result;

use crate::config::MomoConfig;
use crate::correlation;
use crate::product::SubscriptionType;

/// Correlation id header (client-generated UUID v4).
pub const X_REFERENCE_ID: &str = "X-Reference-Id";
/// Subscription authorization header.
pub const OCP_APIM_SUBSCRIPTION_KEY: &str = "Ocp-Apim-Subscription-Key";
/// Deployment environment selector.
pub const X_TARGET_ENVIRONMENT: &str = "X-Target-Environment";
/// Asynchronous notification endpoint header.
pub const X_CALLBACK_URL: &str = "X-Callback-Url";
/// Delivery-notification message header.
pub const NOTIFICATION_MESSAGE: &str = "notificationMessage";
/// Delivery-notification language header.
pub const LANGUAGE: &str = "Language";

/// A per-call header mapping.
pub type HeaderSet = HashMap<String, String>;

/// Derive the callback URL the provider should notify: the caller's host
/// plus the product-specific route suffix.
pub fn callback_url(host: &str, product: SubscriptionType) -> String {
    format!("{}{}", host.trim_end_matches('/'), product.callback_suffix())
}

/// Build the header set for a product-scoped call.
///
/// Always sets the subscription key and target environment. The reference-id
/// header is set only for a non-empty `reference_id`, and the callback header
/// only when `include_callback` holds and `callback_url` is non-empty.
pub fn build_headers(
    config: &MomoConfig,
    product: SubscriptionType,
    reference_id: &str,
    callback_url: &str,
    include_callback: bool,
) -> Result<HeaderSet> {
    let mut headers = HeaderSet::new();
    headers.insert(
        OCP_APIM_SUBSCRIPTION_KEY.to_string(),
        config.subscription_key(product)?.to_string(),
    );
    headers.insert(
        X_TARGET_ENVIRONMENT.to_string(),
        config.target_environment().to_string(),
    );

    if !reference_id.is_empty() {
        headers.insert(X_REFERENCE_ID.to_string(), reference_id.to_string());
        correlation::record_reference_id(reference_id);
    }

    if include_callback && !callback_url.is_empty() {
        headers.insert(X_CALLBACK_URL.to_string(), callback_url.to_string());
    }

    Ok(headers)
}

/// Build the header set for a sandbox provisioning call (`v1_0/apiuser`
/// endpoints): subscription key plus an optional reference-id header.
pub fn provisioning_headers(config: &MomoConfig, reference_id: &str) -> Result<HeaderSet> {
    let mut headers = HeaderSet::new();
    headers.insert(
        OCP_APIM_SUBSCRIPTION_KEY.to_string(),
        config.provisioning_key()?.to_string(),
    );

    if !reference_id.is_empty() {
        headers.insert(X_REFERENCE_ID.to_string(), reference_id.to_string());
        correlation::record_reference_id(reference_id);
    }

    Ok(headers)
}
