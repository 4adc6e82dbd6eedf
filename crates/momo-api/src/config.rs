//! SDK configuration.
//!
//! Subscription keys are redacted in Debug output to prevent accidental
//! exposure in logs.

use std::sync::OnceLock;

use momo_sdk_client::{Error, ErrorKind, Result};

use crate::product::SubscriptionType;

/// Base URL of the MoMo sandbox environment.
pub const SANDBOX_BASE_URL: &str = "https://sandbox.momodeveloper.mtn.com";

/// Target-environment value for the sandbox.
pub const SANDBOX_ENVIRONMENT: &str = "sandbox";

static GLOBAL: OnceLock<MomoConfig> = OnceLock::new();

/// SDK configuration: base URL, target environment, per-product subscription
/// keys, and the host the provider calls back with payment outcomes.
#[derive(Clone)]
pub struct MomoConfig {
    base_url: String,
    target_environment: String,
    collection_key: Option<String>,
    disbursement_key: Option<String>,
    remittance_key: Option<String>,
    callback_host: Option<String>,
}

impl std::fmt::Debug for MomoConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |key: &Option<String>| key.as_ref().map(|_| "[REDACTED]");
        f.debug_struct("MomoConfig")
            .field("base_url", &self.base_url)
            .field("target_environment", &self.target_environment)
            .field("collection_key", &redact(&self.collection_key))
            .field("disbursement_key", &redact(&self.disbursement_key))
            .field("remittance_key", &redact(&self.remittance_key))
            .field("callback_host", &self.callback_host)
            .finish()
    }
}

impl MomoConfig {
    /// Create a new config builder targeting the sandbox.
    pub fn builder() -> MomoConfigBuilder {
        MomoConfigBuilder::default()
    }

    /// Build configuration from `MOMO_*` environment variables.
    ///
    /// Recognized: `MOMO_BASE_URL`, `MOMO_TARGET_ENVIRONMENT`,
    /// `MOMO_COLLECTION_KEY`, `MOMO_DISBURSEMENT_KEY`, `MOMO_REMITTANCE_KEY`,
    /// `MOMO_CALLBACK_HOST`.
    pub fn from_env() -> Result<Self> {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());

        let mut builder = Self::builder();
        if let Some(url) = var("MOMO_BASE_URL") {
            builder = builder.base_url(url);
        }
        if let Some(env) = var("MOMO_TARGET_ENVIRONMENT") {
            builder = builder.target_environment(env);
        }
        if let Some(key) = var("MOMO_COLLECTION_KEY") {
            builder = builder.collection_key(key);
        }
        if let Some(key) = var("MOMO_DISBURSEMENT_KEY") {
            builder = builder.disbursement_key(key);
        }
        if let Some(key) = var("MOMO_REMITTANCE_KEY") {
            builder = builder.remittance_key(key);
        }
        if let Some(host) = var("MOMO_CALLBACK_HOST") {
            builder = builder.callback_host(host);
        }
        builder.build()
    }

    /// Install this configuration as the process-wide one, read by
    /// [`MomoApi::instance`](crate::MomoApi::instance).
    ///
    /// Installation happens once; a second call fails rather than silently
    /// swapping credentials under live calls.
    pub fn install(self) -> Result<()> {
        GLOBAL
            .set(self)
            .map_err(|_| Error::new(ErrorKind::Config("SDK already initialized".into())))
    }

    /// The installed process-wide configuration.
    pub fn global() -> Result<&'static MomoConfig> {
        GLOBAL.get().ok_or_else(|| {
            Error::new(ErrorKind::Config(
                "SDK not initialized: call MomoConfig::install first".into(),
            ))
        })
    }

    /// Get the API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the target environment sent with product-scoped calls.
    pub fn target_environment(&self) -> &str {
        &self.target_environment
    }

    /// Get the configured callback host, if any.
    pub fn callback_host(&self) -> Option<&str> {
        self.callback_host.as_deref()
    }

    /// Subscription key for the given product line.
    pub fn subscription_key(&self, product: SubscriptionType) -> Result<&str> {
        let key = match product {
            SubscriptionType::Collection => &self.collection_key,
            SubscriptionType::Disbursement => &self.disbursement_key,
            SubscriptionType::Remittance => &self.remittance_key,
        };
        key.as_deref().ok_or_else(|| {
            Error::new(ErrorKind::Config(format!(
                "no subscription key configured for the {} product",
                product
            )))
        })
    }

    /// Subscription key used for sandbox API-user provisioning: any configured
    /// product key works against the provisioning endpoints.
    pub fn provisioning_key(&self) -> Result<&str> {
        self.collection_key
            .as_deref()
            .or(self.disbursement_key.as_deref())
            .or(self.remittance_key.as_deref())
            .ok_or_else(|| {
                Error::new(ErrorKind::Config("no subscription key configured".into()))
            })
    }
}

/// Builder for [`MomoConfig`].
#[derive(Debug, Default)]
pub struct MomoConfigBuilder {
    base_url: Option<String>,
    target_environment: Option<String>,
    collection_key: Option<String>,
    disbursement_key: Option<String>,
    remittance_key: Option<String>,
    callback_host: Option<String>,
}

impl MomoConfigBuilder {
    /// Set the API base URL (defaults to the sandbox).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the target environment (defaults to `sandbox`).
    pub fn target_environment(mut self, environment: impl Into<String>) -> Self {
        self.target_environment = Some(environment.into());
        self
    }

    /// Set the Collection product subscription key.
    pub fn collection_key(mut self, key: impl Into<String>) -> Self {
        self.collection_key = Some(key.into());
        self
    }

    /// Set the Disbursement product subscription key.
    pub fn disbursement_key(mut self, key: impl Into<String>) -> Self {
        self.disbursement_key = Some(key.into());
        self
    }

    /// Set the Remittance product subscription key.
    pub fn remittance_key(mut self, key: impl Into<String>) -> Self {
        self.remittance_key = Some(key.into());
        self
    }

    /// Set the host the provider delivers asynchronous notifications to.
    pub fn callback_host(mut self, host: impl Into<String>) -> Self {
        self.callback_host = Some(host.into());
        self
    }

    /// Build the configuration, validating keys and callback host.
    pub fn build(self) -> Result<MomoConfig> {
        if self.collection_key.is_none()
            && self.disbursement_key.is_none()
            && self.remittance_key.is_none()
        {
            return Err(Error::new(ErrorKind::Config(
                "at least one product subscription key is required".into(),
            )));
        }

        if let Some(ref host) = self.callback_host {
            url::Url::parse(host).map_err(|e| {
                Error::with_source(ErrorKind::Config(format!("invalid callback host: {}", e)), e)
            })?;
        }

        Ok(MomoConfig {
            base_url: self
                .base_url
                .unwrap_or_else(|| SANDBOX_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            target_environment: self
                .target_environment
                .unwrap_or_else(|| SANDBOX_ENVIRONMENT.to_string()),
            collection_key: self.collection_key,
            disbursement_key: self.disbursement_key,
            remittance_key: self.remittance_key,
            callback_host: self.callback_host,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = MomoConfig::builder()
            .collection_key("collection-key")
            .build()
            .unwrap();

        assert_eq!(config.base_url(), SANDBOX_BASE_URL);
        assert_eq!(config.target_environment(), SANDBOX_ENVIRONMENT);
        assert!(config.callback_host().is_none());
    }

    #[test]
    fn test_requires_at_least_one_key() {
        let err = MomoConfig::builder().build().unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Config(_)));
    }

    #[test]
    fn test_subscription_key_per_product() {
        let config = MomoConfig::builder()
            .collection_key("c-key")
            .disbursement_key("d-key")
            .build()
            .unwrap();

        assert_eq!(
            config.subscription_key(SubscriptionType::Collection).unwrap(),
            "c-key"
        );
        assert_eq!(
            config
                .subscription_key(SubscriptionType::Disbursement)
                .unwrap(),
            "d-key"
        );
        let err = config
            .subscription_key(SubscriptionType::Remittance)
            .unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Config(_)));
        assert!(err.to_string().contains("remittance"));
    }

    #[test]
    fn test_provisioning_key_falls_back_across_products() {
        let config = MomoConfig::builder()
            .remittance_key("r-key")
            .build()
            .unwrap();
        assert_eq!(config.provisioning_key().unwrap(), "r-key");
    }

    #[test]
    fn test_invalid_callback_host_rejected() {
        let err = MomoConfig::builder()
            .collection_key("key")
            .callback_host("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Config(_)));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = MomoConfig::builder()
            .collection_key("key")
            .base_url("https://proxy.example.com/momo/")
            .build()
            .unwrap();
        assert_eq!(config.base_url(), "https://proxy.example.com/momo");
    }

    #[test]
    fn test_debug_redacts_keys() {
        let config = MomoConfig::builder()
            .collection_key("super-secret")
            .build()
            .unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
