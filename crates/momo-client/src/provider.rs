//! Process-wide shared client.
//!
//! Connection pooling only pays off when every call goes through the same
//! client, so the SDK keeps one instance for the lifetime of the process.
//! There is deliberately no teardown.

use std::sync::{Arc, OnceLock};

use crate::client::MomoHttpClient;
use crate::config::ClientConfig;
use crate::error::Result;

static SHARED: OnceLock<Arc<MomoHttpClient>> = OnceLock::new();

/// Returns the process-wide shared client, constructing it with default
/// configuration on first use. Every later call returns the same instance.
pub fn shared_client() -> Result<Arc<MomoHttpClient>> {
    if let Some(client) = SHARED.get() {
        return Ok(Arc::clone(client));
    }

    // Two racing first calls may both build a client; only one is kept.
    let built = Arc::new(MomoHttpClient::new(ClientConfig::default())?);
    Ok(Arc::clone(SHARED.get_or_init(|| built)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_client_identity() {
        let first = shared_client().unwrap();
        let second = shared_client().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
