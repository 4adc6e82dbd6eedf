//! Pre-flight connectivity checking.
//!
//! Before a call goes on the wire, the client asks its [`ConnectivityMonitor`]
//! whether a network path exists. When it does not, the call short-circuits
//! with [`ErrorKind::Connectivity`](crate::ErrorKind::Connectivity) instead of
//! running into a transport timeout.

use std::sync::atomic::{AtomicBool, Ordering};

/// Reports whether a network path is currently available.
///
/// Embedders that track OS-level network state can implement this to feed the
/// client real reachability information.
pub trait ConnectivityMonitor: Send + Sync {
    /// Whether a network path is currently believed to be available.
    fn is_connected(&self) -> bool;
}

/// Default monitor: assumes the network is reachable and lets the transport
/// surface any actual failure.
#[derive(Debug, Default)]
pub struct AlwaysOnline;

impl ConnectivityMonitor for AlwaysOnline {
    fn is_connected(&self) -> bool {
        true
    }
}

/// Monitor backed by a flag the embedder flips on network state changes.
#[derive(Debug)]
pub struct ManualConnectivity {
    online: AtomicBool,
}

impl ManualConnectivity {
    /// Create a monitor with the given initial state.
    pub fn new(online: bool) -> Self {
        Self {
            online: AtomicBool::new(online),
        }
    }

    /// Update the reported network state.
    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::Release);
    }
}

impl ConnectivityMonitor for ManualConnectivity {
    fn is_connected(&self) -> bool {
        self.online.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_online() {
        assert!(AlwaysOnline.is_connected());
    }

    #[test]
    fn test_manual_connectivity_toggles() {
        let monitor = ManualConnectivity::new(true);
        assert!(monitor.is_connected());

        monitor.set_online(false);
        assert!(!monitor.is_connected());

        monitor.set_online(true);
        assert!(monitor.is_connected());
    }
}
