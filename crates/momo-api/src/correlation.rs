//! Reference-id generation and diagnostic correlation state.
//!
//! The last-seen reference id is the only global mutable state in the SDK. It
//! exists purely so embedders can correlate their own logs with provider-side
//! records after the fact; request handling never reads it.

use std::sync::Mutex;

use uuid::Uuid;

static LAST_REFERENCE_ID: Mutex<Option<String>> = Mutex::new(None);

/// Generate a fresh reference id (UUID v4) for a resource-creating call.
pub fn new_reference_id() -> String {
    Uuid::new_v4().to_string()
}

/// Record the reference id most recently attached to an outbound call.
pub(crate) fn record_reference_id(reference_id: &str) {
    if let Ok(mut slot) = LAST_REFERENCE_ID.lock() {
        *slot = Some(reference_id.to_string());
    }
}

/// The reference id most recently attached to an outbound call.
pub fn last_reference_id() -> Option<String> {
    LAST_REFERENCE_ID.lock().ok().and_then(|slot| slot.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_reference_ids_are_unique_uuids() {
        let a = new_reference_id();
        let b = new_reference_id();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a).is_ok());
    }

    #[test]
    fn test_record_and_read_back() {
        record_reference_id("11111111-2222-3333-4444-555555555555");
        // Another test may record in between; assert the cell holds *a* value.
        assert!(last_reference_id().is_some());
    }
}
