//! Product-line selection.

use std::fmt;

/// MoMo product line, selecting credentials, URL prefix, and callback route.
///
/// The mapping is total: adding a product means extending every match here,
/// there is no string-based branching anywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubscriptionType {
    Collection,
    Disbursement,
    Remittance,
}

impl SubscriptionType {
    /// URL path segment for product-scoped endpoints.
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionType::Collection => "collection",
            SubscriptionType::Disbursement => "disbursement",
            SubscriptionType::Remittance => "remittance",
        }
    }

    /// Route suffix appended to the caller's callback host, so provider
    /// notifications for different products land on different routes.
    pub fn callback_suffix(&self) -> &'static str {
        match self {
            SubscriptionType::Collection => "/collection",
            SubscriptionType::Disbursement => "/disbursement",
            SubscriptionType::Remittance => "/remittance",
        }
    }
}

impl fmt::Display for SubscriptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
