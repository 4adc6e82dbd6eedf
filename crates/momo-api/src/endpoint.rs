//! Compile-time descriptors for every remote operation.
//!
//! One immutable [`Endpoint`] per business operation: HTTP method, path
//! template, header requirements, body presence, and how an empty 2xx body is
//! treated. The facade never constructs a URL or decides header shape on its
//! own; it only fills in a descriptor.

use momo_sdk_client::RequestMethod;

use crate::product::SubscriptionType;

/// How a 2xx response with an empty body is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyBody {
    /// An empty body is a valid outcome (the provider acknowledges the
    /// request asynchronously).
    Tolerated,
    /// An empty body is a decode failure.
    Rejected,
}

/// Static description of one remote operation.
#[derive(Debug, Clone, Copy)]
pub struct Endpoint {
    /// Operation name, used in tracing output.
    pub name: &'static str,
    /// HTTP method.
    pub method: RequestMethod,
    /// Path template relative to the base URL. `{product}` expands to the
    /// product URL segment; `{}` slots are filled positionally by [`url`].
    ///
    /// [`url`]: Endpoint::url
    pub path: &'static str,
    /// Whether the call carries a reference-id header.
    pub requires_reference_header: bool,
    /// Whether the call carries a callback-URL header.
    pub requires_callback: bool,
    /// Whether the call carries a JSON body.
    pub has_body: bool,
    /// Empty-body policy for 2xx responses.
    pub empty_body: EmptyBody,
}

impl Endpoint {
    /// Render the full request URL.
    pub fn url(&self, base_url: &str, product: Option<SubscriptionType>, args: &[&str]) -> String {
        let mut path = self.path.to_string();
        if let Some(product) = product {
            path = path.replace("{product}", product.as_str());
        }
        for arg in args {
            path = path.replacen("{}", arg, 1);
        }
        format!("{}/{}", base_url.trim_end_matches('/'), path)
    }
}

/// Provision a sandbox API user.
pub const CREATE_USER: Endpoint = Endpoint {
    name: "create_user",
    method: RequestMethod::Post,
    path: "v1_0/apiuser",
    requires_reference_header: true,
    requires_callback: false,
    has_body: true,
    empty_body: EmptyBody::Tolerated,
};

/// Fetch a provisioned API user.
pub const GET_USER_DETAILS: Endpoint = Endpoint {
    name: "get_user_details",
    method: RequestMethod::Get,
    path: "v1_0/apiuser/{}",
    requires_reference_header: false,
    requires_callback: false,
    has_body: false,
    empty_body: EmptyBody::Rejected,
};

/// Create an API key for a provisioned user.
pub const CREATE_API_KEY: Endpoint = Endpoint {
    name: "create_api_key",
    method: RequestMethod::Post,
    path: "v1_0/apiuser/{}/apikey",
    requires_reference_header: false,
    requires_callback: false,
    has_body: false,
    empty_body: EmptyBody::Rejected,
};

/// Account balance for a product line.
pub const ACCOUNT_BALANCE: Endpoint = Endpoint {
    name: "account_balance",
    method: RequestMethod::Get,
    path: "{product}/v1_0/account/balance",
    requires_reference_header: false,
    requires_callback: false,
    has_body: false,
    empty_body: EmptyBody::Rejected,
};

/// Whether an account holder is active.
pub const VALIDATE_ACCOUNT_HOLDER: Endpoint = Endpoint {
    name: "validate_account_holder_status",
    method: RequestMethod::Get,
    path: "{product}/v1_0/accountholder/{}/{}/active",
    requires_reference_header: false,
    requires_callback: false,
    has_body: false,
    empty_body: EmptyBody::Rejected,
};

/// Basic KYC record for an account holder.
pub const BASIC_USER_INFO: Endpoint = Endpoint {
    name: "basic_user_info",
    method: RequestMethod::Get,
    path: "{product}/v1_0/accountholder/msisdn/{}/basicuserinfo",
    requires_reference_header: false,
    requires_callback: false,
    has_body: false,
    empty_body: EmptyBody::Rejected,
};

/// Push a delivery notification for a payment.
pub const REQUEST_PAY_DELIVERY_NOTIFICATION: Endpoint = Endpoint {
    name: "request_pay_delivery_notification",
    method: RequestMethod::Post,
    path: "{product}/v1_0/requesttopay/{}/deliverynotification",
    requires_reference_header: false,
    requires_callback: false,
    has_body: true,
    empty_body: EmptyBody::Tolerated,
};

/// Collect a payment from a payer.
pub const REQUEST_TO_PAY: Endpoint = Endpoint {
    name: "request_to_pay",
    method: RequestMethod::Post,
    path: "collection/v1_0/requesttopay",
    requires_reference_header: true,
    requires_callback: true,
    has_body: true,
    empty_body: EmptyBody::Tolerated,
};

/// Poll a collection payment's status.
pub const REQUEST_TO_PAY_STATUS: Endpoint = Endpoint {
    name: "request_to_pay_transaction_status",
    method: RequestMethod::Get,
    path: "collection/v1_0/requesttopay/{}",
    requires_reference_header: true,
    requires_callback: false,
    has_body: false,
    empty_body: EmptyBody::Rejected,
};

/// Withdraw funds (v1).
pub const REQUEST_TO_WITHDRAW_V1: Endpoint = Endpoint {
    name: "request_to_withdraw_v1",
    method: RequestMethod::Post,
    path: "collection/v1_0/requesttowithdraw",
    requires_reference_header: true,
    requires_callback: true,
    has_body: true,
    empty_body: EmptyBody::Tolerated,
};

/// Withdraw funds (v2).
pub const REQUEST_TO_WITHDRAW_V2: Endpoint = Endpoint {
    name: "request_to_withdraw_v2",
    method: RequestMethod::Post,
    path: "collection/v2_0/requesttowithdraw",
    requires_reference_header: true,
    requires_callback: true,
    has_body: true,
    empty_body: EmptyBody::Tolerated,
};

/// Poll a withdrawal's status.
pub const REQUEST_TO_WITHDRAW_STATUS: Endpoint = Endpoint {
    name: "request_to_withdraw_transaction_status",
    method: RequestMethod::Get,
    path: "collection/v1_0/requesttowithdraw/{}",
    requires_reference_header: true,
    requires_callback: false,
    has_body: false,
    empty_body: EmptyBody::Rejected,
};
