//! Wire payloads for the MoMo API.
//!
//! These are pass-through structures: the SDK serializes them as given and
//! never inspects their contents. Field names follow the provider's camelCase
//! wire format except where the provider itself uses snake_case
//! ([`BasicUserInfo`]).

use serde::{Deserialize, Serialize};

/// Callback host registered when provisioning a sandbox API user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallbackHost {
    pub provider_callback_host: String,
}

impl CallbackHost {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            provider_callback_host: host.into(),
        }
    }
}

/// A provisioned sandbox API user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiUser {
    pub provider_callback_host: String,
    pub target_environment: String,
}

/// An issued API key. Never persisted by the SDK.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKey {
    pub api_key: String,
}

/// Generic acknowledgement body. Most accepting endpoints answer with an
/// empty body instead; see the facade's `Option<StatusResponse>` returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    #[serde(default)]
    pub status: bool,
}

/// Available balance for a product account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountBalance {
    pub available_balance: String,
    pub currency: String,
}

/// Identifies an account holder for validation lookups. Sent in the URL path,
/// not as a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountIdentifier {
    pub account_holder_id_type: String,
    pub account_holder_id: String,
}

impl AccountIdentifier {
    pub fn new(id_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            account_holder_id_type: id_type.into(),
            account_holder_id: id.into(),
        }
    }

    /// Identify an account holder by phone number.
    pub fn msisdn(msisdn: impl Into<String>) -> Self {
        Self::new("msisdn", msisdn)
    }
}

/// Whether an account holder is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountHolderStatus {
    pub result: bool,
}

/// Basic KYC record for an account holder. The provider uses snake_case for
/// this endpoint, unlike the rest of the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicUserInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// A transaction party (payer or payee).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub party_id_type: String,
    pub party_id: String,
}

impl Party {
    /// A party identified by phone number.
    pub fn msisdn(msisdn: impl Into<String>) -> Self {
        Self {
            party_id_type: "MSISDN".to_string(),
            party_id: msisdn.into(),
        }
    }
}

/// A request-to-pay order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestPay {
    pub amount: String,
    pub currency: String,
    pub external_id: String,
    pub payer: Party,
    pub payer_message: String,
    pub payee_note: String,
}

/// Machine-readable failure reason attached to terminal transaction states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorReason {
    pub code: String,
    pub message: String,
}

/// Status of a request-to-pay transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestPayStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financial_transaction_id: Option<String>,
    pub external_id: String,
    pub amount: String,
    pub currency: String,
    pub payer: Party,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payee_note: Option<String>,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<ErrorReason>,
}

/// A withdrawal order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Withdraw {
    pub amount: String,
    pub currency: String,
    pub external_id: String,
    pub payer: Party,
    pub payer_message: String,
    pub payee_note: String,
}

/// Status of a withdrawal transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financial_transaction_id: Option<String>,
    pub external_id: String,
    pub amount: String,
    pub currency: String,
    pub payer: Party,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payee_note: Option<String>,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<ErrorReason>,
}

/// Message pushed to a payer after a completed payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryNotification {
    pub notification_message: String,
}
