//! The MoMo API facade.
//!
//! One non-blocking method per business operation. Each method derives its
//! correlation data, builds a fresh header set, fills in the matching endpoint
//! descriptor, and hands the prepared call to the dispatcher; the returned
//! [`PendingCall`] resolves on the background pool.

use std::sync::{Arc, OnceLock};

use serde::de::DeserializeOwned;
use tracing::debug;

use momo_sdk_client::{shared_client, MomoHttpClient, RequestBuilder, RequestMethod, Result};

use crate::config::MomoConfig;
use crate::correlation;
use crate::dispatch::{self, PendingCall};
use crate::endpoint::{self, EmptyBody, Endpoint};
use crate::headers::{self, HeaderSet};
use crate::models::{
    AccountBalance, AccountHolderStatus, AccountIdentifier, ApiKey, ApiUser, BasicUserInfo,
    CallbackHost, DeliveryNotification, RequestPay, RequestPayStatus, StatusResponse, Withdraw,
    WithdrawStatus,
};
use crate::product::SubscriptionType;

/// MTN Mobile Money API client.
///
/// Methods never block: every operation returns a [`PendingCall`] immediately
/// after submission, and the outcome arrives either by awaiting it or through
/// [`PendingCall::on_complete`]. Pre-dispatch failures (missing subscription
/// key, unserializable payload) travel the same completion path, so callers
/// handle exactly one failure branch.
///
/// # Example
///
/// ```rust,ignore
/// use momo_sdk_api::{MomoApi, MomoConfig, SubscriptionType};
///
/// let config = MomoConfig::builder()
///     .collection_key(std::env::var("MOMO_COLLECTION_KEY")?)
///     .build()?;
/// let api = MomoApi::new(config)?;
///
/// let balance = api.account_balance(SubscriptionType::Collection).await?;
/// println!("{} {}", balance.available_balance, balance.currency);
/// ```
#[derive(Debug, Clone)]
pub struct MomoApi {
    http: Arc<MomoHttpClient>,
    config: MomoConfig,
}

impl MomoApi {
    /// Create a facade backed by the process-wide shared HTTP client.
    pub fn new(config: MomoConfig) -> Result<Self> {
        Ok(Self {
            http: shared_client()?,
            config,
        })
    }

    /// Create a facade with an explicit HTTP client (custom timeouts,
    /// connectivity monitor, or a test transport).
    pub fn with_client(config: MomoConfig, http: Arc<MomoHttpClient>) -> Self {
        Self { http, config }
    }

    /// The process-wide facade, lazily created from the installed
    /// [`MomoConfig`]. Lives for the rest of the process; no teardown.
    pub fn instance() -> Result<&'static MomoApi> {
        static INSTANCE: OnceLock<MomoApi> = OnceLock::new();
        if let Some(api) = INSTANCE.get() {
            return Ok(api);
        }
        let api = MomoApi::new(MomoConfig::global()?.clone())?;
        Ok(INSTANCE.get_or_init(|| api))
    }

    /// The configuration this facade reads.
    pub fn config(&self) -> &MomoConfig {
        &self.config
    }

    // =========================================================================
    // Sandbox user provisioning
    // =========================================================================

    /// Provision a sandbox API user bound to the given callback host.
    ///
    /// A fresh reference id is generated for the new user and exposed via
    /// [`PendingCall::reference_id`]; pass it to [`get_user_details`] and
    /// [`create_api_key`] afterwards.
    ///
    /// [`get_user_details`]: MomoApi::get_user_details
    /// [`create_api_key`]: MomoApi::create_api_key
    pub fn create_user(&self, callback: &CallbackHost) -> PendingCall<Option<StatusResponse>> {
        let reference_id = correlation::new_reference_id();
        let headers = match headers::provisioning_headers(&self.config, &reference_id) {
            Ok(headers) => headers,
            Err(err) => return dispatch::completed(Err(err)),
        };
        let body = match serde_json::to_value(callback) {
            Ok(body) => body,
            Err(err) => return dispatch::completed(Err(err.into())),
        };
        let request = self.prepare(&endpoint::CREATE_USER, None, &[], headers, Some(body));
        self.submit_tolerant(&endpoint::CREATE_USER, request)
            .with_reference(reference_id)
    }

    /// Fetch the API user provisioned under `reference_id`.
    pub fn get_user_details(&self, reference_id: &str) -> PendingCall<ApiUser> {
        correlation::record_reference_id(reference_id);
        let headers = match headers::provisioning_headers(&self.config, "") {
            Ok(headers) => headers,
            Err(err) => return dispatch::completed(Err(err)),
        };
        let request = self.prepare(
            &endpoint::GET_USER_DETAILS,
            None,
            &[reference_id],
            headers,
            None,
        );
        self.submit(&endpoint::GET_USER_DETAILS, request)
    }

    /// Create an API key for the user provisioned under `reference_id`.
    /// The key is returned to the caller and never stored.
    pub fn create_api_key(&self, reference_id: &str) -> PendingCall<ApiKey> {
        correlation::record_reference_id(reference_id);
        let headers = match headers::provisioning_headers(&self.config, "") {
            Ok(headers) => headers,
            Err(err) => return dispatch::completed(Err(err)),
        };
        let request = self.prepare(
            &endpoint::CREATE_API_KEY,
            None,
            &[reference_id],
            headers,
            None,
        );
        self.submit(&endpoint::CREATE_API_KEY, request)
    }

    // =========================================================================
    // Common product operations
    // =========================================================================

    /// Balance of the account backing the given product line.
    pub fn account_balance(&self, product: SubscriptionType) -> PendingCall<AccountBalance> {
        let headers = match headers::build_headers(&self.config, product, "", "", false) {
            Ok(headers) => headers,
            Err(err) => return dispatch::completed(Err(err)),
        };
        let request = self.prepare(
            &endpoint::ACCOUNT_BALANCE,
            Some(product),
            &[],
            headers,
            None,
        );
        self.submit(&endpoint::ACCOUNT_BALANCE, request)
    }

    /// Whether the given account holder is active on the given product line.
    pub fn validate_account_holder_status(
        &self,
        account: &AccountIdentifier,
        product: SubscriptionType,
    ) -> PendingCall<AccountHolderStatus> {
        let headers = match headers::build_headers(&self.config, product, "", "", false) {
            Ok(headers) => headers,
            Err(err) => return dispatch::completed(Err(err)),
        };
        let request = self.prepare(
            &endpoint::VALIDATE_ACCOUNT_HOLDER,
            Some(product),
            &[&account.account_holder_id_type, &account.account_holder_id],
            headers,
            None,
        );
        self.submit(&endpoint::VALIDATE_ACCOUNT_HOLDER, request)
    }

    /// Basic KYC record for the account holder behind `msisdn`.
    pub fn basic_user_info(
        &self,
        msisdn: &str,
        product: SubscriptionType,
    ) -> PendingCall<BasicUserInfo> {
        let headers = match headers::build_headers(&self.config, product, "", "", false) {
            Ok(headers) => headers,
            Err(err) => return dispatch::completed(Err(err)),
        };
        let request = self.prepare(
            &endpoint::BASIC_USER_INFO,
            Some(product),
            &[msisdn],
            headers,
            None,
        );
        self.submit(&endpoint::BASIC_USER_INFO, request)
    }

    /// Push a delivery notification for the payment behind `reference_id`.
    /// The message also rides in the `notificationMessage` header alongside
    /// the body, per the provider's contract.
    pub fn request_pay_delivery_notification(
        &self,
        reference_id: &str,
        notification_message: &str,
        language: &str,
        product: SubscriptionType,
        notification: &DeliveryNotification,
    ) -> PendingCall<Option<StatusResponse>> {
        correlation::record_reference_id(reference_id);
        let mut headers = match headers::build_headers(&self.config, product, "", "", false) {
            Ok(headers) => headers,
            Err(err) => return dispatch::completed(Err(err)),
        };
        headers.insert(
            headers::NOTIFICATION_MESSAGE.to_string(),
            notification_message.to_string(),
        );
        headers.insert(headers::LANGUAGE.to_string(), language.to_string());

        let body = match serde_json::to_value(notification) {
            Ok(body) => body,
            Err(err) => return dispatch::completed(Err(err.into())),
        };
        let request = self.prepare(
            &endpoint::REQUEST_PAY_DELIVERY_NOTIFICATION,
            Some(product),
            &[reference_id],
            headers,
            Some(body),
        );
        self.submit_tolerant(&endpoint::REQUEST_PAY_DELIVERY_NOTIFICATION, request)
    }

    // =========================================================================
    // Collection
    // =========================================================================

    /// Request a payment from a payer. Generates a fresh reference id
    /// (exposed on the returned call) and registers `callback_host` plus the
    /// collection route suffix for the asynchronous outcome notification.
    pub fn request_to_pay(
        &self,
        request: &RequestPay,
        callback_host: &str,
    ) -> PendingCall<Option<StatusResponse>> {
        self.submit_order(&endpoint::REQUEST_TO_PAY, request, callback_host)
    }

    /// Status of the payment started under `reference_id`.
    pub fn request_to_pay_transaction_status(
        &self,
        reference_id: &str,
    ) -> PendingCall<RequestPayStatus> {
        self.transaction_status(&endpoint::REQUEST_TO_PAY_STATUS, reference_id)
    }

    /// Request a withdrawal (v1 endpoint).
    pub fn request_to_withdraw_v1(
        &self,
        withdraw: &Withdraw,
        callback_host: &str,
    ) -> PendingCall<Option<StatusResponse>> {
        self.submit_order(&endpoint::REQUEST_TO_WITHDRAW_V1, withdraw, callback_host)
    }

    /// Request a withdrawal (v2 endpoint).
    pub fn request_to_withdraw_v2(
        &self,
        withdraw: &Withdraw,
        callback_host: &str,
    ) -> PendingCall<Option<StatusResponse>> {
        self.submit_order(&endpoint::REQUEST_TO_WITHDRAW_V2, withdraw, callback_host)
    }

    /// Status of the withdrawal started under `reference_id`.
    pub fn request_to_withdraw_transaction_status(
        &self,
        reference_id: &str,
    ) -> PendingCall<WithdrawStatus> {
        self.transaction_status(&endpoint::REQUEST_TO_WITHDRAW_STATUS, reference_id)
    }

    // =========================================================================
    // Call assembly
    // =========================================================================

    /// Submit a resource-creating collection order: fresh reference id,
    /// callback registration, serialized payload.
    fn submit_order<B: serde::Serialize>(
        &self,
        endpoint: &Endpoint,
        order: &B,
        callback_host: &str,
    ) -> PendingCall<Option<StatusResponse>> {
        let reference_id = correlation::new_reference_id();
        let callback = headers::callback_url(callback_host, SubscriptionType::Collection);
        let headers = match headers::build_headers(
            &self.config,
            SubscriptionType::Collection,
            &reference_id,
            &callback,
            true,
        ) {
            Ok(headers) => headers,
            Err(err) => return dispatch::completed(Err(err)),
        };
        let body = match serde_json::to_value(order) {
            Ok(body) => body,
            Err(err) => return dispatch::completed(Err(err.into())),
        };
        let request = self.prepare(endpoint, None, &[], headers, Some(body));
        self.submit_tolerant(endpoint, request)
            .with_reference(reference_id)
    }

    /// Poll a transaction status endpoint under a caller-supplied reference.
    fn transaction_status<T: DeserializeOwned + Send + 'static>(
        &self,
        endpoint: &Endpoint,
        reference_id: &str,
    ) -> PendingCall<T> {
        let headers = match headers::build_headers(
            &self.config,
            SubscriptionType::Collection,
            reference_id,
            "",
            false,
        ) {
            Ok(headers) => headers,
            Err(err) => return dispatch::completed(Err(err)),
        };
        let request = self.prepare(endpoint, None, &[reference_id], headers, None);
        self.submit(endpoint, request)
    }

    /// Fill in an endpoint descriptor: render the URL, attach the header set
    /// and optional body.
    fn prepare(
        &self,
        endpoint: &Endpoint,
        product: Option<SubscriptionType>,
        args: &[&str],
        headers: HeaderSet,
        body: Option<serde_json::Value>,
    ) -> RequestBuilder {
        debug_assert_eq!(endpoint.has_body, body.is_some());
        debug_assert!(
            !endpoint.requires_reference_header || headers.contains_key(headers::X_REFERENCE_ID)
        );
        debug_assert!(
            !endpoint.requires_callback || headers.contains_key(headers::X_CALLBACK_URL)
        );

        let url = endpoint.url(self.config.base_url(), product, args);
        debug!(operation = endpoint.name, url = %url, "dispatching call");

        let builder = match endpoint.method {
            RequestMethod::Get => self.http.get(url),
            RequestMethod::Post => self.http.post(url),
        }
        .headers(headers);

        match body {
            Some(body) => builder.json_value(body),
            None => builder,
        }
    }

    fn submit<T: DeserializeOwned + Send + 'static>(
        &self,
        endpoint: &Endpoint,
        request: RequestBuilder,
    ) -> PendingCall<T> {
        debug_assert_eq!(endpoint.empty_body, EmptyBody::Rejected);
        let http = Arc::clone(&self.http);
        dispatch::dispatch(async move { http.execute(request).await?.json() })
    }

    fn submit_tolerant<T: DeserializeOwned + Send + 'static>(
        &self,
        endpoint: &Endpoint,
        request: RequestBuilder,
    ) -> PendingCall<Option<T>> {
        debug_assert_eq!(endpoint.empty_body, EmptyBody::Tolerated);
        let http = Arc::clone(&self.http);
        dispatch::dispatch(async move { http.execute(request).await?.json_or_none() })
    }
}
