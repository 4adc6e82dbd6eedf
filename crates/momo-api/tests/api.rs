//! Scenario tests for the MoMo facade against a mock provider.

use std::sync::Arc;

use futures::future::join_all;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use momo_sdk_api::{
    AccountIdentifier, CallbackHost, ClientConfig, ErrorKind, MomoApi, MomoConfig, Party,
    RequestPay, SubscriptionType, Withdraw,
};
use momo_sdk_client::{ManualConnectivity, MomoHttpClient};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn config_for(server: &MockServer) -> MomoConfig {
    MomoConfig::builder()
        .base_url(server.uri())
        .collection_key("collection-key")
        .disbursement_key("disbursement-key")
        .build()
        .unwrap()
}

fn api_for(server: &MockServer) -> MomoApi {
    let http = Arc::new(MomoHttpClient::new(ClientConfig::default()).unwrap());
    MomoApi::with_client(config_for(server), http)
}

fn sample_pay(external_id: &str) -> RequestPay {
    RequestPay {
        amount: "100".into(),
        currency: "EUR".into(),
        external_id: external_id.into(),
        payer: Party::msisdn("256774290781"),
        payer_message: "payment".into(),
        payee_note: "order".into(),
    }
}

#[tokio::test]
async fn create_user_accepted_on_2xx() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1_0/apiuser"))
        .and(header("Ocp-Apim-Subscription-Key", "collection-key"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let call = api.create_user(&CallbackHost::new("https://merchant.example.com"));
    let reference_id = call.reference_id().unwrap().to_string();

    // Empty 2xx body is the accepted outcome, not an error.
    assert!(call.await.unwrap().is_none());

    // The generated reference id went out on the wire verbatim.
    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        requests[0]
            .headers
            .get("X-Reference-Id")
            .unwrap()
            .to_str()
            .unwrap(),
        reference_id
    );
}

#[tokio::test]
async fn create_user_malformed_callback_host_is_http_400() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1_0/apiuser"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "code": "BAD_CALLBACK",
            "message": "providerCallbackHost is not a valid host"
        })))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let err = api
        .create_user(&CallbackHost::new("not a host"))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(400));
    assert!(err.to_string().contains("BAD_CALLBACK"));
}

#[tokio::test]
async fn unknown_reference_status_is_http_404() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "code": "RESOURCE_NOT_FOUND",
            "message": "Requested resource was not found."
        })))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let err = api
        .request_to_pay_transaction_status("00000000-0000-0000-0000-000000000000")
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn balance_offline_fails_without_round_trip() {
    init_tracing();
    let server = MockServer::start().await;

    let monitor = Arc::new(ManualConnectivity::new(false));
    let http = Arc::new(MomoHttpClient::with_monitor(ClientConfig::default(), monitor).unwrap());
    let api = MomoApi::with_client(config_for(&server), http);

    let err = api
        .account_balance(SubscriptionType::Collection)
        .await
        .unwrap_err();

    assert!(matches!(err.kind, ErrorKind::Connectivity));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn concurrent_balance_calls_resolve_independently() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/collection/v1_0/account/balance"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "availableBalance": "1000",
            "currency": "EUR"
        })))
        .expect(50)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let calls: Vec<_> = (0..50)
        .map(|_| api.account_balance(SubscriptionType::Collection))
        .collect();

    for outcome in join_all(calls).await {
        let balance = outcome.unwrap();
        assert_eq!(balance.currency, "EUR");
    }
}

#[tokio::test]
async fn concurrent_status_polls_do_not_leak_across_calls() {
    init_tracing();
    let server = MockServer::start().await;

    // Echo the polled reference id back as the transaction's externalId, so
    // any cross-call header or URL mixup shows up as a mismatched result.
    Mock::given(method("GET"))
        .respond_with(|req: &Request| {
            let reference = req.url.path().rsplit('/').next().unwrap_or_default();
            ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "externalId": reference,
                "amount": "100",
                "currency": "EUR",
                "payer": {"partyIdType": "MSISDN", "partyId": "256774290781"},
                "status": "SUCCESSFUL"
            }))
        })
        .expect(50)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let references: Vec<String> = (0..50)
        .map(|i| format!("11111111-0000-0000-0000-{:012}", i))
        .collect();
    let calls: Vec<_> = references
        .iter()
        .map(|reference| api.request_to_pay_transaction_status(reference))
        .collect();

    for (reference, outcome) in references.iter().zip(join_all(calls).await) {
        let status = outcome.unwrap();
        assert_eq!(&status.external_id, reference);
        assert_eq!(status.status, "SUCCESSFUL");
    }
}

#[tokio::test]
async fn withdraw_payload_survives_the_wire() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/collection/v1_0/requesttowithdraw"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let withdraw = Withdraw {
        amount: "250".into(),
        currency: "UGX".into(),
        external_id: "wd-42".into(),
        payer: Party::msisdn("256774290781"),
        payer_message: "cash out".into(),
        payee_note: "agent 9".into(),
    };

    let api = api_for(&server);
    api.request_to_withdraw_v1(&withdraw, "https://merchant.example.com")
        .await
        .unwrap();

    // The test double echoes what it received; it must deserialize back into
    // a structurally equal order.
    let requests = server.received_requests().await.unwrap();
    let echoed: Withdraw = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(echoed, withdraw);
}

#[tokio::test]
async fn withdraw_v2_targets_v2_path_with_callback() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/collection/v2_0/requesttowithdraw"))
        .and(header(
            "X-Callback-Url",
            "https://merchant.example.com/collection",
        ))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let withdraw = Withdraw {
        amount: "10".into(),
        currency: "EUR".into(),
        external_id: "wd-v2".into(),
        payer: Party::msisdn("256774290781"),
        payer_message: "m".into(),
        payee_note: "n".into(),
    };

    let api = api_for(&server);
    let call = api.request_to_withdraw_v2(&withdraw, "https://merchant.example.com");
    assert!(call.reference_id().is_some());
    assert!(call.await.unwrap().is_none());
}

#[tokio::test]
async fn validate_account_holder_and_user_info_lookups() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(
            "/disbursement/v1_0/accountholder/msisdn/256774290781/active",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": true
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(
            "/collection/v1_0/accountholder/msisdn/256774290781/basicuserinfo",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "given_name": "Sand",
            "family_name": "Box"
        })))
        .mount(&server)
        .await;

    let api = api_for(&server);

    let active = api
        .validate_account_holder_status(
            &AccountIdentifier::msisdn("256774290781"),
            SubscriptionType::Disbursement,
        )
        .await
        .unwrap();
    assert!(active.result);

    let info = api
        .basic_user_info("256774290781", SubscriptionType::Collection)
        .await
        .unwrap();
    assert_eq!(info.given_name.as_deref(), Some("Sand"));
}

#[tokio::test]
async fn delivery_notification_rides_headers_and_body() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(
            "/collection/v1_0/requesttopay/ref-9/deliverynotification",
        ))
        .and(header("notificationMessage", "Your payment arrived"))
        .and(header("Language", "en"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let ack = api
        .request_pay_delivery_notification(
            "ref-9",
            "Your payment arrived",
            "en",
            SubscriptionType::Collection,
            &momo_sdk_api::DeliveryNotification {
                notification_message: "Your payment arrived".into(),
            },
        )
        .await
        .unwrap();
    assert!(ack.is_none());
}

#[tokio::test]
async fn callback_delivered_outcomes_fire_once_per_call() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/collection/v1_0/requesttopay"))
        .respond_with(ResponseTemplate::new(202))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let (tx, rx) = tokio::sync::oneshot::channel();

    api.request_to_pay(&sample_pay("order-cb"), "https://merchant.example.com")
        .on_complete(move |outcome| {
            // A second invocation would panic on the consumed sender.
            tx.send(outcome.map(|ack| ack.is_none())).unwrap();
        });

    assert!(rx.await.unwrap().unwrap());
}
