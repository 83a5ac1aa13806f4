//! Integration tests for the Application resource.
//!
//! These tests drive the context/instance pair end-to-end against a mock
//! server: fetch rehydration, sparse updates, boolean deletes, and the
//! lazily-created self-scoped context.

use serde_json::json;
use twilio_api::rest::resources::v2010::account::{
    ApplicationContext, ApplicationInstance, ApplicationUpdateParams,
};
use twilio_api::rest::{InstanceContext, InstanceResource, Version};
use twilio_api::{AccountSid, ApiHost, AuthToken, ResourceError, TwilioConfig};
use wiremock::matchers::{body_string, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEST_ACCOUNT: &str = "ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
const APP_PATH: &str = "/2010-04-01/Accounts/AC1/Applications/AP2.json";

fn create_test_version(server: &MockServer) -> Version {
    let config = TwilioConfig::builder()
        .account_sid(AccountSid::new(TEST_ACCOUNT).unwrap())
        .auth_token(AuthToken::new("test-auth-token").unwrap())
        .api_host(ApiHost::new(server.uri()).unwrap())
        .build()
        .unwrap();
    Version::new(&config)
}

/// Creates a transport that never talks to a server (for offline tests).
fn offline_version() -> Version {
    let config = TwilioConfig::builder()
        .account_sid(AccountSid::new(TEST_ACCOUNT).unwrap())
        .auth_token(AuthToken::new("test-auth-token").unwrap())
        .build()
        .unwrap();
    Version::new(&config)
}

fn sample_payload() -> serde_json::Value {
    json!({
        "account_sid": "AC1",
        "api_version": "2010-04-01",
        "date_created": "Mon, 22 Aug 2011 20:58:45 +0000",
        "date_updated": "Tue, 18 Aug 2015 16:48:57 +0000",
        "friendly_name": "Phone Me",
        "sid": "AP2",
        "sms_url": "http://example.com/sms",
        "voice_caller_id_lookup": false,
        "voice_url": "http://example.com/voice",
        "uri": "/2010-04-01/Accounts/AC1/Applications/AP2.json",
    })
}

// ============================================================================
// Context operations
// ============================================================================

#[tokio::test]
async fn test_context_fetch_builds_instance_from_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(APP_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_payload()))
        .mount(&server)
        .await;

    let context = ApplicationContext::new(create_test_version(&server), "AC1", "AP2");
    let app = context.fetch().await.unwrap();

    assert_eq!(app.sid(), Some("AP2"));
    assert_eq!(app.friendly_name(), Some("Phone Me"));
    assert_eq!(app.voice_url(), Some("http://example.com/voice"));
    assert_eq!(app.voice_caller_id_lookup(), Some(false));
    // Identity comes from the context's solution, not the payload
    assert_eq!(app.solution().account_sid, "AC1");
    assert_eq!(app.solution().sid, "AP2");
}

#[tokio::test]
async fn test_context_fetch_tolerates_partial_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(APP_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"sid": "AP2"})),
        )
        .mount(&server)
        .await;

    let context = ApplicationContext::new(create_test_version(&server), "AC1", "AP2");
    let app = context.fetch().await.unwrap();

    assert_eq!(app.sid(), Some("AP2"));
    assert_eq!(app.friendly_name(), None);
    assert_eq!(app.sms_url(), None);
    assert_eq!(app.date_created(), None);
}

#[tokio::test]
async fn test_context_fetch_propagates_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(APP_PATH))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": 20404,
            "message": "The requested resource was not found",
        })))
        .mount(&server)
        .await;

    let context = ApplicationContext::new(create_test_version(&server), "AC1", "AP2");
    let error = context.fetch().await.unwrap_err();
    assert!(matches!(error, ResourceError::Transport(_)));
}

#[tokio::test]
async fn test_context_update_sends_only_provided_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(APP_PATH))
        .and(body_string("Friendlyname=New+Name"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sid": "AP2",
            "friendly_name": "New Name",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let context = ApplicationContext::new(create_test_version(&server), "AC1", "AP2");
    let updated = context
        .update(ApplicationUpdateParams {
            friendly_name: Some("New Name".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(updated.friendly_name(), Some("New Name"));
    // Update returns a new instance with the same identity
    assert_eq!(updated.solution().sid, "AP2");
}

#[tokio::test]
async fn test_context_update_with_empty_params_is_a_wire_noop() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(APP_PATH))
        .and(body_string(""))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_payload()))
        .expect(1)
        .mount(&server)
        .await;

    let context = ApplicationContext::new(create_test_version(&server), "AC1", "AP2");
    let app = context
        .update(ApplicationUpdateParams::default())
        .await
        .unwrap();
    assert_eq!(app.sid(), Some("AP2"));
}

#[tokio::test]
async fn test_context_delete_reports_boolean_outcome() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(APP_PATH))
        .respond_with(ResponseTemplate::new(204))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(APP_PATH))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": 20404,
            "message": "The requested resource was not found",
        })))
        .mount(&server)
        .await;

    let context = ApplicationContext::new(create_test_version(&server), "AC1", "AP2");

    // First delete succeeds; deleting again is a normal non-success
    assert!(context.delete().await.unwrap());
    assert!(!context.delete().await.unwrap());
}

// ============================================================================
// Instance operations (self-scoped via the lazy proxy)
// ============================================================================

#[tokio::test]
async fn test_instance_fetch_returns_fresh_snapshot() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(APP_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sid": "AP2",
            "friendly_name": "Renamed Meanwhile",
        })))
        .mount(&server)
        .await;

    let instance = ApplicationInstance::from_payload(
        create_test_version(&server),
        json!({"sid": "AP2", "account_sid": "AC1", "friendly_name": "Stale"}),
        "AC1",
        None,
    )
    .unwrap();

    let fresh = instance.fetch().await.unwrap();
    assert_eq!(fresh.friendly_name(), Some("Renamed Meanwhile"));
    // The original snapshot is untouched
    assert_eq!(instance.friendly_name(), Some("Stale"));
}

#[tokio::test]
async fn test_instance_update_delegates_to_proxy() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(APP_PATH))
        .and(body_string("Smsurl=http%3A%2F%2Fexample.com%2Fnew-sms"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sid": "AP2",
            "sms_url": "http://example.com/new-sms",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let instance = ApplicationInstance::from_payload(
        create_test_version(&server),
        sample_payload(),
        "AC1",
        None,
    )
    .unwrap();

    let updated = instance
        .update(ApplicationUpdateParams {
            sms_url: Some("http://example.com/new-sms".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(updated.sms_url(), Some("http://example.com/new-sms"));
}

#[tokio::test]
async fn test_instance_delete_delegates_to_proxy() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(APP_PATH))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let instance = ApplicationInstance::from_payload(
        create_test_version(&server),
        sample_payload(),
        "AC1",
        None,
    )
    .unwrap();

    assert!(instance.delete().await.unwrap());
}

// ============================================================================
// Offline marshaling properties
// ============================================================================

#[test]
fn test_round_trip_every_declared_field() {
    let instance = ApplicationInstance::from_payload(
        offline_version(),
        json!({
            "account_sid": "AC1",
            "api_version": "2010-04-01",
            "friendly_name": "Phone Me",
            "message_status_callback": "http://example.com/msg-status",
            "sid": "AP2",
            "sms_fallback_method": "GET",
            "sms_fallback_url": "http://example.com/sms-fallback",
            "sms_method": "POST",
            "sms_status_callback": "http://example.com/sms-status",
            "sms_url": "http://example.com/sms",
            "status_callback": "http://example.com/status",
            "status_callback_method": "POST",
            "uri": "/2010-04-01/Accounts/AC1/Applications/AP2.json",
            "voice_caller_id_lookup": true,
            "voice_fallback_method": "GET",
            "voice_fallback_url": "http://example.com/voice-fallback",
            "voice_method": "POST",
            "voice_url": "http://example.com/voice",
        }),
        "AC1",
        None,
    )
    .unwrap();

    assert_eq!(instance.account_sid(), Some("AC1"));
    assert_eq!(instance.api_version(), Some("2010-04-01"));
    assert_eq!(instance.friendly_name(), Some("Phone Me"));
    assert_eq!(
        instance.message_status_callback(),
        Some("http://example.com/msg-status")
    );
    assert_eq!(instance.sid(), Some("AP2"));
    assert_eq!(instance.sms_fallback_method(), Some("GET"));
    assert_eq!(
        instance.sms_fallback_url(),
        Some("http://example.com/sms-fallback")
    );
    assert_eq!(instance.sms_method(), Some("POST"));
    assert_eq!(
        instance.sms_status_callback(),
        Some("http://example.com/sms-status")
    );
    assert_eq!(instance.sms_url(), Some("http://example.com/sms"));
    assert_eq!(instance.status_callback(), Some("http://example.com/status"));
    assert_eq!(instance.status_callback_method(), Some("POST"));
    assert_eq!(
        instance.uri(),
        Some("/2010-04-01/Accounts/AC1/Applications/AP2.json")
    );
    assert_eq!(instance.voice_caller_id_lookup(), Some(true));
    assert_eq!(instance.voice_fallback_method(), Some("GET"));
    assert_eq!(
        instance.voice_fallback_url(),
        Some("http://example.com/voice-fallback")
    );
    assert_eq!(instance.voice_method(), Some("POST"));
    assert_eq!(instance.voice_url(), Some("http://example.com/voice"));
}

#[test]
fn test_proxy_identity_stable_across_accesses() {
    let instance = ApplicationInstance::from_payload(
        offline_version(),
        json!({"sid": "AP2"}),
        "AC1",
        None,
    )
    .unwrap();

    assert!(std::ptr::eq(instance.proxy(), instance.proxy()));
}

#[test]
fn test_unknown_payload_fields_are_ignored() {
    let instance = ApplicationInstance::from_payload(
        offline_version(),
        json!({"sid": "AP2", "brand_new_field": "surprise"}),
        "AC1",
        None,
    )
    .unwrap();
    assert_eq!(instance.sid(), Some("AP2"));
}
