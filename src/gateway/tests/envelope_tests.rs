//! Unit tests for envelope parsing and the protocol response.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for assertion clarity"
)]

use chrono::{TimeZone, Utc};
use rstest::rstest;

use crate::gateway::domain::{InboundEvent, Payload, ProtocolResponse};

#[test]
fn full_envelope_parses_with_optional_fields() {
    let raw = r#"{
        "identity": { "principal": "cust42" },
        "requestContext": {
            "connectionId": "conn1#",
            "domainName": "chat.example.com",
            "stage": "prod"
        },
        "body": {
            "data": {
                "type": "Message",
                "conversationId": "claims-desk",
                "text": "What is my claim status?",
                "sender": "cust42-display",
                "sentAt": "2026-08-27T12:00:00Z"
            }
        }
    }"#;

    let event = InboundEvent::from_json(raw).expect("valid envelope");

    assert_eq!(event.identity().principal(), "cust42");
    assert_eq!(event.request_context().connection_id().as_str(), "conn1#");
    assert_eq!(
        event.request_context().endpoint().to_string(),
        "chat.example.com/prod"
    );

    let Payload::Message(payload) = event.body().data() else {
        panic!("expected a message payload");
    };
    assert_eq!(payload.conversation_id().as_str(), "claims-desk");
    assert_eq!(payload.text(), "What is my claim status?");
    assert_eq!(payload.sender(), Some("cust42-display"));
    assert_eq!(
        payload.sent_at(),
        Some(Utc.with_ymd_and_hms(2026, 8, 27, 12, 0, 0).single().expect("valid timestamp"))
    );
}

#[test]
fn minimal_payload_leaves_sender_and_timestamp_unset() {
    let raw = r#"{
        "identity": { "principal": "cust42" },
        "requestContext": {
            "connectionId": "conn1#",
            "domainName": "chat.example.com",
            "stage": "prod"
        },
        "body": { "data": { "type": "Message", "conversationId": "claims-desk", "text": "hi" } }
    }"#;

    let event = InboundEvent::from_json(raw).expect("valid envelope");
    let Payload::Message(payload) = event.body().data() else {
        panic!("expected a message payload");
    };

    assert_eq!(payload.sender(), None);
    assert_eq!(payload.sent_at(), None);
}

#[test]
fn unknown_payload_type_parses_as_unsupported() {
    let raw = r#"{
        "identity": { "principal": "cust42" },
        "requestContext": {
            "connectionId": "conn1#",
            "domainName": "chat.example.com",
            "stage": "prod"
        },
        "body": { "data": { "type": "Presence" } }
    }"#;

    let event = InboundEvent::from_json(raw).expect("valid envelope");

    assert_eq!(event.body().data(), &Payload::Unsupported);
}

#[test]
fn envelope_missing_request_context_is_rejected() {
    let raw = r#"{
        "identity": { "principal": "cust42" },
        "body": { "data": { "type": "Message", "conversationId": "claims-desk", "text": "hi" } }
    }"#;

    assert!(InboundEvent::from_json(raw).is_err());
}

#[rstest]
#[case::ok(ProtocolResponse::ok(), 200, true)]
#[case::not_found(ProtocolResponse::not_found("no binding"), 404, false)]
#[case::server_error(ProtocolResponse::server_error("store failure"), 500, false)]
fn response_constructors_set_the_status(
    #[case] response: ProtocolResponse,
    #[case] status: u16,
    #[case] success: bool,
) {
    assert_eq!(response.status_code(), status);
    assert_eq!(response.is_success(), success);
}

#[test]
fn success_acknowledgement_has_an_empty_body() {
    assert_eq!(ProtocolResponse::ok().body(), "");
}
