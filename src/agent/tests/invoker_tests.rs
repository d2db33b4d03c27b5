//! Unit tests for the streaming agent invoker.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for assertion clarity"
)]

use std::sync::Arc;
use std::time::Duration;

use rstest::{fixture, rstest};

use crate::agent::{
    adapters::memory::{ScriptedAgentConnector, SessionScript},
    domain::{AgentBinding, SessionKey},
    ports::connector::AgentInvocationError,
    services::AgentInvoker,
};
use crate::delivery::domain::ConnectionId;

type TestInvoker = AgentInvoker<ScriptedAgentConnector>;

#[fixture]
fn connector() -> ScriptedAgentConnector {
    ScriptedAgentConnector::new()
}

fn invoker_over(connector: &ScriptedAgentConnector) -> TestInvoker {
    AgentInvoker::new(Arc::new(connector.clone()), Duration::from_secs(5))
}

fn binding() -> AgentBinding {
    AgentBinding::new("AGT12345", "ALIAS01").expect("valid binding")
}

fn session() -> SessionKey {
    SessionKey::derive(&ConnectionId::new("conn1#"), "cust42")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn chunks_are_reassembled_in_arrival_order(connector: ScriptedAgentConnector) {
    connector.script(SessionScript::reply(&["Your ", "claim is approved."]));

    let reply = invoker_over(&connector)
        .invoke(&binding(), &session(), "What is my claim status?")
        .await
        .expect("invocation should succeed");

    assert_eq!(reply, "Your claim is approved.");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_stream_yields_empty_string(connector: ScriptedAgentConnector) {
    connector.script(SessionScript::Reply(Vec::new()));

    let reply = invoker_over(&connector)
        .invoke(&binding(), &session(), "hello")
        .await
        .expect("invocation should succeed");

    assert_eq!(reply, "");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn multibyte_sequence_split_across_chunks_decodes_correctly(
    connector: ScriptedAgentConnector,
) {
    // "é" is 0xC3 0xA9; split it across the chunk boundary.
    connector.script(SessionScript::Reply(vec![
        vec![b'r', b'\xc3'],
        vec![b'\xa9', b'p', b'o', b'n', b's', b'e'],
    ]));

    let reply = invoker_over(&connector)
        .invoke(&binding(), &session(), "hello")
        .await
        .expect("invocation should succeed");

    assert_eq!(reply, "réponse");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn invalid_utf8_reply_is_an_error(connector: ScriptedAgentConnector) {
    connector.script(SessionScript::Reply(vec![vec![0xff, 0xfe]]));

    let result = invoker_over(&connector)
        .invoke(&binding(), &session(), "hello")
        .await;

    assert!(matches!(result, Err(AgentInvocationError::InvalidUtf8(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn open_failure_is_surfaced(connector: ScriptedAgentConnector) {
    connector.script(SessionScript::OpenFailure(
        AgentInvocationError::session_open(std::io::Error::other("service unavailable")),
    ));

    let result = invoker_over(&connector)
        .invoke(&binding(), &session(), "hello")
        .await;

    assert!(matches!(result, Err(AgentInvocationError::SessionOpen(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn mid_stream_failure_is_surfaced(connector: ScriptedAgentConnector) {
    connector.script(SessionScript::ChunkFailure {
        leading: vec![b"partial ".to_vec()],
        error: AgentInvocationError::stream(std::io::Error::other("stream reset")),
    });

    let result = invoker_over(&connector)
        .invoke(&binding(), &session(), "hello")
        .await;

    assert!(matches!(result, Err(AgentInvocationError::Stream(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stalled_stream_times_out(connector: ScriptedAgentConnector) {
    connector.script(SessionScript::Stall);
    let invoker = AgentInvoker::new(Arc::new(connector.clone()), Duration::from_millis(20));

    let result = invoker.invoke(&binding(), &session(), "hello").await;

    assert!(matches!(result, Err(AgentInvocationError::Timeout(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn request_carries_the_derived_session_key(connector: ScriptedAgentConnector) {
    connector.script(SessionScript::reply(&["ok"]));
    let key = session();

    invoker_over(&connector)
        .invoke(&binding(), &key, "hello")
        .await
        .expect("invocation should succeed");

    let requests = connector.recorded_requests();
    assert_eq!(requests.len(), 1);
    let request = requests.first().expect("one request");
    assert_eq!(request.session_id(), key.as_str());
    assert!(!request.ends_session());
}
