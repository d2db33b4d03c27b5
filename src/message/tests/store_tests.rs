//! Unit tests for the in-memory message store.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for assertion clarity"
)]

use crate::message::{
    adapters::memory::InMemoryMessageStore,
    domain::{ConversationId, Message, Sender},
    ports::store::{MessageStore, StoreError},
};
use chrono::{TimeZone, Utc};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn store() -> InMemoryMessageStore {
    InMemoryMessageStore::new()
}

fn conversation() -> ConversationId {
    ConversationId::new("claims-desk")
}

fn turn_at(second: u32, text: &str) -> Message {
    let sent_at = Utc
        .with_ymd_and_hms(2024, 5, 4, 12, 0, second)
        .single()
        .expect("valid timestamp");
    Message::user_turn(
        conversation(),
        Sender::user("cust42"),
        text,
        Some(sent_at),
        &DefaultClock,
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn put_and_query_by_conversation(store: InMemoryMessageStore) {
    let turn = turn_at(0, "hello");
    store.put(&turn).await.expect("put should succeed");

    let records = store
        .find_by_conversation(&conversation())
        .await
        .expect("query should succeed");

    assert_eq!(records, vec![turn]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_identifier_is_rejected(store: InMemoryMessageStore) {
    let turn = turn_at(0, "hello");
    store.put(&turn).await.expect("first put should succeed");

    let duplicate = store.put(&turn).await;

    assert!(matches!(duplicate, Err(StoreError::Duplicate(id)) if id == turn.message_id()));
    assert_eq!(store.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn records_sort_by_timestamp(store: InMemoryMessageStore) {
    let later = turn_at(30, "second");
    let earlier = turn_at(10, "first");
    store.put(&later).await.expect("put should succeed");
    store.put(&earlier).await.expect("put should succeed");

    let records = store
        .find_by_conversation(&conversation())
        .await
        .expect("query should succeed");

    let texts: Vec<&str> = records.iter().map(Message::text).collect();
    assert_eq!(texts, vec!["first", "second"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn equal_timestamps_keep_insertion_order(store: InMemoryMessageStore) {
    let first = turn_at(5, "first in");
    let second = turn_at(5, "second in");
    store.put(&first).await.expect("put should succeed");
    store.put(&second).await.expect("put should succeed");

    let records = store
        .find_by_conversation(&conversation())
        .await
        .expect("query should succeed");

    let texts: Vec<&str> = records.iter().map(Message::text).collect();
    assert_eq!(texts, vec!["first in", "second in"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_conversation_yields_empty_history(store: InMemoryMessageStore) {
    let records = store
        .find_by_conversation(&ConversationId::new("nowhere"))
        .await
        .expect("query should succeed");

    assert!(records.is_empty());
    assert!(store.is_empty());
}
