use std::time::Duration;

use super::memory::MemoryStore;
use super::types::{CachedAnswer, answer_key};
use super::CacheStore;

fn sample_entry() -> CachedAnswer {
    CachedAnswer::computed("Paris is the capital of France".to_string(), 0.91)
}

#[tokio::test]
async fn test_memory_store_new_is_empty() {
    let store = MemoryStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
}

#[tokio::test]
async fn test_memory_store_miss_on_unknown_key() {
    let store = MemoryStore::new();
    let got = store.get(&answer_key("42")).await.unwrap();
    assert!(got.is_none());
}

#[tokio::test]
async fn test_memory_store_put_then_get() {
    let store = MemoryStore::new();
    let entry = sample_entry();

    store
        .put(&answer_key("42"), &entry, Duration::from_secs(60))
        .await
        .unwrap();

    let got = store.get(&answer_key("42")).await.unwrap();
    assert_eq!(got, Some(entry));
}

#[tokio::test]
async fn test_memory_store_keys_are_independent() {
    let store = MemoryStore::new();
    let entry = sample_entry();

    store
        .put(&answer_key("1"), &entry, Duration::from_secs(60))
        .await
        .unwrap();

    assert!(store.get(&answer_key("2")).await.unwrap().is_none());
    assert!(store.get(&answer_key("1")).await.unwrap().is_some());
}

#[tokio::test]
async fn test_memory_store_entry_expires() {
    let store = MemoryStore::new();
    let entry = sample_entry();
    let key = answer_key("42");

    store
        .put(&key, &entry, Duration::from_millis(30))
        .await
        .unwrap();
    assert!(store.get(&key).await.unwrap().is_some());

    tokio::time::sleep(Duration::from_millis(60)).await;
    assert!(store.get(&key).await.unwrap().is_none());
}

#[tokio::test]
async fn test_memory_store_overwrite_refreshes_entry() {
    let store = MemoryStore::new();
    let key = answer_key("42");

    let first = CachedAnswer::computed("first".to_string(), 0.3);
    let second = CachedAnswer::computed("second".to_string(), 0.7);

    store
        .put(&key, &first, Duration::from_secs(60))
        .await
        .unwrap();
    store
        .put(&key, &second, Duration::from_secs(60))
        .await
        .unwrap();

    let got = store.get(&key).await.unwrap().unwrap();
    assert_eq!(got.answer, "second");
}

#[tokio::test]
async fn test_memory_store_ping_always_up() {
    let store = MemoryStore::new();
    assert!(store.ping().await);
}
