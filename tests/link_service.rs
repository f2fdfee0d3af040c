mod common;

use common::InMemoryStore;
use redis_shortener::LinkService;
use redis_shortener::domain::error::ErrorKind;
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

#[tokio::test]
async fn test_end_to_end_example() {
    let service = LinkService::new(InMemoryStore::new());

    let code = service.shorten("https://www.baidu.com", 60).await.unwrap();
    assert!(redis_shortener::utils::base62::is_valid_code(&code));

    assert_eq!(service.unshorten(&code).await.unwrap(), "https://www.baidu.com");

    let detail = service.shortlink_info(&code).await.unwrap();
    assert_eq!(detail.url, "https://www.baidu.com");
    assert_eq!(detail.expiration_in_minutes, 60);
}

#[tokio::test]
async fn test_unknown_code_is_not_found() {
    let service = LinkService::new(InMemoryStore::new());

    let err = service.unshorten("doesNotExist").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err = service.shortlink_info("doesNotExist").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_distinct_urls_get_distinct_codes() {
    let service = Arc::new(LinkService::new(InMemoryStore::new()));

    let handles: Vec<_> = (0..200)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move {
                let url = format!("https://example.com/{i}");
                let code = service.shorten(&url, 60).await.unwrap();
                (url, code)
            })
        })
        .collect();

    let mut codes = HashSet::new();
    for handle in handles {
        let (url, code) = handle.await.unwrap();
        assert_eq!(service.unshorten(&code).await.unwrap(), url);
        codes.insert(code);
    }

    assert_eq!(codes.len(), 200);
}

#[tokio::test]
async fn test_dedup_does_not_allocate_or_write() {
    let store = InMemoryStore::new();
    let service = LinkService::new(store.clone());

    let first = service.shorten("https://example.com", 10).await.unwrap();
    let writes = store.set_calls.load(Ordering::SeqCst);
    let second = service.shorten("https://example.com", 10).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(store.set_calls.load(Ordering::SeqCst), writes);
    assert_eq!(store.raw("next.url.id").as_deref(), Some("1"));
}

#[tokio::test]
async fn test_dedup_lookup_failure_allocates_new_code() {
    let store = InMemoryStore::new();
    let service = LinkService::new(store.clone());

    let first = service.shorten("https://example.com", 10).await.unwrap();
    store.set_fail_gets(true);
    let second = service.shorten("https://example.com", 10).await.unwrap();

    assert_ne!(first, second);
}

#[tokio::test(start_paused = true)]
async fn test_records_expire_after_ttl() {
    let service = LinkService::new(InMemoryStore::new());

    let code = service.shorten("https://example.com", 1).await.unwrap();
    assert_eq!(service.unshorten(&code).await.unwrap(), "https://example.com");

    tokio::time::advance(Duration::from_secs(59)).await;
    assert!(service.unshorten(&code).await.is_ok());

    tokio::time::advance(Duration::from_secs(2)).await;
    let err = service.unshorten(&code).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err = service.shortlink_info(&code).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test(start_paused = true)]
async fn test_expired_mapping_is_not_reused() {
    let service = LinkService::new(InMemoryStore::new());

    let first = service.shorten("https://example.com", 1).await.unwrap();
    tokio::time::advance(Duration::from_secs(61)).await;
    let second = service.shorten("https://example.com", 1).await.unwrap();

    assert_ne!(first, second);
    assert_eq!(service.unshorten(&second).await.unwrap(), "https://example.com");
}

#[tokio::test]
async fn test_codes_are_never_reused() {
    let store = InMemoryStore::new();
    let service = LinkService::new(store.clone());

    let mut seen = HashSet::new();
    for i in 0..100 {
        let code = service
            .shorten(&format!("https://example.com/{i}"), 1)
            .await
            .unwrap();
        assert!(seen.insert(code));
    }
    assert_eq!(store.raw("next.url.id").as_deref(), Some("100"));
}

#[tokio::test]
async fn test_backend_outage_is_unclassified() {
    let store = InMemoryStore::new();
    let service = LinkService::new(store.clone());
    store.set_unavailable(true);

    let err = service.shorten("https://example.com", 1).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BackendUnavailable);
    assert!(!err.is_classified());

    let err = service.unshorten("abc").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BackendUnavailable);
}
