//! End-to-end lookups against a mock scoring service and an on-disk store.

use scorecache::cache::{Outcome, ScoreCache};
use scorecache::client::{ClientConfig, ScoreClient};
use scorecache::clock::ManualClock;
use scorecache::freshness::{FreshnessPolicy, MILLIS_PER_DAY};
use scorecache::storage::{JsonStore, ScoreStore};
use scorecache::types::{Score, ScoreRecord};
use scorecache::ScoreError;
use std::sync::Arc;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const T0: i64 = 1_700_000_000_000;

struct Harness {
    cache: ScoreCache,
    store: Arc<JsonStore>,
    clock: Arc<ManualClock>,
    _dir: TempDir,
}

fn harness(server: &MockServer) -> Harness {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(JsonStore::new(dir.path().join("records")).unwrap());
    let client = ScoreClient::new(ClientConfig::new(server.uri())).unwrap();
    let clock = Arc::new(ManualClock::new(T0));

    let cache = ScoreCache::new(store.clone(), Arc::new(client), FreshnessPolicy::default())
        .with_clock(clock.clone());

    Harness {
        cache,
        store,
        clock,
        _dir: dir,
    }
}

fn score(v: u16) -> Score {
    Score::new(v).unwrap()
}

async fn mount_score(server: &MockServer, domain: &str, value: u16, times: u64) {
    Mock::given(method("GET"))
        .and(path("/score"))
        .and(query_param("q", domain))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "score": value })),
        )
        .up_to_n_times(times)
        .expect(times)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_fetch_then_cached_then_stale() {
    let server = MockServer::start().await;
    let h = harness(&server);

    mount_score(&server, "example.com", 700, 1).await;

    let (domain, first) = h
        .cache
        .lookup_url("https://www.example.com/index.html")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(domain, "example.com");
    assert_eq!(first, Outcome::Fetched(ScoreRecord::scored(score(700), None, T0)));

    h.clock.advance(29 * MILLIS_PER_DAY);
    let second = h.cache.lookup("example.com").await.unwrap();
    assert_eq!(second, Outcome::Cached(ScoreRecord::scored(score(700), None, T0)));

    // The first mock is exhausted; the stale lookup hits this one.
    mount_score(&server, "example.com", 750, 1).await;
    h.clock.set(T0 + 30 * MILLIS_PER_DAY);
    let t1 = T0 + 30 * MILLIS_PER_DAY;

    let third = h.cache.lookup("example.com").await.unwrap();
    assert_eq!(
        third,
        Outcome::Fetched(ScoreRecord::scored(score(750), Some(score(700)), t1))
    );

    let stored = h.store.get("example.com").await.unwrap().unwrap();
    assert_eq!(stored, ScoreRecord::scored(score(750), Some(score(700)), t1));
}

#[tokio::test]
async fn test_not_found_persisted_for_one_day() {
    let server = MockServer::start().await;
    let h = harness(&server);

    Mock::given(method("GET"))
        .and(path("/score"))
        .respond_with(ResponseTemplate::new(404))
        .expect(2)
        .mount(&server)
        .await;

    let first = h.cache.lookup("unknown.org").await.unwrap();
    assert_eq!(first, Outcome::NotFoundPersisted(ScoreRecord::not_found(T0)));
    assert_eq!(
        h.store.get("unknown.org").await.unwrap(),
        Some(ScoreRecord::not_found(T0))
    );

    h.clock.advance(MILLIS_PER_DAY - 1);
    assert!(matches!(
        h.cache.lookup("unknown.org").await.unwrap(),
        Outcome::Cached(_)
    ));

    h.clock.advance(1);
    assert!(matches!(
        h.cache.lookup("unknown.org").await.unwrap(),
        Outcome::NotFoundPersisted(_)
    ));
}

#[tokio::test]
async fn test_server_error_leaves_store_untouched() {
    let server = MockServer::start().await;
    let h = harness(&server);

    let existing = ScoreRecord::scored(score(680), None, T0 - 31 * MILLIS_PER_DAY);
    h.store.set("example.co.uk", &existing).await.unwrap();

    Mock::given(method("GET"))
        .and(path("/score"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = h
        .cache
        .lookup_url("https://shop.example.co.uk/basket")
        .await
        .unwrap_err();
    assert!(matches!(err, ScoreError::RemoteFetch { status: Some(500), .. }));

    assert_eq!(h.store.get("example.co.uk").await.unwrap(), Some(existing));
}

#[tokio::test]
async fn test_empty_payload_is_not_found() {
    let server = MockServer::start().await;
    let h = harness(&server);

    Mock::given(method("GET"))
        .and(path("/score"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "score": null })))
        .mount(&server)
        .await;

    let outcome = h.cache.lookup("example.net").await.unwrap();
    assert_eq!(outcome, Outcome::NotFoundPersisted(ScoreRecord::not_found(T0)));
}

#[tokio::test]
async fn test_concurrent_lookups_fetch_once() {
    let server = MockServer::start().await;
    let h = harness(&server);

    Mock::given(method("GET"))
        .and(path("/score"))
        .and(query_param("q", "example.com"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "score": 720 }))
                .set_delay(std::time::Duration::from_millis(50)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let cache = Arc::new(h.cache);
    let lookups = (0..5).map(|_| {
        let cache = Arc::clone(&cache);
        tokio::spawn(async move { cache.lookup("example.com").await })
    });

    let mut fetched = 0;
    for handle in lookups.collect::<Vec<_>>() {
        if handle.await.unwrap().unwrap().was_fetched() {
            fetched += 1;
        }
    }
    assert_eq!(fetched, 1);
}

#[tokio::test]
async fn test_unparsable_url_is_skipped() {
    let server = MockServer::start().await;
    let h = harness(&server);

    assert!(h.cache.lookup_url("http://").await.unwrap().is_none());
    assert!(h.cache.request_review("about:blank").await.unwrap().is_none());
}
