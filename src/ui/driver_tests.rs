//! Tests for the background loader driver.

use std::time::Duration;

use eframe::egui;
use tokio::runtime::Handle;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::LoaderDriver;
use crate::api::RawgClient;
use crate::config::RawgConfig;
use crate::listing::Listing;
use crate::loader::{FetchState, TriggerMode};
use crate::models::CatalogEntry;

fn entries_json(page: u32, count: u32) -> serde_json::Value {
    let results: Vec<serde_json::Value> = (0..count)
        .map(|i| {
            serde_json::json!({
                "id": page * 1000 + i,
                "name": format!("Tag {page}-{i}"),
                "slug": format!("tag-{page}-{i}"),
                "games_count": i
            })
        })
        .collect();
    serde_json::json!({ "count": 999, "results": results })
}

async fn mount_page(server: &MockServer, page: u32, count: u32) {
    Mock::given(method("GET"))
        .and(path("/tags"))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(entries_json(page, count)))
        .mount(server)
        .await;
}

fn driver_for(server: &MockServer, seed: Option<Vec<CatalogEntry>>) -> LoaderDriver<CatalogEntry> {
    let config = RawgConfig::with_base_url("key", server.uri()).unwrap();
    let client = RawgClient::new(config).unwrap();
    LoaderDriver::new(Listing::Tags, client, Handle::current(), TriggerMode::Level, seed)
}

/// Poll until `expected` results have been applied or give up after a few seconds
async fn settle(driver: &mut LoaderDriver<CatalogEntry>, expected: usize) -> usize {
    let mut applied = 0;
    for _ in 0..100 {
        applied += driver.poll();
        if applied >= expected {
            break;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    applied
}

#[tokio::test(flavor = "multi_thread")]
async fn first_page_is_applied_after_poll() {
    let server = MockServer::start().await;
    mount_page(&server, 1, 40).await;

    let ctx = egui::Context::default();
    let mut driver = driver_for(&server, None);

    driver.ensure_started(&ctx);
    assert!(matches!(driver.loader().state(), FetchState::Loading));

    assert_eq!(settle(&mut driver, 1).await, 1);
    assert_eq!(driver.loader().len(), 40);
    assert!(matches!(driver.loader().state(), FetchState::HasMore));
}

#[tokio::test(flavor = "multi_thread")]
async fn fetch_next_while_in_flight_is_refused() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tags"))
        .and(query_param("page", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(entries_json(1, 40))
                .set_delay(Duration::from_millis(200)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let ctx = egui::Context::default();
    let mut driver = driver_for(&server, None);

    assert!(driver.fetch_next(&ctx));
    for _ in 0..10 {
        assert!(!driver.fetch_next(&ctx));
        driver.observe_sentinel(true, &ctx);
    }

    settle(&mut driver, 1).await;
    assert_eq!(driver.loader().pages().len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn seeded_driver_continues_at_page_two() {
    let server = MockServer::start().await;
    mount_page(&server, 2, 10).await;

    let seed: Vec<CatalogEntry> = serde_json::from_value(entries_json(1, 40)["results"].clone()).unwrap();
    let ctx = egui::Context::default();
    let mut driver = driver_for(&server, Some(seed));

    driver.ensure_started(&ctx);
    assert!(matches!(driver.loader().state(), FetchState::HasMore));

    driver.observe_sentinel(true, &ctx);
    settle(&mut driver, 1).await;

    assert_eq!(driver.loader().len(), 50);
    assert!(matches!(driver.loader().state(), FetchState::Settled));
}

#[tokio::test(flavor = "multi_thread")]
async fn failed_page_can_be_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tags"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_page(&server, 1, 5).await;

    let ctx = egui::Context::default();
    let mut driver = driver_for(&server, None);

    driver.ensure_started(&ctx);
    settle(&mut driver, 1).await;
    assert!(driver.loader().error().is_some());
    assert!(driver.loader().is_empty());

    // an errored listing is not restarted implicitly
    driver.ensure_started(&ctx);
    assert!(!driver.loader().is_fetching());

    assert!(driver.retry(&ctx));
    settle(&mut driver, 1).await;
    assert_eq!(driver.loader().len(), 5);
    assert!(matches!(driver.loader().state(), FetchState::Settled));
}

#[tokio::test(flavor = "multi_thread")]
async fn reset_discards_in_flight_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tags"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(entries_json(1, 40))
                .set_delay(Duration::from_millis(100)),
        )
        .mount(&server)
        .await;

    let ctx = egui::Context::default();
    let mut driver = driver_for(&server, None);

    driver.fetch_next(&ctx);
    driver.reset();

    tokio::time::sleep(Duration::from_millis(400)).await;
    assert_eq!(driver.poll(), 0);
    assert!(driver.loader().is_empty());
    assert!(matches!(driver.loader().state(), FetchState::Idle));
}

#[tokio::test(flavor = "multi_thread")]
async fn hidden_sentinel_does_not_fetch() {
    let server = MockServer::start().await;
    mount_page(&server, 1, 40).await;

    let ctx = egui::Context::default();
    let mut driver = driver_for(&server, None);

    driver.observe_sentinel(false, &ctx);
    assert!(matches!(driver.loader().state(), FetchState::Idle));
}

#[tokio::test(flavor = "multi_thread")]
async fn result_after_drop_is_discarded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tags"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(entries_json(1, 40))
                .set_delay(Duration::from_millis(100)),
        )
        .mount(&server)
        .await;

    let ctx = egui::Context::default();
    let mut driver = driver_for(&server, None);

    let request = driver.loader.begin_fetch_next().unwrap();
    let task = driver.spawn(request, &ctx);
    drop(driver);

    tokio::time::timeout(Duration::from_secs(5), task)
        .await
        .expect("fetch task did not finish")
        .expect("fetch task panicked");
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn dropping_driver_mid_fetch_leaves_runtime_usable() {
    let server = MockServer::start().await;
    mount_page(&server, 1, 40).await;

    let ctx = egui::Context::default();
    let mut driver = driver_for(&server, None);
    assert!(driver.fetch_next(&ctx));
    drop(driver);

    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(server.received_requests().await.unwrap().len(), 1);

    let mut fresh = driver_for(&server, None);
    fresh.ensure_started(&ctx);
    assert_eq!(settle(&mut fresh, 1).await, 1);
    assert_eq!(fresh.loader().len(), 40);
}
