use std::time::Duration;

use httpmock::MockServer;
use sec13f_rs::{CacheMode, FilingsBuilder, SecClient};
use url::Url;

use crate::common::{client_for, mock_submissions};

fn cached_client(server: &MockServer) -> SecClient {
    SecClient::builder()
        .base_submissions(Url::parse(&format!("{}/submissions/", server.base_url())).unwrap())
        .base_archives(Url::parse(&format!("{}/Archives/edgar/data/", server.base_url())).unwrap())
        .cache_ttl(Duration::from_secs(60))
        .build()
        .unwrap()
}

#[tokio::test]
async fn cache_serves_repeated_lookups() {
    let server = MockServer::start();
    let mock = mock_submissions(&server, "1466153");
    let client = cached_client(&server);
    assert!(client.cache_enabled());

    let first = FilingsBuilder::new(&client, "1466153").latest_filing().await.unwrap();
    let second = FilingsBuilder::new(&client, "1466153").latest_filing().await.unwrap();

    assert_eq!(first, second);
    mock.assert_hits(1);
}

#[tokio::test]
async fn refresh_and_bypass_hit_the_network() {
    let server = MockServer::start();
    let mock = mock_submissions(&server, "1466153");
    let client = cached_client(&server);

    FilingsBuilder::new(&client, "1466153").latest_filing().await.unwrap();
    FilingsBuilder::new(&client, "1466153")
        .cache_mode(CacheMode::Refresh)
        .latest_filing()
        .await
        .unwrap();
    FilingsBuilder::new(&client, "1466153")
        .cache_mode(CacheMode::Bypass)
        .latest_filing()
        .await
        .unwrap();
    mock.assert_hits(3);

    client.clear_cache().await;
    FilingsBuilder::new(&client, "1466153").latest_filing().await.unwrap();
    mock.assert_hits(4);
}

#[tokio::test]
async fn uncached_client_always_fetches() {
    let server = MockServer::start();
    let mock = mock_submissions(&server, "1466153");
    let client = client_for(&server);
    assert!(!client.cache_enabled());

    FilingsBuilder::new(&client, "1466153").latest_filing().await.unwrap();
    FilingsBuilder::new(&client, "1466153").latest_filing().await.unwrap();
    mock.assert_hits(2);
}
