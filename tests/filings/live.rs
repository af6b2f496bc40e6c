use sec13f_rs::{FilingsBuilder, SecClient};

#[tokio::test]
#[ignore]
async fn live_latest_holdings_smoke() {
    if std::env::var("SEC_LIVE").ok().as_deref() != Some("1") {
        return;
    }

    let ua = std::env::var("SEC_USER_AGENT")
        .unwrap_or_else(|_| "sec13f-rs live test admin@example.com".to_string());
    let client = SecClient::builder().user_agent(ua).build().unwrap();

    // Two Sigma files a large 13F every quarter.
    let (filing, holdings) = FilingsBuilder::new(&client, "1466153")
        .latest_holdings()
        .await
        .unwrap();

    assert_eq!(filing.form, "13F-HR");
    assert!(!holdings.is_empty(), "expected holdings in the latest 13F-HR");
    assert!(holdings.iter().all(|h| !h.security_id().is_empty()));
}
