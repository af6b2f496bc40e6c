use rust_decimal_macros::dec;
use sec13f_rs::source::HoldingsFuture;
use sec13f_rs::{
    HoldingRecord, HoldingsSource, InvestorId, ScreenConfig, SecError, StaticSource, screen_source,
};

use crate::common::rec;

/// Fails for one investor and delegates the rest.
struct FlakySource {
    failing: InvestorId,
    inner: StaticSource,
}

impl HoldingsSource for FlakySource {
    fn fetch_holdings<'a>(&'a self, investor: &'a InvestorId) -> HoldingsFuture<'a> {
        if investor == &self.failing {
            return Box::pin(async {
                Err::<Vec<HoldingRecord>, _>(SecError::Status {
                    status: 503,
                    url: "https://data.sec.gov/submissions/CIK0000000003.json".into(),
                })
            });
        }
        self.inner.fetch_holdings(investor)
    }
}

#[tokio::test]
async fn failed_fetch_screens_investor_as_empty() {
    let source = FlakySource {
        failing: "C".into(),
        inner: StaticSource::new()
            .with("A", vec![rec("S1", "S1", 100)])
            .with("B", vec![rec("S1", "S1", 300)])
            .with("C", vec![rec("S1", "S1", 1_000_000)]),
    };
    let config = ScreenConfig::builder()
        .investor("A", "Alpha")
        .investor("B", "Beta")
        .investor("C", "Gamma")
        .build()
        .unwrap();

    let outcome = screen_source(&source, &config).await.unwrap();

    assert_eq!(outcome.fetch_failures.len(), 1);
    let failure = &outcome.fetch_failures[0];
    assert_eq!(failure.investor.as_str(), "C");
    assert!(failure.error.contains("503"), "error text: {}", failure.error);

    let row = outcome.report.row("S1").unwrap();
    assert_eq!(row.purchase_count, 2);
    assert_eq!(row.total_value, dec!(400));
    assert!(row.metrics_for(&"C".into()).is_none());
    assert_eq!(row.metrics_for(&"A".into()).unwrap().inter_pct, dec!(25));

    let columns = outcome.report.columns();
    assert!(!columns.iter().any(|c| c.starts_with("Gamma")));
}

#[tokio::test]
async fn every_fetch_failing_still_yields_a_report() {
    let source = FlakySource {
        failing: "A".into(),
        inner: StaticSource::new(),
    };
    let config = ScreenConfig::builder()
        .investor("A", "Alpha")
        .investor("B", "Beta")
        .build()
        .unwrap();

    let outcome = screen_source(&source, &config).await.unwrap();
    assert_eq!(outcome.fetch_failures.len(), 1);
    assert!(outcome.report.is_empty());
    assert_eq!(outcome.report.columns().len(), 4);
}
