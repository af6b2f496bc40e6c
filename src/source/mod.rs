//! Where per-investor holdings come from.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

use futures::future::join_all;

use crate::core::{CacheMode, HoldingRecord, Investor, InvestorId, SecClient, SecError};
use crate::filings::FilingsBuilder;

/// Future returned by [`HoldingsSource::fetch_holdings`].
pub type HoldingsFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Vec<HoldingRecord>, SecError>> + Send + 'a>>;

/// A provider of the latest disclosed holdings for an investor.
///
/// This allows the screening pipeline to run against EDGAR, pre-scraped data, or test doubles.
/// Implementations return only valid records; an empty vector means "no holdings".
pub trait HoldingsSource: Send + Sync {
    /// Fetches the holdings of the investor's most recent disclosure.
    fn fetch_holdings<'a>(&'a self, investor: &'a InvestorId) -> HoldingsFuture<'a>;
}

impl HoldingsSource for SecClient {
    fn fetch_holdings<'a>(&'a self, investor: &'a InvestorId) -> HoldingsFuture<'a> {
        Box::pin(async move {
            let (_, holdings) = FilingsBuilder::new(self, investor.as_str())
                .cache_mode(CacheMode::Use)
                .latest_holdings()
                .await?;
            Ok(holdings)
        })
    }
}

/// Serves holdings that were parsed elsewhere.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    holdings: HashMap<InvestorId, Vec<HoldingRecord>>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the holdings served for `investor`, replacing any earlier set.
    #[must_use]
    pub fn with(mut self, investor: impl Into<InvestorId>, records: Vec<HoldingRecord>) -> Self {
        self.insert(investor, records);
        self
    }

    pub fn insert(&mut self, investor: impl Into<InvestorId>, records: Vec<HoldingRecord>) {
        self.holdings.insert(investor.into(), records);
    }
}

impl HoldingsSource for StaticSource {
    fn fetch_holdings<'a>(&'a self, investor: &'a InvestorId) -> HoldingsFuture<'a> {
        let records = self.holdings.get(investor).cloned().unwrap_or_default();
        Box::pin(async move { Ok(records) })
    }
}

/// Fetches every investor concurrently; results come back in the order of `investors`.
pub async fn fetch_all<S>(
    source: &S,
    investors: &[Investor],
) -> Vec<(InvestorId, Result<Vec<HoldingRecord>, SecError>)>
where
    S: HoldingsSource + ?Sized,
{
    let results = join_all(investors.iter().map(|inv| source.fetch_holdings(&inv.id))).await;
    investors
        .iter()
        .map(|inv| inv.id.clone())
        .zip(results)
        .collect()
}
