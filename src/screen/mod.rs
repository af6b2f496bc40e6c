//! Cross-investor overlap and concentration screening.
//!
//! The pipeline runs in two explicit stages so that no percentage is ever derived from a
//! partial sum:
//!
//! 1. [`Aggregator`] folds every investor's holdings into an immutable [`Accumulation`].
//! 2. [`ConcentrationTable::derive`] reads the finished accumulation and [`rank`] turns it into a
//!    [`TopHoldingsReport`](crate::report::TopHoldingsReport).

mod aggregate;
mod concentration;
mod config;
mod rank;

pub use aggregate::{Accumulation, Aggregator, SecurityAccumulator, aggregate};
pub use concentration::{Concentration, ConcentrationTable, percent_of};
pub use config::{DEFAULT_TOP_N, ScreenConfig, ScreenConfigBuilder};
pub use rank::rank;

use std::collections::HashMap;

use serde::Serialize;

use crate::core::{HoldingRecord, InvestorId, SecError};
use crate::report::TopHoldingsReport;
use crate::source::{HoldingsSource, fetch_all};

/// An investor whose holdings could not be fetched and was screened with zero holdings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchFailure {
    pub investor: InvestorId,
    pub error: String,
}

/// Result of [`screen_source`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenOutcome {
    pub report: TopHoldingsReport,
    pub fetch_failures: Vec<FetchFailure>,
}

/// Runs the full pipeline over holdings that are already in memory.
///
/// # Errors
///
/// Only fails on an inconsistent config; data problems degrade to zero values.
pub fn screen(
    config: &ScreenConfig,
    holdings: &HashMap<InvestorId, Vec<HoldingRecord>>,
) -> Result<TopHoldingsReport, SecError> {
    let accumulation = aggregate(config, holdings)?;
    let table = ConcentrationTable::derive(&accumulation);
    Ok(rank(&table, config.top_n()))
}

/// Fetches every configured investor from `source` and screens the results.
///
/// A failed fetch does not abort the run: the investor is screened with zero holdings and
/// the failure is listed in [`ScreenOutcome::fetch_failures`].
#[cfg_attr(feature = "tracing", tracing::instrument(skip(source, config), fields(investors = config.investors().len())))]
pub async fn screen_source<S>(source: &S, config: &ScreenConfig) -> Result<ScreenOutcome, SecError>
where
    S: HoldingsSource + ?Sized,
{
    let mut holdings = HashMap::new();
    let mut fetch_failures = Vec::new();

    for (investor, result) in fetch_all(source, config.investors()).await {
        match result {
            Ok(records) => {
                holdings.insert(investor, records);
            }
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(investor = %investor, error = %e, "holdings fetch failed; using zero holdings");
                fetch_failures.push(FetchFailure {
                    investor,
                    error: e.to_string(),
                });
            }
        }
    }

    let report = screen(config, &holdings)?;
    Ok(ScreenOutcome {
        report,
        fetch_failures,
    })
}
