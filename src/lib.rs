//! sec13f-rs: cross-institution overlap screening over SEC 13F-HR holdings.
//!
//! Fetch the latest 13F-HR information table for each tracked institution, then rank the
//! securities they hold in common by how concentrated each position is, both inside each
//! institution's own book and across the tracked set.
//!
//! ```no_run
//! # use sec13f_rs::{ScreenConfig, SecClient, screen_source};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SecClient::builder()
//!     .user_agent("Example Research admin@example.com")
//!     .build()?;
//! let config = ScreenConfig::builder()
//!     .investor("1466153", "Two Sigma")
//!     .investor("860561", "Spyglass Capital")
//!     .investor("1654344", "TCI Fund Management")
//!     .build()?;
//!
//! let outcome = screen_source(&client, &config).await?;
//! outcome.report.write_csv(std::fs::File::create("filtered_top_holdings.csv")?)?;
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod filings;
pub mod report;
pub mod screen;
pub mod source;

pub use crate::core::{
    CacheMode, HoldingRecord, Investor, InvestorId, RawHoldingRow, SecClient, SecClientBuilder,
    SecError, parse_market_value,
};
pub use filings::{FilingRef, FilingsBuilder, parse_information_table};
pub use report::{CsvEmitter, InvestorMetrics, ReportEmitter, ReportRow, TopHoldingsReport};
pub use screen::{
    Accumulation, Aggregator, Concentration, ConcentrationTable, FetchFailure, ScreenConfig,
    ScreenOutcome, screen, screen_source,
};
pub use source::{HoldingsSource, StaticSource};

#[cfg(feature = "dataframe")]
pub use crate::core::dataframe::ToDataFrame;
