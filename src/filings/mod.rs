mod api;
mod model;
mod table;
mod wire;

pub use model::{FORM_13F_HR, FilingRef};
pub use table::{parse_information_table, scrape_rows};

use crate::core::{CacheMode, HoldingRecord, SecClient, SecError};

/// A builder for fetching 13F-HR data for a single filer.
///
/// # Example
///
/// ```no_run
/// # use sec13f_rs::{FilingsBuilder, SecClient};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = SecClient::builder().user_agent("Example Research admin@example.com").build()?;
/// let (filing, holdings) = FilingsBuilder::new(&client, "1466153").latest_holdings().await?;
/// println!("{} holds {} positions as of {:?}", filing.cik, holdings.len(), filing.report_date);
/// # Ok(())
/// # }
/// ```
pub struct FilingsBuilder {
    client: SecClient,
    cik: String,
    cache_mode: CacheMode,
}

impl FilingsBuilder {
    /// Creates a new `FilingsBuilder` for a given CIK.
    pub fn new(client: &SecClient, cik: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            cik: cik.into(),
            cache_mode: CacheMode::Use,
        }
    }

    /// Sets the cache mode for this specific API call.
    #[must_use]
    pub const fn cache_mode(mut self, mode: CacheMode) -> Self {
        self.cache_mode = mode;
        self
    }

    /// Finds the most recent 13F-HR filing in the filer's submission history.
    ///
    /// # Errors
    ///
    /// Returns [`SecError::NotFound`] if the filer has no 13F-HR in its recent filings.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(cik = %self.cik)))]
    pub async fn latest_filing(&self) -> Result<FilingRef, SecError> {
        api::latest_filing(&self.client, &self.cik, self.cache_mode).await
    }

    /// Fetches and parses the information table of a specific filing.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, filing), err, fields(accession = %filing.accession_number)))]
    pub async fn holdings_for(&self, filing: &FilingRef) -> Result<Vec<HoldingRecord>, SecError> {
        api::filing_holdings(&self.client, filing, self.cache_mode).await
    }

    /// Fetches the latest 13F-HR filing and its parsed holdings.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(cik = %self.cik)))]
    pub async fn latest_holdings(&self) -> Result<(FilingRef, Vec<HoldingRecord>), SecError> {
        api::latest_holdings(&self.client, &self.cik, self.cache_mode).await
    }
}
