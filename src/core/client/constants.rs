//! Centralized constants for default endpoints and UA.

/// EDGAR rejects anonymous clients; the UA must name the requester and a contact address.
pub(crate) const USER_AGENT: &str = concat!(
    "sec13f-rs/",
    env!("CARGO_PKG_VERSION"),
    " (admin@example.com)"
);

/// EDGAR submissions API base (`CIK##########.json` is appended).
pub(crate) const DEFAULT_BASE_SUBMISSIONS: &str = "https://data.sec.gov/submissions/";

/// EDGAR archive base (`{cik}/{accession}/...` is appended).
pub(crate) const DEFAULT_BASE_ARCHIVES: &str = "https://www.sec.gov/Archives/edgar/data/";

/// Sub-directory holding the HTML rendering of 13F information tables.
pub(crate) const INFO_TABLE_RENDER_DIR: &str = "xslForm13F_X02";
