use chrono::NaiveDate;
use serde::Serialize;

/// Form type of a quarterly institutional holdings report.
pub const FORM_13F_HR: &str = "13F-HR";

/// A reference to one filing in a filer's EDGAR history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilingRef {
    /// The filer's CIK without leading zeros.
    pub cik: String,
    /// The filer's registered name, when the submissions feed reports one.
    pub filer_name: Option<String>,
    /// The accession number in its dashed form (e.g. `0001466153-24-000004`).
    pub accession_number: String,
    /// The form type (e.g. `13F-HR`).
    pub form: String,
    /// The date the filing was accepted.
    pub filing_date: NaiveDate,
    /// The end of the reporting period, if present.
    pub report_date: Option<NaiveDate>,
}

impl FilingRef {
    /// Accession number as used in archive paths (dashes removed).
    pub fn accession_path(&self) -> String {
        self.accession_number.replace('-', "")
    }
}
