use serde::Deserialize;

/* ----- data.sec.gov/submissions/CIK##########.json ----- */

#[derive(Deserialize)]
pub(crate) struct SubmissionsEnvelope {
    pub(crate) name: Option<String>,
    pub(crate) filings: Option<FilingsNode>,
}

#[derive(Deserialize)]
pub(crate) struct FilingsNode {
    pub(crate) recent: Option<RecentFilingsNode>,
}

// Column-oriented: the i-th entry of every vector describes the i-th filing, newest first.
#[derive(Deserialize)]
pub(crate) struct RecentFilingsNode {
    #[serde(rename = "accessionNumber", default)]
    pub(crate) accession_number: Vec<String>,
    #[serde(rename = "filingDate", default)]
    pub(crate) filing_date: Vec<String>,
    #[serde(rename = "reportDate", default)]
    pub(crate) report_date: Vec<String>,
    #[serde(default)]
    pub(crate) form: Vec<String>,
}

/* ----- Archives/edgar/data/{cik}/{accession}/index.json ----- */

#[derive(Deserialize)]
pub(crate) struct IndexEnvelope {
    pub(crate) directory: Option<DirectoryNode>,
}

#[derive(Deserialize)]
pub(crate) struct DirectoryNode {
    #[serde(default)]
    pub(crate) item: Vec<DirectoryItemNode>,
}

#[derive(Deserialize)]
pub(crate) struct DirectoryItemNode {
    pub(crate) name: Option<String>,
}
