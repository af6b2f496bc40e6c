use chrono::NaiveDate;
use url::Url;

use super::model::{FORM_13F_HR, FilingRef};
use super::table;
use super::wire::{IndexEnvelope, SubmissionsEnvelope};
use crate::core::{
    CacheMode, HoldingRecord, SecClient, SecError,
    client::INFO_TABLE_RENDER_DIR,
    net,
};

const PRIMARY_DOC: &str = "primary_doc.xml";

/// Accepts `"1466153"`, `"0001466153"` or `"CIK0001466153"`.
fn normalize_cik(cik: &str) -> Result<u64, SecError> {
    let t = cik.trim();
    let t = t.strip_prefix("CIK").unwrap_or(t);
    t.parse::<u64>()
        .map_err(|_| SecError::InvalidParams(format!("invalid CIK: {cik}")))
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

fn is_information_table(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    lower.ends_with(".xml") && lower != PRIMARY_DOC
}

async fn fetch_text(
    client: &SecClient,
    url: &Url,
    endpoint: &str,
    key: &str,
    ext: &str,
    cache_mode: CacheMode,
) -> Result<String, SecError> {
    if cache_mode == CacheMode::Use
        && let Some(text) = client.cache_get(url).await
    {
        return Ok(text);
    }

    let resp = client.get(url).await?;
    let text = net::get_text(resp, endpoint, key, ext).await?;

    if cache_mode != CacheMode::Bypass {
        client.cache_put(url, &text, None).await;
    }
    Ok(text)
}

pub(super) async fn latest_filing(
    client: &SecClient,
    cik: &str,
    cache_mode: CacheMode,
) -> Result<FilingRef, SecError> {
    let cik = normalize_cik(cik)?;
    let url = client.base_submissions().join(&format!("CIK{cik:010}.json"))?;
    let text = fetch_text(client, &url, "submissions", &cik.to_string(), "json", cache_mode).await?;

    let env: SubmissionsEnvelope = serde_json::from_str(&text)
        .map_err(|e| SecError::Data(format!("submissions json parse: {e}")))?;
    let recent = env
        .filings
        .and_then(|f| f.recent)
        .ok_or_else(|| SecError::Data("filings.recent missing".into()))?;

    let idx = recent
        .form
        .iter()
        .position(|f| f == FORM_13F_HR)
        .ok_or_else(|| SecError::NotFound(format!("no {FORM_13F_HR} filing for CIK {cik}")))?;

    let accession_number = recent
        .accession_number
        .get(idx)
        .cloned()
        .ok_or_else(|| SecError::Data(format!("accessionNumber missing at index {idx}")))?;
    let filing_date = recent
        .filing_date
        .get(idx)
        .and_then(|d| parse_date(d))
        .ok_or_else(|| SecError::Data(format!("filingDate missing at index {idx}")))?;
    let report_date = recent.report_date.get(idx).and_then(|d| parse_date(d));

    Ok(FilingRef {
        cik: cik.to_string(),
        filer_name: env.name,
        accession_number,
        form: FORM_13F_HR.to_string(),
        filing_date,
        report_date,
    })
}

pub(super) async fn information_table_url(
    client: &SecClient,
    filing: &FilingRef,
    cache_mode: CacheMode,
) -> Result<Url, SecError> {
    let accession = filing.accession_path();
    let dir = client
        .base_archives()
        .join(&format!("{}/{}/", filing.cik, accession))?;
    let index_url = dir.join("index.json")?;
    let text = fetch_text(client, &index_url, "index", &accession, "json", cache_mode).await?;

    let env: IndexEnvelope = serde_json::from_str(&text)
        .map_err(|e| SecError::Data(format!("filing index json parse: {e}")))?;
    let name = env
        .directory
        .map(|d| d.item)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|item| item.name)
        .find(|name| is_information_table(name))
        .ok_or_else(|| {
            SecError::NotFound(format!(
                "no information table in filing {}",
                filing.accession_number
            ))
        })?;

    Ok(dir.join(&format!("{INFO_TABLE_RENDER_DIR}/{name}"))?)
}

pub(super) async fn filing_holdings(
    client: &SecClient,
    filing: &FilingRef,
    cache_mode: CacheMode,
) -> Result<Vec<HoldingRecord>, SecError> {
    let url = information_table_url(client, filing, cache_mode).await?;
    let html = fetch_text(
        client,
        &url,
        "infotable",
        &filing.accession_path(),
        "html",
        cache_mode,
    )
    .await?;
    Ok(table::parse_information_table(&html))
}

pub(super) async fn latest_holdings(
    client: &SecClient,
    cik: &str,
    cache_mode: CacheMode,
) -> Result<(FilingRef, Vec<HoldingRecord>), SecError> {
    let filing = latest_filing(client, cik, cache_mode).await?;
    let holdings = filing_holdings(client, &filing, cache_mode).await?;
    Ok((filing, holdings))
}
