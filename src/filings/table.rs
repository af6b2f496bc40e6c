//! Scraping of the HTML rendering of a 13F information table.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::core::{HoldingRecord, RawHoldingRow};

static ROW: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").expect("static selector"));
static CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td").expect("static selector"));

// Column positions in the rendered table.
const ISSUER_COL: usize = 0;
const CUSIP_COL: usize = 2;
const VALUE_COL: usize = 4;
const MIN_CELLS: usize = 5;

fn cell_text(cell: &ElementRef<'_>) -> String {
    cell.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extracts every table row that has enough cells to carry issuer, CUSIP and value.
///
/// Header and caption rows are returned too; they fail validation in [`HoldingRecord::from_raw`].
pub fn scrape_rows(html: &str) -> Vec<RawHoldingRow> {
    let doc = Html::parse_document(html);
    doc.select(&ROW)
        .filter_map(|tr| {
            let cells: Vec<String> = tr.select(&CELL).map(|td| cell_text(&td)).collect();
            if cells.len() < MIN_CELLS {
                return None;
            }
            Some(RawHoldingRow {
                issuer_name: cells[ISSUER_COL].clone(),
                security_id: cells[CUSIP_COL].clone(),
                market_value: cells[VALUE_COL].clone(),
            })
        })
        .collect()
}

/// Parses an information table page into validated holdings, silently dropping invalid rows.
pub fn parse_information_table(html: &str) -> Vec<HoldingRecord> {
    let raw = scrape_rows(html);
    let records: Vec<HoldingRecord> = raw.iter().filter_map(HoldingRecord::from_raw).collect();

    if std::env::var("SEC_DEBUG").ok().as_deref() == Some("1") {
        eprintln!(
            "SEC_DEBUG [parse_information_table]: rows={} kept={} dropped={}",
            raw.len(),
            records.len(),
            raw.len() - records.len()
        );
        if let Some(first) = records.first() {
            eprintln!(
                "SEC_DEBUG [parse_information_table]: first row issuer=`{}` cusip=`{}` value={}",
                first.issuer_name(),
                first.security_id(),
                first.market_value()
            );
        }
    }
    records
}
