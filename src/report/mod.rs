//! The top-holdings report and its tabular view.

mod emit;

#[cfg(feature = "dataframe")]
mod dataframe;

pub use emit::{CsvEmitter, ReportEmitter};

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::{Investor, InvestorId};

pub const COL_HOLDING_NAME: &str = "Holding name";
pub const COL_PURCHASE_COUNT: &str = "Number of times purchased";
pub const COL_TOTAL_VALUE: &str = "Sum of Market Values";
pub const COL_SECURITY_ID: &str = "CUSIP";

/// `"<name> Intra Stock Concentration"`
pub fn intra_column(display_name: &str) -> String {
    format!("{display_name} Intra Stock Concentration")
}

/// `"<name> Inter Stock Portfolio Concentration"`
pub fn inter_column(display_name: &str) -> String {
    format!("{display_name} Inter Stock Portfolio Concentration")
}

/// `"<name> Inter Stock % / Largest Firm Holding %"`
pub fn dominance_column(display_name: &str) -> String {
    format!("{display_name} Inter Stock % / Largest Firm Holding %")
}

/// One investor's derived metrics for one reported security.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvestorMetrics {
    pub investor: InvestorId,
    /// Share of the investor's portfolio held in the security.
    pub intra_pct: Decimal,
    /// The investor's share of the tracked investors' combined value in the security.
    pub inter_pct: Decimal,
    /// `inter_pct` relative to the largest tracked holder's `inter_pct`.
    pub dominance_pct: Decimal,
    /// Whether the security is among this investor's top-N by `intra_pct`.
    pub in_top_n: bool,
}

/// A reported security: aggregate stats plus metrics for every tracked investor holding it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub security_id: String,
    pub issuer_name: String,
    pub purchase_count: usize,
    pub total_value: Decimal,
    /// In configured investor order.
    pub metrics: Vec<InvestorMetrics>,
}

impl ReportRow {
    pub fn metrics_for(&self, investor: &InvestorId) -> Option<&InvestorMetrics> {
        self.metrics.iter().find(|m| &m.investor == investor)
    }
}

/// A single cell of the tabular report view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Count(usize),
    Value(Decimal),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Count(n) => write!(f, "{n}"),
            Cell::Value(d) => write!(f, "{}", d.round_dp(6).normalize()),
        }
    }
}

/// Securities held by more than one tracked investor that rank in at least one investor's top-N.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopHoldingsReport {
    investors: Vec<Investor>,
    rows: Vec<ReportRow>,
    zero_total_securities: Vec<String>,
    overflowed_securities: Vec<String>,
}

impl TopHoldingsReport {
    pub(crate) fn new(
        investors: Vec<Investor>,
        rows: Vec<ReportRow>,
        zero_total_securities: Vec<String>,
        overflowed_securities: Vec<String>,
    ) -> Self {
        Self {
            investors,
            rows,
            zero_total_securities,
            overflowed_securities,
        }
    }

    pub fn investors(&self) -> &[Investor] {
        &self.investors
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, security_id: &str) -> Option<&ReportRow> {
        self.rows.iter().find(|r| r.security_id == security_id)
    }

    /// Securities whose combined tracked value was zero, so their inter shares degraded to 0.
    pub fn zero_total_securities(&self) -> &[String] {
        &self.zero_total_securities
    }

    /// Securities with records left out because a market value sum was out of range.
    pub fn overflowed_securities(&self) -> &[String] {
        &self.overflowed_securities
    }

    /// Investors with metrics on at least one row, in configured order.
    fn reported_investors(&self) -> impl Iterator<Item = &Investor> + '_ {
        self.investors
            .iter()
            .filter(|inv| self.rows.iter().any(|r| r.metrics_for(&inv.id).is_some()))
    }

    /// Column headers: the four base columns, then three per reported investor.
    pub fn columns(&self) -> Vec<String> {
        let mut cols = vec![
            COL_HOLDING_NAME.to_string(),
            COL_PURCHASE_COUNT.to_string(),
            COL_TOTAL_VALUE.to_string(),
            COL_SECURITY_ID.to_string(),
        ];
        for inv in self.reported_investors() {
            cols.push(intra_column(&inv.display_name));
            cols.push(inter_column(&inv.display_name));
            cols.push(dominance_column(&inv.display_name));
        }
        cols
    }

    /// Cells of `row` aligned with [`columns`](Self::columns); `None` where the investor does
    /// not hold the security.
    pub fn cells(&self, row: &ReportRow) -> Vec<Option<Cell>> {
        let mut cells = vec![
            Some(Cell::Text(row.issuer_name.clone())),
            Some(Cell::Count(row.purchase_count)),
            Some(Cell::Value(row.total_value)),
            Some(Cell::Text(row.security_id.clone())),
        ];
        for inv in self.reported_investors() {
            match row.metrics_for(&inv.id) {
                Some(m) => {
                    cells.push(Some(Cell::Value(m.intra_pct)));
                    cells.push(Some(Cell::Value(m.inter_pct)));
                    cells.push(Some(Cell::Value(m.dominance_pct)));
                }
                None => cells.extend([None, None, None]),
            }
        }
        cells
    }
}
