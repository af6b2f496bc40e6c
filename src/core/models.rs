use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/* ----- INVESTORS (shared by screen/, source/, report/) ----- */

/// Opaque key identifying a tracked institution. For EDGAR sources this is the filer CIK.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvestorId(String);

impl InvestorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvestorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for InvestorId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for InvestorId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A tracked institution and the name its report columns are labelled with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Investor {
    pub id: InvestorId,
    pub display_name: String,
}

impl Investor {
    pub fn new(id: impl Into<InvestorId>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}

/* ----- HOLDINGS ----- */

/// One row of an information table as scraped, before any validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawHoldingRow {
    pub issuer_name: String,
    pub security_id: String,
    pub market_value: String,
}

/// A single validated position from an investor's latest disclosure.
///
/// Records are only built through [`HoldingRecord::new`] or [`HoldingRecord::from_raw`], so the
/// market value is always a non-negative decimal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HoldingRecord {
    issuer_name: String,
    security_id: String,
    market_value: Decimal,
}

impl HoldingRecord {
    /// Builds a record, returning `None` for an empty issuer, empty security id or a negative value.
    pub fn new(
        issuer_name: impl Into<String>,
        security_id: impl Into<String>,
        market_value: Decimal,
    ) -> Option<Self> {
        let issuer_name = issuer_name.into().trim().to_string();
        let security_id = security_id.into().trim().to_string();
        if issuer_name.is_empty() || security_id.is_empty() || market_value < Decimal::ZERO {
            return None;
        }
        Some(Self {
            issuer_name,
            security_id,
            market_value,
        })
    }

    /// Parse boundary for scraped rows. Rows with a malformed value are dropped here.
    pub fn from_raw(row: &RawHoldingRow) -> Option<Self> {
        let value = parse_market_value(&row.market_value)?;
        Self::new(row.issuer_name.as_str(), row.security_id.as_str(), value)
    }

    pub fn issuer_name(&self) -> &str {
        &self.issuer_name
    }

    /// The CUSIP of the position.
    pub fn security_id(&self) -> &str {
        &self.security_id
    }

    pub fn market_value(&self) -> Decimal {
        self.market_value
    }
}

/// Parses a market value cell such as `"$1,234,567"`.
///
/// Thousands separators, dollar signs and whitespace are stripped; anything else that does not
/// parse as a non-negative decimal yields `None`.
pub fn parse_market_value(s: &str) -> Option<Decimal> {
    let cleaned: String = s
        .chars()
        .filter(|c| *c != ',' && *c != '$' && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    let value = Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .ok()?;
    if value < Decimal::ZERO {
        return None;
    }
    Some(value)
}
