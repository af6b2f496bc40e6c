//! Stage 2: derive intra- and inter-investor concentration from a finished accumulation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::aggregate::Accumulation;
use crate::core::InvestorId;

/// `part / whole * 100`, or zero when `whole` is zero or the result is out of range.
///
/// Divides first, so any `part <= whole` stays in range up to `Decimal::MAX`.
pub fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
        .unwrap_or(Decimal::ZERO)
}

/// Derived concentration of one investor's position in one security.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Concentration {
    /// Share of the investor's own portfolio value held in this security.
    pub intra_pct: Decimal,
    /// Share of the tracked investors' combined value in this security held by this investor.
    pub inter_pct: Decimal,
}

/// Per-security, per-investor concentrations, aligned with the accumulation they came from.
#[derive(Debug)]
pub struct ConcentrationTable<'a> {
    accumulation: &'a Accumulation,
    // cells[security][investor], `None` where the investor does not hold the security.
    cells: Vec<Vec<Option<Concentration>>>,
    zero_total_securities: Vec<String>,
}

impl<'a> ConcentrationTable<'a> {
    /// Computes both metrics for every (security, holder) pair.
    ///
    /// Securities whose combined tracked value is zero get an inter share of 0 for every holder
    /// and are listed in [`zero_total_securities`](Self::zero_total_securities).
    pub fn derive(accumulation: &'a Accumulation) -> Self {
        let investor_count = accumulation.investors().len();
        let mut zero_total_securities = Vec::new();

        let cells = accumulation
            .securities()
            .iter()
            .map(|sec| {
                if sec.total_value().is_zero() {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(
                        security_id = sec.security_id(),
                        "combined tracked value is zero; inter concentration set to 0"
                    );
                    zero_total_securities.push(sec.security_id().to_string());
                }

                (0..investor_count)
                    .map(|pos| {
                        sec.raw_value_at(pos).map(|raw| Concentration {
                            intra_pct: percent_of(raw, accumulation.total_at(pos)),
                            inter_pct: percent_of(raw, sec.total_value()),
                        })
                    })
                    .collect()
            })
            .collect();

        Self {
            accumulation,
            cells,
            zero_total_securities,
        }
    }

    pub fn accumulation(&self) -> &'a Accumulation {
        self.accumulation
    }

    pub fn get(&self, security_id: &str, investor: &InvestorId) -> Option<Concentration> {
        let pos = self.accumulation.investor_position(investor)?;
        let sec_idx = self.accumulation.security_index(security_id)?;
        self.at(sec_idx, pos)
    }

    /// Securities whose combined tracked value is zero.
    pub fn zero_total_securities(&self) -> &[String] {
        &self.zero_total_securities
    }

    pub(crate) fn at(&self, sec_idx: usize, pos: usize) -> Option<Concentration> {
        self.cells.get(sec_idx)?.get(pos).copied().flatten()
    }
}
