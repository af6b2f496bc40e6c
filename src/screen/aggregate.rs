//! Stage 1: fold every investor's holdings into per-security raw sums.

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;

use super::config::ScreenConfig;
use crate::core::{HoldingRecord, Investor, InvestorId, SecError};

/// Raw cross-investor sums for one security. Holds no derived percentages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityAccumulator {
    security_id: String,
    issuer_name: String,
    purchase_count: usize,
    total_value: Decimal,
    // Indexed by investor position in the config.
    raw_values: Vec<Option<Decimal>>,
}

impl SecurityAccumulator {
    fn new(security_id: &str, issuer_name: &str, investor_count: usize) -> Self {
        Self {
            security_id: security_id.to_string(),
            issuer_name: issuer_name.to_string(),
            purchase_count: 0,
            total_value: Decimal::ZERO,
            raw_values: vec![None; investor_count],
        }
    }

    pub fn security_id(&self) -> &str {
        &self.security_id
    }

    /// Issuer name from the first record seen for this security.
    pub fn issuer_name(&self) -> &str {
        &self.issuer_name
    }

    /// Number of distinct investors holding the security.
    pub fn purchase_count(&self) -> usize {
        self.purchase_count
    }

    pub fn total_value(&self) -> Decimal {
        self.total_value
    }

    /// Raw value contributed by the investor at `pos`, `None` if it does not hold the security.
    pub(crate) fn raw_value_at(&self, pos: usize) -> Option<Decimal> {
        self.raw_values.get(pos).copied().flatten()
    }

    /// Investor positions holding this security, in config order.
    pub(crate) fn holder_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.raw_values
            .iter()
            .enumerate()
            .filter_map(|(pos, v)| v.map(|_| pos))
    }
}

/// The finished, read-only result of stage 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accumulation {
    investors: Vec<Investor>,
    securities: Vec<SecurityAccumulator>,
    index: HashMap<String, usize>,
    investor_totals: Vec<Decimal>,
    overflowed_securities: Vec<String>,
}

impl Accumulation {
    pub fn investors(&self) -> &[Investor] {
        &self.investors
    }

    /// All securities seen, in first-seen order.
    pub fn securities(&self) -> &[SecurityAccumulator] {
        &self.securities
    }

    pub fn security(&self, security_id: &str) -> Option<&SecurityAccumulator> {
        self.index.get(security_id).map(|&i| &self.securities[i])
    }

    /// Sum of the investor's own market values; zero for an investor with no holdings.
    pub fn investor_total(&self, id: &InvestorId) -> Option<Decimal> {
        self.investor_position(id).map(|pos| self.investor_totals[pos])
    }

    /// The investor's raw contribution to a security.
    pub fn raw_value(&self, security_id: &str, id: &InvestorId) -> Option<Decimal> {
        let pos = self.investor_position(id)?;
        self.security(security_id)?.raw_value_at(pos)
    }

    /// Securities with at least one record skipped because a sum left the `Decimal` range.
    pub fn overflowed_securities(&self) -> &[String] {
        &self.overflowed_securities
    }

    pub(crate) fn security_index(&self, security_id: &str) -> Option<usize> {
        self.index.get(security_id).copied()
    }

    pub(crate) fn investor_position(&self, id: &InvestorId) -> Option<usize> {
        self.investors.iter().position(|i| &i.id == id)
    }

    pub(crate) fn total_at(&self, pos: usize) -> Decimal {
        self.investor_totals[pos]
    }
}

/// Mutable builder for an [`Accumulation`].
///
/// Investors must be added in configured order, each at most once. Investors that are skipped
/// are finalised with zero holdings.
#[derive(Debug)]
pub struct Aggregator<'a> {
    config: &'a ScreenConfig,
    securities: Vec<SecurityAccumulator>,
    index: HashMap<String, usize>,
    investor_totals: Vec<Decimal>,
    overflowed_securities: Vec<String>,
    next_position: usize,
}

impl<'a> Aggregator<'a> {
    pub fn new(config: &'a ScreenConfig) -> Self {
        Self {
            config,
            securities: Vec::new(),
            index: HashMap::new(),
            investor_totals: vec![Decimal::ZERO; config.investors().len()],
            overflowed_securities: Vec::new(),
            next_position: 0,
        }
    }

    /// Folds one investor's complete record set into the accumulator.
    ///
    /// Several rows for the same security within one disclosure are merged into a single
    /// contribution, so `purchase_count` counts each investor once. A record whose value would
    /// push any sum past `Decimal::MAX` is skipped and its security listed in
    /// [`Accumulation::overflowed_securities`].
    ///
    /// # Errors
    ///
    /// Returns [`SecError::InvalidParams`] if the investor is not configured, or was already
    /// added, or comes before an investor that was already added.
    pub fn add_investor(
        &mut self,
        id: &InvestorId,
        records: &[HoldingRecord],
    ) -> Result<(), SecError> {
        let pos = self
            .config
            .position(id)
            .ok_or_else(|| SecError::InvalidParams(format!("investor {id} is not configured")))?;
        if pos < self.next_position {
            return Err(SecError::InvalidParams(format!(
                "investor {id} was added twice or out of configured order"
            )));
        }

        let investor_count = self.config.investors().len();
        let mut held = HashSet::new();
        let mut total = Decimal::ZERO;

        for record in records {
            let value = record.market_value();
            let existing = self.index.get(record.security_id()).copied();
            let (security_total, raw) = existing.map_or((Decimal::ZERO, Decimal::ZERO), |i| {
                let acc = &self.securities[i];
                (acc.total_value, acc.raw_value_at(pos).unwrap_or(Decimal::ZERO))
            });

            let (Some(new_total), Some(new_security_total), Some(new_raw)) = (
                total.checked_add(value),
                security_total.checked_add(value),
                raw.checked_add(value),
            ) else {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    investor = %id,
                    security_id = record.security_id(),
                    "market value sum out of range; record skipped"
                );
                if !self.overflowed_securities.iter().any(|s| s == record.security_id()) {
                    self.overflowed_securities.push(record.security_id().to_string());
                }
                continue;
            };

            let idx = match existing {
                Some(i) => i,
                None => {
                    self.securities.push(SecurityAccumulator::new(
                        record.security_id(),
                        record.issuer_name(),
                        investor_count,
                    ));
                    let i = self.securities.len() - 1;
                    self.index.insert(record.security_id().to_string(), i);
                    i
                }
            };

            total = new_total;
            let acc = &mut self.securities[idx];
            acc.total_value = new_security_total;
            acc.raw_values[pos] = Some(new_raw);
            if held.insert(idx) {
                acc.purchase_count += 1;
            }
        }

        self.investor_totals[pos] = total;
        self.next_position = pos + 1;
        Ok(())
    }

    /// Freezes the accumulated state.
    pub fn finish(self) -> Accumulation {
        Accumulation {
            investors: self.config.investors().to_vec(),
            securities: self.securities,
            index: self.index,
            investor_totals: self.investor_totals,
            overflowed_securities: self.overflowed_securities,
        }
    }
}

/// Runs stage 1 over a holdings map, visiting investors in configured order.
///
/// Configured investors missing from `holdings` contribute zero holdings; entries for
/// investors that are not configured are ignored.
pub fn aggregate(
    config: &ScreenConfig,
    holdings: &HashMap<InvestorId, Vec<HoldingRecord>>,
) -> Result<Accumulation, SecError> {
    let mut aggregator = Aggregator::new(config);
    for investor in config.investors() {
        let records = holdings.get(&investor.id).map(Vec::as_slice).unwrap_or_default();
        aggregator.add_investor(&investor.id, records)?;
    }
    Ok(aggregator.finish())
}
