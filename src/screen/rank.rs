//! Multi-holder filter, per-investor top-N selection and dominance ratios.

use std::collections::BTreeSet;

use rust_decimal::Decimal;

use super::concentration::{ConcentrationTable, percent_of};
use crate::report::{InvestorMetrics, ReportRow, TopHoldingsReport};

/// Builds the top-holdings report from derived concentrations.
///
/// 1. Securities held by at most one tracked investor are dropped.
/// 2. For each investor, its surviving holdings are ordered by intra concentration (descending,
///    ties in accumulation order) and the first `top_n` are selected. The report keeps the union
///    of all investors' selections.
/// 3. Every holder of a selected security gets a dominance ratio: its inter share relative to
///    the largest inter share among the tracked investors.
pub fn rank(table: &ConcentrationTable<'_>, top_n: usize) -> TopHoldingsReport {
    let acc = table.accumulation();
    let investor_count = acc.investors().len();

    let surviving: Vec<usize> = acc
        .securities()
        .iter()
        .enumerate()
        .filter(|(_, s)| s.purchase_count() > 1)
        .map(|(i, _)| i)
        .collect();

    // top[sec][pos] marks selection; `selected` keeps accumulation order.
    let mut top = vec![vec![false; investor_count]; acc.securities().len()];
    let mut selected = BTreeSet::new();

    for pos in 0..investor_count {
        let mut held: Vec<(usize, Decimal)> = surviving
            .iter()
            .filter_map(|&i| table.at(i, pos).map(|c| (i, c.intra_pct)))
            .collect();
        held.sort_by(|a, b| b.1.cmp(&a.1));
        for &(i, _) in held.iter().take(top_n) {
            top[i][pos] = true;
            selected.insert(i);
        }
    }

    let rows = selected
        .into_iter()
        .map(|i| {
            let sec = &acc.securities()[i];
            let max_inter = sec
                .holder_positions()
                .filter_map(|pos| table.at(i, pos))
                .map(|c| c.inter_pct)
                .max()
                .unwrap_or(Decimal::ZERO);

            let metrics = sec
                .holder_positions()
                .filter_map(|pos| {
                    let c = table.at(i, pos)?;
                    Some(InvestorMetrics {
                        investor: acc.investors()[pos].id.clone(),
                        intra_pct: c.intra_pct,
                        inter_pct: c.inter_pct,
                        dominance_pct: percent_of(c.inter_pct, max_inter),
                        in_top_n: top[i][pos],
                    })
                })
                .collect();

            ReportRow {
                security_id: sec.security_id().to_string(),
                issuer_name: sec.issuer_name().to_string(),
                purchase_count: sec.purchase_count(),
                total_value: sec.total_value(),
                metrics,
            }
        })
        .collect();

    TopHoldingsReport::new(
        acc.investors().to_vec(),
        rows,
        table.zero_total_securities().to_vec(),
        acc.overflowed_securities().to_vec(),
    )
}
