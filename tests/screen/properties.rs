use std::collections::{HashMap, HashSet};

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sec13f_rs::screen::aggregate;
use sec13f_rs::{ConcentrationTable, HoldingRecord, InvestorId, ScreenConfig, screen};

type Book = Vec<(usize, u64)>;

fn books() -> impl Strategy<Value = Vec<Book>> {
    prop::collection::vec(prop::collection::vec((0usize..8, 0u64..1_000_000), 0..12), 1..5)
}

fn security_id(idx: usize) -> String {
    format!("SEC{idx:06}")
}

fn build(books: &[Book]) -> (ScreenConfig, HashMap<InvestorId, Vec<HoldingRecord>>) {
    let mut builder = ScreenConfig::builder();
    let mut holdings = HashMap::new();
    for (i, book) in books.iter().enumerate() {
        let id = format!("INV{i}");
        builder = builder.investor(id.as_str(), format!("Investor {i}"));
        let records = book
            .iter()
            .map(|&(sec, value)| {
                HoldingRecord::new(format!("ISSUER {sec}"), security_id(sec), Decimal::from(value))
                    .unwrap()
            })
            .collect();
        holdings.insert(InvestorId::from(id), records);
    }
    (builder.build().unwrap(), holdings)
}

fn near(a: Decimal, b: Decimal) -> bool {
    (a - b).abs() < dec!(0.000000001)
}

proptest! {
    #[test]
    fn purchase_count_equals_distinct_holders(books in books()) {
        let (config, holdings) = build(&books);
        let acc = aggregate(&config, &holdings).unwrap();

        for sec in acc.securities() {
            let holders = books
                .iter()
                .filter(|book| book.iter().any(|&(s, _)| security_id(s) == sec.security_id()))
                .count();
            prop_assert_eq!(sec.purchase_count(), holders);
        }
    }

    #[test]
    fn intra_sums_to_100_per_funded_investor(books in books()) {
        let (config, holdings) = build(&books);
        let acc = aggregate(&config, &holdings).unwrap();
        let table = ConcentrationTable::derive(&acc);

        for inv in config.investors() {
            let total = acc.investor_total(&inv.id).unwrap();
            let intra: Vec<Decimal> = acc
                .securities()
                .iter()
                .filter_map(|s| table.get(s.security_id(), &inv.id))
                .map(|c| c.intra_pct)
                .collect();
            if total.is_zero() {
                prop_assert!(intra.iter().all(|p| p.is_zero()));
            } else {
                prop_assert!(near(intra.iter().copied().sum(), dec!(100)));
            }
        }
    }

    #[test]
    fn inter_sums_to_100_per_funded_security(books in books()) {
        let (config, holdings) = build(&books);
        let acc = aggregate(&config, &holdings).unwrap();
        let table = ConcentrationTable::derive(&acc);

        for sec in acc.securities() {
            let inter: Decimal = config
                .investors()
                .iter()
                .filter_map(|inv| table.get(sec.security_id(), &inv.id))
                .map(|c| c.inter_pct)
                .sum();
            if sec.total_value().is_zero() {
                prop_assert!(inter.is_zero());
                prop_assert!(table.zero_total_securities().iter().any(|s| s == sec.security_id()));
            } else {
                prop_assert!(near(inter, dec!(100)));
            }
        }
    }

    #[test]
    fn aggregation_is_idempotent(books in books()) {
        let (config, holdings) = build(&books);
        prop_assert_eq!(
            aggregate(&config, &holdings).unwrap(),
            aggregate(&config, &holdings).unwrap()
        );
    }

    #[test]
    fn report_only_holds_multi_holder_securities(books in books()) {
        let (config, holdings) = build(&books);
        let report = screen(&config, &holdings).unwrap();

        for row in report.rows() {
            prop_assert!(row.purchase_count > 1);
            let holders: HashSet<&str> = row.metrics.iter().map(|m| m.investor.as_str()).collect();
            prop_assert_eq!(holders.len(), row.purchase_count);
            prop_assert!(row.metrics.iter().any(|m| m.in_top_n));
            for m in &row.metrics {
                prop_assert!(m.dominance_pct <= dec!(100.000000001));
            }
        }
    }
}
