use std::collections::HashMap;

use rust_decimal_macros::dec;
use sec13f_rs::{InvestorId, ScreenConfig};
use sec13f_rs::report::Cell;
use sec13f_rs::screen;

use crate::common::rec;

#[test]
fn cell_values_are_rounded_for_display() {
    assert_eq!(Cell::Value(dec!(33.33333333333)).to_string(), "33.333333");
    assert_eq!(Cell::Value(dec!(50.000)).to_string(), "50");
    assert_eq!(Cell::Count(3).to_string(), "3");
    assert_eq!(Cell::Text("APPLE INC".into()).to_string(), "APPLE INC");
}

#[test]
fn columns_skip_investors_without_reported_rows() {
    let config = ScreenConfig::builder()
        .investor("A", "Alpha")
        .investor("B", "Beta")
        .investor("C", "Gamma")
        .build()
        .unwrap();
    let mut holdings = HashMap::new();
    holdings.insert(InvestorId::from("A"), vec![rec("S1", "S1", 10)]);
    holdings.insert(InvestorId::from("B"), vec![rec("S1", "S1", 10)]);
    holdings.insert(InvestorId::from("C"), vec![rec("S9", "S9", 10)]);

    let report = screen(&config, &holdings).unwrap();
    let columns = report.columns();
    assert_eq!(columns.len(), 4 + 2 * 3);
    assert!(columns.iter().all(|c| !c.starts_with("Gamma")));

    let row = &report.rows()[0];
    let cells = report.cells(row);
    assert_eq!(cells.len(), columns.len());
    assert_eq!(cells[0], Some(Cell::Text("S1".into())));
    assert_eq!(cells[1], Some(Cell::Count(2)));
    assert_eq!(cells[2], Some(Cell::Value(dec!(20))));
    assert!(cells[4..].iter().all(Option::is_some));
}
