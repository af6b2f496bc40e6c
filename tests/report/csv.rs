use std::collections::HashMap;

use sec13f_rs::{
    CsvEmitter, InvestorId, ReportEmitter, ScreenConfig, TopHoldingsReport, screen,
};

use crate::common::rec;

fn three_investor_report() -> TopHoldingsReport {
    let config = ScreenConfig::builder()
        .investor("A", "Alpha")
        .investor("B", "Beta")
        .investor("C", "Gamma")
        .build()
        .unwrap();
    let mut holdings = HashMap::new();
    holdings.insert(
        InvestorId::from("A"),
        vec![rec("ONE CORP", "S1", 300), rec("TWO CORP", "S2", 100)],
    );
    holdings.insert(InvestorId::from("B"), vec![rec("ONE CORP", "S1", 100)]);
    holdings.insert(InvestorId::from("C"), vec![rec("TWO CORP", "S2", 100)]);
    screen(&config, &holdings).unwrap()
}

fn parse(bytes: &[u8]) -> (Vec<String>, Vec<Vec<String>>) {
    let mut rdr = csv::Reader::from_reader(bytes);
    let header = rdr.headers().unwrap().iter().map(str::to_string).collect();
    let rows = rdr
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect();
    (header, rows)
}

#[test]
fn csv_header_follows_column_templates() {
    let report = three_investor_report();
    let mut out = Vec::new();
    report.write_csv(&mut out).unwrap();

    let (header, rows) = parse(&out);
    assert_eq!(
        header,
        vec![
            "Holding name",
            "Number of times purchased",
            "Sum of Market Values",
            "CUSIP",
            "Alpha Intra Stock Concentration",
            "Alpha Inter Stock Portfolio Concentration",
            "Alpha Inter Stock % / Largest Firm Holding %",
            "Beta Intra Stock Concentration",
            "Beta Inter Stock Portfolio Concentration",
            "Beta Inter Stock % / Largest Firm Holding %",
            "Gamma Intra Stock Concentration",
            "Gamma Inter Stock Portfolio Concentration",
            "Gamma Inter Stock % / Largest Firm Holding %",
        ]
    );
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.len() == header.len()));
}

#[test]
fn csv_cells_are_empty_where_investor_does_not_hold() {
    let report = three_investor_report();
    let mut out = Vec::new();
    report.write_csv(&mut out).unwrap();
    let (_, rows) = parse(&out);

    let s1 = rows.iter().find(|r| r[3] == "S1").unwrap();
    assert_eq!(&s1[..4], &["ONE CORP", "2", "400", "S1"]);
    // Alpha: 75% of its book, 75% of S1, largest holder.
    assert_eq!(&s1[4..7], &["75", "75", "100"]);
    // Beta: whole book in S1, 25% of S1, a third of Alpha's share.
    assert_eq!(&s1[7..9], &["100", "25"]);
    assert_eq!(s1[9], "33.333333");
    // Gamma does not hold S1.
    assert_eq!(&s1[10..13], &["", "", ""]);

    let s2 = rows.iter().find(|r| r[3] == "S2").unwrap();
    assert_eq!(&s2[7..10], &["", "", ""]);
    assert_eq!(&s2[10..13], &["100", "50", "100"]);
}

#[test]
fn emitter_hands_back_the_writer() {
    let report = three_investor_report();
    let mut emitter = CsvEmitter::new(Vec::new());
    emitter.emit(&report).unwrap();
    let bytes = emitter.into_inner().unwrap();

    let text = String::from_utf8(bytes).unwrap();
    assert_eq!(text.lines().count(), 3);
    assert!(text.starts_with("Holding name,"));
}

#[test]
fn emitter_writes_to_a_file() {
    let report = three_investor_report();
    let path = std::env::temp_dir().join(format!("sec13f_rs_report_{}.csv", std::process::id()));

    let mut emitter = CsvEmitter::create(&path).unwrap();
    emitter.emit(&report).unwrap();
    drop(emitter);

    let (header, rows) = parse(&std::fs::read(&path).unwrap());
    std::fs::remove_file(&path).ok();
    assert_eq!(header.len(), 13);
    assert_eq!(rows.len(), 2);
}

#[test]
fn empty_report_writes_only_base_header() {
    let config = ScreenConfig::builder()
        .investor("A", "Alpha")
        .investor("B", "Beta")
        .build()
        .unwrap();
    let report = screen(&config, &HashMap::new()).unwrap();

    let mut out = Vec::new();
    report.write_csv(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(
        text.trim_end(),
        "Holding name,Number of times purchased,Sum of Market Values,CUSIP"
    );
}
