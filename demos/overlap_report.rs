//! Screens a set of 13F filers and writes the overlap report as CSV.
//!
//! ```text
//! SEC_USER_AGENT="Your Name you@example.com" \
//!     cargo run --example overlap_report -- [config.json] [out.csv]
//! ```

use std::env;
use std::time::Duration;

use sec13f_rs::{CsvEmitter, ReportEmitter, ScreenConfig, SecClient, screen_source};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = env::args().skip(1);
    let config = match args.next() {
        Some(path) => ScreenConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => ScreenConfig::builder()
            .investor("1466153", "Two Sigma")
            .investor("860561", "Spyglass Capital")
            .investor("1654344", "TCI Fund Management")
            .build()?,
    };
    let out_path = args
        .next()
        .unwrap_or_else(|| "filtered_top_holdings.csv".to_string());

    let mut builder = SecClient::builder()
        .timeout(Duration::from_secs(30))
        .cache_ttl(Duration::from_secs(600));
    if let Ok(ua) = env::var("SEC_USER_AGENT") {
        builder = builder.user_agent(ua);
    }
    let client = builder.build()?;

    println!("--- Screening {} institutions ---", config.investors().len());
    let outcome = screen_source(&client, &config).await?;

    for failure in &outcome.fetch_failures {
        eprintln!("  ! {}: {}", failure.investor, failure.error);
    }

    let report = &outcome.report;
    println!("\n{} securities held by more than one institution:", report.len());
    for row in report.rows().iter().take(10) {
        println!(
            "  - {} ({}): {} holders, ${}",
            row.issuer_name, row.security_id, row.purchase_count, row.total_value
        );
        for m in &row.metrics {
            let name = config.display_name(&m.investor).unwrap_or(m.investor.as_str());
            println!(
                "      {name}: intra {:.2}%  inter {:.2}%  dominance {:.2}%",
                m.intra_pct, m.inter_pct, m.dominance_pct
            );
        }
    }

    let mut emitter = CsvEmitter::create(&out_path)?;
    emitter.emit(report)?;
    println!("\nWrote {out_path}");

    Ok(())
}
