use polars::prelude::*;

/// Trait for converting screening results into Polars DataFrames.
///
/// This trait provides a consistent interface for handing `sec13f-rs` results to Polars for
/// further analysis and manipulation.
pub trait ToDataFrame {
    /// Converts the object into a Polars DataFrame.
    fn to_dataframe(&self) -> PolarsResult<DataFrame>;
}
