use polars::prelude::*;
use rust_decimal::prelude::ToPrimitive;

use super::{Cell, TopHoldingsReport};
use crate::core::dataframe::ToDataFrame;

const TEXT_COLUMNS: [usize; 2] = [0, 3];
const COUNT_COLUMN: usize = 1;

fn cell_at(row: &[Option<Cell>], j: usize) -> Option<&Cell> {
    row.get(j).and_then(Option::as_ref)
}

fn text(cell: Option<&Cell>) -> Option<String> {
    match cell? {
        Cell::Text(s) => Some(s.clone()),
        _ => None,
    }
}

fn count(cell: Option<&Cell>) -> Option<u64> {
    match cell? {
        Cell::Count(n) => u64::try_from(*n).ok(),
        _ => None,
    }
}

fn value(cell: Option<&Cell>) -> Option<f64> {
    match cell? {
        Cell::Value(d) => d.to_f64(),
        _ => None,
    }
}

impl ToDataFrame for TopHoldingsReport {
    /// One row per reported security; sparse investor columns are null.
    fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let grid: Vec<Vec<Option<Cell>>> = self.rows().iter().map(|r| self.cells(r)).collect();

        let columns = self
            .columns()
            .iter()
            .enumerate()
            .map(|(j, name)| {
                let name = PlSmallStr::from(name.as_str());
                let series = if TEXT_COLUMNS.contains(&j) {
                    Series::new(name, grid.iter().map(|r| text(cell_at(r, j))).collect::<Vec<_>>())
                } else if j == COUNT_COLUMN {
                    Series::new(name, grid.iter().map(|r| count(cell_at(r, j))).collect::<Vec<_>>())
                } else {
                    Series::new(name, grid.iter().map(|r| value(cell_at(r, j))).collect::<Vec<_>>())
                };
                series.into_column()
            })
            .collect();

        DataFrame::new(columns)
    }
}
