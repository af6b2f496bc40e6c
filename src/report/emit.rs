use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::TopHoldingsReport;
use crate::core::SecError;

/// Hands a finished report to a durable destination.
pub trait ReportEmitter {
    fn emit(&mut self, report: &TopHoldingsReport) -> Result<(), SecError>;
}

/// Writes the report as CSV: one header row, one row per security, empty cells where sparse.
pub struct CsvEmitter<W: Write> {
    writer: csv::Writer<W>,
}

impl CsvEmitter<File> {
    /// Creates (or truncates) a CSV file at `path`.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, SecError> {
        Ok(Self {
            writer: csv::Writer::from_path(path)?,
        })
    }
}

impl<W: Write> CsvEmitter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(inner),
        }
    }

    /// Flushes and returns the underlying writer.
    pub fn into_inner(self) -> Result<W, SecError> {
        self.writer
            .into_inner()
            .map_err(|e| SecError::Io(e.into_error()))
    }
}

impl<W: Write> ReportEmitter for CsvEmitter<W> {
    fn emit(&mut self, report: &TopHoldingsReport) -> Result<(), SecError> {
        self.writer.write_record(report.columns())?;
        for row in report.rows() {
            let record = report
                .cells(row)
                .into_iter()
                .map(|c| c.map(|c| c.to_string()).unwrap_or_default());
            self.writer.write_record(record)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

impl TopHoldingsReport {
    /// Writes the report as CSV to `out`.
    pub fn write_csv<W: Write>(&self, out: W) -> Result<(), SecError> {
        let mut emitter = CsvEmitter::new(out);
        emitter.emit(self)?;
        emitter.into_inner()?;
        Ok(())
    }
}
