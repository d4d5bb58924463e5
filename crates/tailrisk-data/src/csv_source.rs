//! CSV-based price series source.

use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;

use tailrisk_core::{PricePoint, PriceSeries};

use crate::error::{DataError, DataResult};

/// CSV record for a dated closing price.
#[derive(Debug, Deserialize)]
struct PriceRecord {
    date: NaiveDate,
    close: f64,
}

/// CSV-based price source for end-of-day data.
///
/// Expects a header row with `date` (ISO 8601) and `close` columns:
///
/// ```text
/// date,close
/// 2025-03-03,100.0
/// 2025-03-04,102.0
/// ```
pub struct CsvPriceSource {
    file_path: PathBuf,
}

impl CsvPriceSource {
    /// Creates a source for the given file path.
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Loads and validates the price series from the file.
    pub fn load(&self) -> DataResult<PriceSeries> {
        log::debug!("loading price data from {}", self.file_path.display());

        let reader = csv::Reader::from_path(&self.file_path)
            .map_err(|e| DataError::Io(e.to_string()))?;

        let series = read_records(reader)?;
        log::info!(
            "loaded {} price observations from {}",
            series.len(),
            self.file_path.display()
        );
        Ok(series)
    }
}

/// Reads a price series from any CSV reader (`date,close` with headers).
pub fn read_price_series<R: Read>(reader: R) -> DataResult<PriceSeries> {
    read_records(csv::Reader::from_reader(reader))
}

fn read_records<R: Read>(mut reader: csv::Reader<R>) -> DataResult<PriceSeries> {
    let mut points = Vec::new();
    for (row, result) in reader.deserialize().enumerate() {
        let record: PriceRecord = result.map_err(|e| {
            // +2: one for the header row, one for 1-based line numbers.
            DataError::Parse(format!("row {}: {}", row + 2, e))
        })?;
        points.push(PricePoint::new(record.date, record.close));
    }

    // Export order varies by vendor; the core requires strict ascending
    // dates, so sort before validating.
    points.sort_by_key(|p| p.date);

    Ok(PriceSeries::new(points)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tailrisk_core::TailRiskError;

    #[test]
    fn test_read_sorted_series() {
        let csv = "date,close\n2025-03-03,100.0\n2025-03-04,102.0\n2025-03-05,101.0\n";
        let series = read_price_series(csv.as_bytes()).unwrap();

        assert_eq!(series.len(), 3);
        assert_eq!(series.closes(), vec![100.0, 102.0, 101.0]);
    }

    #[test]
    fn test_unsorted_input_is_sorted_by_date() {
        let csv = "date,close\n2025-03-05,101.0\n2025-03-03,100.0\n2025-03-04,102.0\n";
        let series = read_price_series(csv.as_bytes()).unwrap();

        assert_eq!(series.closes(), vec![100.0, 102.0, 101.0]);
    }

    #[test]
    fn test_duplicate_dates_rejected() {
        let csv = "date,close\n2025-03-03,100.0\n2025-03-03,102.0\n";
        let result = read_price_series(csv.as_bytes());

        assert!(matches!(
            result,
            Err(DataError::Series(TailRiskError::UnorderedObservations { .. }))
        ));
    }

    #[test]
    fn test_non_positive_close_rejected() {
        let csv = "date,close\n2025-03-03,100.0\n2025-03-04,-3.0\n";
        let result = read_price_series(csv.as_bytes());

        assert!(matches!(
            result,
            Err(DataError::Series(TailRiskError::InvalidPrice { .. }))
        ));
    }

    #[test]
    fn test_malformed_row_is_an_error_not_a_skip() {
        let csv = "date,close\n2025-03-03,100.0\nnot-a-date,1.0\n";
        let result = read_price_series(csv.as_bytes());

        assert!(matches!(result, Err(DataError::Parse(msg)) if msg.contains("row 3")));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "date,close").unwrap();
        writeln!(file, "2025-03-03,100.0").unwrap();
        writeln!(file, "2025-03-04,102.0").unwrap();

        let series = CsvPriceSource::new(file.path()).load().unwrap();
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = CsvPriceSource::new("/nonexistent/prices.csv").load();
        assert!(matches!(result, Err(DataError::Io(_))));
    }
}
