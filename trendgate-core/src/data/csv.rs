//! CSV bar ingestion.
//!
//! Expected header: `date,open,high,low,close,volume` with ISO dates
//! (YYYY-MM-DD). Rows are parsed strictly; the loader reports the first bad
//! row rather than skipping or repairing it. Ordering and OHLC sanity are
//! enforced downstream by the fold runner.

use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::Bar;
use crate::error::DataError;

#[derive(Debug, Deserialize)]
struct CsvRow {
    date: String,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: u64,
}

/// Load daily bars for `symbol` from a CSV file.
pub fn load_csv(path: &Path, symbol: &str) -> Result<Vec<Bar>, DataError> {
    let display = path.display().to_string();
    let file = std::fs::File::open(path).map_err(|source| DataError::Io {
        path: display.clone(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let mut bars = Vec::new();
    for (i, result) in reader.deserialize::<CsvRow>().enumerate() {
        // Row numbers are 1-based and skip the header.
        let row_number = i + 2;
        let row = result.map_err(|source| DataError::Csv {
            path: display.clone(),
            source,
        })?;
        let date = NaiveDate::parse_from_str(&row.date, "%Y-%m-%d").map_err(|e| {
            DataError::BadRow {
                path: display.clone(),
                row: row_number,
                reason: format!("unparseable date '{}': {e}", row.date),
            }
        })?;
        bars.push(Bar {
            symbol: symbol.to_string(),
            date,
            open: row.open,
            high: row.high,
            low: row.low,
            close: row.close,
            volume: row.volume,
        });
    }
    Ok(bars)
}
