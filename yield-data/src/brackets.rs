//! Bracket-schedule loading from CSV files.
//!
//! A schedule is a two-column CSV with a header row:
//!
//! ```csv
//! threshold,rate
//! 0,0.10
//! 11925,0.12
//! 48475,0.22
//! ```
//!
//! `threshold` is the income floor where `rate` begins to apply; `rate` is a
//! decimal, not a percentage. Rows may appear in any order — the resulting
//! [`BracketTable`] sorts them ascending by threshold.

use std::io::Read;

use thiserror::Error;
use yield_core::models::{BracketTable, BracketTableError, TaxBracket};

/// Errors that can occur when loading a bracket schedule.
#[derive(Debug, Error)]
pub enum BracketTableLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error(transparent)]
    InvalidTable(#[from] BracketTableError),
}

impl From<csv::Error> for BracketTableLoaderError {
    fn from(err: csv::Error) -> Self {
        BracketTableLoaderError::CsvParse(err.to_string())
    }
}

/// Loader for bracket schedules from CSV data.
pub struct BracketTableLoader;

impl BracketTableLoader {
    /// Parse a bracket schedule from a CSV reader.
    ///
    /// The reader can be any type that implements `Read`, such as a file or
    /// a string slice. An empty schedule is rejected.
    pub fn parse<R: Read>(reader: R) -> Result<BracketTable, BracketTableLoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut brackets = Vec::new();

        for result in csv_reader.deserialize() {
            let bracket: TaxBracket = result?;
            brackets.push(bracket);
        }

        Ok(BracketTable::new(brackets)?)
    }
}
