use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One row of a progressive-rate schedule: the marginal rate that applies to
/// income at or above `threshold`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub threshold: Decimal,
    pub rate: Decimal,
}

/// Errors that can occur when building a bracket table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BracketTableError {
    #[error("no tax brackets provided")]
    Empty,
}

/// An immutable progressive-tax schedule, one per filing status and state.
///
/// Rows are held sorted ascending by threshold; marginal-rate resolution
/// relies on that ordering to stop scanning at the first threshold above the
/// income.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketTable {
    brackets: Vec<TaxBracket>,
}

impl BracketTable {
    /// Builds a table from rows in any order.
    ///
    /// Rows are sorted ascending by threshold. An empty input is rejected
    /// here so that rate resolution stays a total function.
    pub fn new(mut brackets: Vec<TaxBracket>) -> Result<Self, BracketTableError> {
        if brackets.is_empty() {
            return Err(BracketTableError::Empty);
        }
        brackets.sort_by(|a, b| a.threshold.cmp(&b.threshold));
        Ok(Self { brackets })
    }

    /// The rows, ascending by threshold. Never empty.
    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }
}
