//! Marginal-rate resolution against a progressive bracket schedule.

use rust_decimal::Decimal;

use crate::models::BracketTable;

/// Returns the rate of the last bracket whose threshold does not exceed
/// `income`.
///
/// The candidate starts at the first bracket's rate, which also covers income
/// below every threshold. The table is sorted ascending by construction, so
/// the scan stops at the first threshold above `income`; that short-circuit
/// is part of the ordering contract, not an optimization. A single-bracket
/// table degenerates to a flat rate.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use yield_core::calculations::marginal_rate;
/// use yield_core::models::{BracketTable, TaxBracket};
///
/// let table = BracketTable::new(vec![
///     TaxBracket { threshold: dec!(0), rate: dec!(0.10) },
///     TaxBracket { threshold: dec!(11925), rate: dec!(0.12) },
///     TaxBracket { threshold: dec!(48475), rate: dec!(0.22) },
/// ])
/// .unwrap();
///
/// assert_eq!(marginal_rate(dec!(100000), &table), dec!(0.22));
/// ```
pub fn marginal_rate(income: Decimal, table: &BracketTable) -> Decimal {
    let brackets = table.brackets();
    let mut current = brackets[0].rate;
    for bracket in brackets {
        if income >= bracket.threshold {
            current = bracket.rate;
        } else {
            break;
        }
    }
    current
}
