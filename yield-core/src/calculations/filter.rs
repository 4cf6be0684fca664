//! Inclusion predicate applied before ranking.

use rust_decimal::Decimal;

use crate::models::FundRecord;

/// Decides whether a fund belongs in the investor's ranking.
///
/// A fund is excluded when its minimum initial investment exceeds the stated
/// amount, or — when an issuer substring was given — when its name does not
/// contain that substring case-insensitively. Pure boolean, no side effects.
#[derive(Debug, Clone, Default)]
pub struct FundFilter {
    investment_amount: Decimal,
    issuer: Option<String>,
}

impl FundFilter {
    pub fn new(investment_amount: Decimal, issuer: Option<String>) -> Self {
        Self {
            investment_amount,
            issuer,
        }
    }

    pub fn matches(&self, fund: &FundRecord) -> bool {
        if fund.minimum_initial_investment > self.investment_amount {
            return false;
        }
        match &self.issuer {
            Some(issuer) => fund.name_contains(issuer),
            None => true,
        }
    }
}
