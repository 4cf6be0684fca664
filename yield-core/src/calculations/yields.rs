//! After-tax and tax-equivalent yield formulas.
//!
//! Each slice of the partition is taxed by whichever authorities apply to it:
//! nobody for in-state municipal income, the state only for other municipal
//! income, the federal government only for government-obligation income, and
//! both for the residual.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use yield_core::calculations::YieldCalculator;
//! use yield_core::models::TaxProportions;
//!
//! let calculator = YieldCalculator::new(dec!(0.2), dec!(0.1));
//! let fully_taxable = TaxProportions {
//!     state_exempt: dec!(0),
//!     other_municipal: dec!(0),
//!     government: dec!(0),
//!     fully_taxable: dec!(1),
//! };
//!
//! assert_eq!(calculator.after_tax_yield(dec!(5.0), &fully_taxable), dec!(3.5));
//! assert_eq!(calculator.tax_equivalent_yield(dec!(3.5), &fully_taxable), dec!(3.5));
//! ```

use rust_decimal::Decimal;

use crate::models::{FundRecord, TaxProportions, YieldResult};

/// Prices a partitioned yield against one investor's marginal rates.
///
/// Both rates are decimals in [0, 1), not percentages.
#[derive(Debug, Clone, Copy)]
pub struct YieldCalculator {
    federal_rate: Decimal,
    state_rate: Decimal,
}

impl YieldCalculator {
    pub fn new(federal_rate: Decimal, state_rate: Decimal) -> Self {
        Self {
            federal_rate,
            state_rate,
        }
    }

    /// Yield the investor keeps once each slice is taxed by the authorities
    /// that apply to it.
    pub fn after_tax_yield(&self, fund_yield: Decimal, p: &TaxProportions) -> Decimal {
        fund_yield * p.state_exempt
            + fund_yield * p.other_municipal * (Decimal::ONE - self.state_rate)
            + fund_yield * p.government * (Decimal::ONE - self.federal_rate)
            + fund_yield * p.fully_taxable * (Decimal::ONE - self.federal_rate - self.state_rate)
    }

    /// Yield a fully-taxable account would need to match the after-tax yield.
    ///
    /// The residual term carries no gross-up: a fully-taxable dollar's
    /// tax-equivalent yield is its raw yield by definition. When the combined
    /// rate reaches 100% the gross-up is undefined, and the raw fund yield is
    /// returned unchanged as the defined fallback.
    pub fn tax_equivalent_yield(&self, fund_yield: Decimal, p: &TaxProportions) -> Decimal {
        let denom = Decimal::ONE - self.federal_rate - self.state_rate;
        if denom <= Decimal::ZERO {
            return fund_yield;
        }
        fund_yield * p.state_exempt / denom
            + fund_yield * p.other_municipal * (Decimal::ONE - self.state_rate) / denom
            + fund_yield * p.government * (Decimal::ONE - self.federal_rate) / denom
            + fund_yield * p.fully_taxable
    }

    /// Both yields for one fund.
    pub fn evaluate(&self, fund: &FundRecord, proportions: &TaxProportions) -> YieldResult {
        YieldResult {
            after_tax_yield: self.after_tax_yield(fund.fund_yield, proportions),
            tax_equivalent_yield: self.tax_equivalent_yield(fund.fund_yield, proportions),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn only(
        state_exempt: Decimal,
        other_municipal: Decimal,
        government: Decimal,
        fully_taxable: Decimal,
    ) -> TaxProportions {
        TaxProportions {
            state_exempt,
            other_municipal,
            government,
            fully_taxable,
        }
    }

    #[test]
    fn fully_taxable_yield_loses_both_taxes() {
        let calculator = YieldCalculator::new(dec!(0.2), dec!(0.1));
        let p = only(dec!(0), dec!(0), dec!(0), dec!(1.0));

        assert_eq!(calculator.after_tax_yield(dec!(5.0), &p), dec!(3.5));
    }

    #[test]
    fn state_exempt_yield_is_untaxed() {
        let calculator = YieldCalculator::new(dec!(0.2), dec!(0.1));
        let p = only(dec!(1.0), dec!(0), dec!(0), dec!(0));

        assert_eq!(calculator.after_tax_yield(dec!(5.0), &p), dec!(5.0));
    }

    #[test]
    fn other_municipal_yield_pays_state_tax_only() {
        let calculator = YieldCalculator::new(dec!(0.2), dec!(0.1));
        let p = only(dec!(0), dec!(1.0), dec!(0), dec!(0));

        assert_eq!(calculator.after_tax_yield(dec!(5.0), &p), dec!(4.5));
    }

    #[test]
    fn government_yield_pays_federal_tax_only() {
        let calculator = YieldCalculator::new(dec!(0.2), dec!(0.1));
        let p = only(dec!(0), dec!(0), dec!(1.0), dec!(0));

        assert_eq!(calculator.after_tax_yield(dec!(5.0), &p), dec!(4.0));
    }

    #[test]
    fn fully_taxable_tax_equivalent_yield_is_the_raw_yield() {
        let calculator = YieldCalculator::new(dec!(0.2), dec!(0.1));
        let p = only(dec!(0), dec!(0), dec!(0), dec!(1.0));

        assert_eq!(calculator.tax_equivalent_yield(dec!(3.5), &p), dec!(3.5));
    }

    #[test]
    fn state_exempt_tax_equivalent_yield_grosses_up_fully() {
        let calculator = YieldCalculator::new(dec!(0.2), dec!(0.1));
        let p = only(dec!(1.0), dec!(0), dec!(0), dec!(0));

        // Round-trips the after-tax example: 5.0 taxed down to 3.5,
        // 3.5 grossed back up to 5.0.
        assert_eq!(calculator.tax_equivalent_yield(dec!(3.5), &p), dec!(5.0));
    }

    #[test]
    fn tax_equivalent_yield_is_at_least_the_after_tax_yield() {
        let calculator = YieldCalculator::new(dec!(0.24), dec!(0.05));
        let p = only(dec!(0.1), dec!(0.2), dec!(0.5), dec!(0.2));

        let after_tax = calculator.after_tax_yield(dec!(4.8), &p);
        let tax_equivalent = calculator.tax_equivalent_yield(dec!(4.8), &p);

        assert!(tax_equivalent >= after_tax, "{tax_equivalent} < {after_tax}");
    }

    #[test]
    fn combined_rate_at_or_above_one_falls_back_to_the_raw_yield() {
        let p = only(dec!(0.5), dec!(0), dec!(0), dec!(0.5));

        let negative_denom = YieldCalculator::new(dec!(0.6), dec!(0.5));
        assert_eq!(negative_denom.tax_equivalent_yield(dec!(5.0), &p), dec!(5.0));

        let zero_denom = YieldCalculator::new(dec!(0.6), dec!(0.4));
        assert_eq!(zero_denom.tax_equivalent_yield(dec!(5.0), &p), dec!(5.0));
    }

    #[test]
    fn evaluate_returns_both_yields() {
        let calculator = YieldCalculator::new(dec!(0.2), dec!(0.1));
        let fund = FundRecord {
            fund_yield: dec!(5.0),
            ..FundRecord::default()
        };
        let p = only(dec!(0), dec!(0), dec!(0), dec!(1.0));

        let result = calculator.evaluate(&fund, &p);

        assert_eq!(result.after_tax_yield, dec!(3.5));
        assert_eq!(result.tax_equivalent_yield, dec!(5.0));
    }
}
