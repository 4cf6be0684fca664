//! The end-to-end pipeline: filter, partition, price, order.

use crate::calculations::{FundFilter, TaxProportionCalculator, YieldCalculator};
use crate::models::{FundRecord, RankedFund};

/// Runs every fund through the filter and both calculators, returning the
/// survivors ordered descending by tax-equivalent yield, truncated to `top`.
///
/// Each fund is evaluated independently against its own record; there is no
/// shared state between evaluations.
pub fn rank_funds(
    funds: Vec<FundRecord>,
    state: &str,
    filter: &FundFilter,
    proportions: &TaxProportionCalculator,
    yields: &YieldCalculator,
    top: usize,
) -> Vec<RankedFund> {
    let mut ranked: Vec<RankedFund> = funds
        .into_iter()
        .filter(|fund| filter.matches(fund))
        .map(|fund| {
            let p = proportions.calculate(&fund, state);
            let result = yields.evaluate(&fund, &p);
            RankedFund {
                fund,
                after_tax_yield: result.after_tax_yield,
                tax_equivalent_yield: result.tax_equivalent_yield,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.tax_equivalent_yield.cmp(&a.tax_equivalent_yield));
    ranked.truncate(top);
    ranked
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::{FundCategory, FundRecord};
    use rust_decimal::Decimal;

    fn taxable_fund(ticker: &str, fund_yield: Decimal, minimum: Decimal) -> FundRecord {
        FundRecord {
            ticker: ticker.into(),
            name: format!("{ticker} Prime Money Fund"),
            category: FundCategory::Prime,
            fund_yield,
            minimum_initial_investment: minimum,
            ..FundRecord::default()
        }
    }

    #[test]
    fn orders_descending_by_tax_equivalent_yield() {
        let funds = vec![
            taxable_fund("LOWX", dec!(3.0), dec!(0)),
            taxable_fund("HIGH", dec!(5.2), dec!(0)),
            taxable_fund("MIDX", dec!(4.1), dec!(0)),
        ];
        let filter = FundFilter::new(dec!(10000), None);
        let proportions = TaxProportionCalculator::default();
        let yields = YieldCalculator::new(dec!(0.22), dec!(0));

        let ranked = rank_funds(funds, "NONE", &filter, &proportions, &yields, 5);

        let tickers: Vec<_> = ranked.iter().map(|r| r.fund.ticker.as_str()).collect();
        assert_eq!(tickers, vec!["HIGH", "MIDX", "LOWX"]);
    }

    #[test]
    fn truncates_to_the_requested_count() {
        let funds = vec![
            taxable_fund("AAAA", dec!(3.0), dec!(0)),
            taxable_fund("BBBB", dec!(4.0), dec!(0)),
            taxable_fund("CCCC", dec!(5.0), dec!(0)),
        ];
        let filter = FundFilter::new(dec!(10000), None);
        let proportions = TaxProportionCalculator::default();
        let yields = YieldCalculator::new(dec!(0.22), dec!(0));

        let ranked = rank_funds(funds, "NONE", &filter, &proportions, &yields, 2);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].fund.ticker, "CCCC");
    }

    #[test]
    fn filtered_funds_never_appear_even_with_the_best_yield() {
        let funds = vec![
            taxable_fund("RICH", dec!(9.0), dec!(5000000)),
            taxable_fund("OKAY", dec!(4.0), dec!(0)),
        ];
        let filter = FundFilter::new(dec!(10000), None);
        let proportions = TaxProportionCalculator::default();
        let yields = YieldCalculator::new(dec!(0.22), dec!(0));

        let ranked = rank_funds(funds, "NONE", &filter, &proportions, &yields, 5);

        let tickers: Vec<_> = ranked.iter().map(|r| r.fund.ticker.as_str()).collect();
        assert_eq!(tickers, vec!["OKAY"]);
    }

    #[test]
    fn fully_taxable_funds_rank_by_raw_yield() {
        let funds = vec![taxable_fund("ONLY", dec!(4.0), dec!(0))];
        let filter = FundFilter::new(dec!(10000), None);
        let proportions = TaxProportionCalculator::default();
        let yields = YieldCalculator::new(dec!(0.22), dec!(0.05));

        let ranked = rank_funds(funds, "NONE", &filter, &proportions, &yields, 5);

        // A fully taxable fund's tax-equivalent yield is its raw yield.
        assert_eq!(ranked[0].tax_equivalent_yield, dec!(4.0));
        assert_eq!(ranked[0].after_tax_yield, dec!(2.92));
    }
}
