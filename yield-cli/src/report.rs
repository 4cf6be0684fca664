//! Plain-text rendering of the ranked fund report.

use rust_decimal::Decimal;
use yield_core::models::RankedFund;

/// Dollar distributions `amount` would earn over 12 months at an annualized
/// percentage yield.
fn distributions(amount: Decimal, yield_pct: Decimal) -> Decimal {
    amount * yield_pct / Decimal::ONE_HUNDRED
}

/// Prints the ranked funds with their yields and the distributions the
/// investment amount would earn in each.
pub fn print_ranked(ranked: &[RankedFund], investment_amount: Decimal) {
    println!(
        "Top {} money market funds by tax-equivalent yield:",
        ranked.len()
    );
    for (index, entry) in ranked.iter().enumerate() {
        println!("Rank: {}", index + 1);
        println!("Ticker: {}", entry.fund.ticker);
        println!("Name: {}", entry.fund.name);
        println!("After-tax yield: {:.2}%", entry.after_tax_yield);
        println!("Tax-equivalent yield: {:.2}%", entry.tax_equivalent_yield);
        println!(
            "After-tax distributions on ${:.2} over 12 months: ${:.2}",
            investment_amount,
            distributions(investment_amount, entry.after_tax_yield)
        );
        println!("--------------");
    }
}

/// Prints the same after-tax figures for a bank account at `bank_apy`,
/// applying the federal rate to the fully-taxable interest.
pub fn print_bank_comparison(bank_apy: Decimal, federal_rate: Decimal, investment_amount: Decimal) {
    let after_tax = bank_apy * (Decimal::ONE - federal_rate);
    println!("Bank after-tax yield: {after_tax:.2}%");
    println!(
        "Bank after-tax distributions on ${:.2} over 12 months: ${:.2}",
        investment_amount,
        distributions(investment_amount, after_tax)
    );
    println!("--------------");
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn distributions_scale_the_amount_by_the_percentage_yield() {
        assert_eq!(distributions(dec!(10000), dec!(3.5)), dec!(350));
        assert_eq!(distributions(dec!(0), dec!(5.0)), dec!(0));
    }
}
