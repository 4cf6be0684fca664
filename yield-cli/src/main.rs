//! Ranks money-market funds by the yield they are worth after taxes, for one
//! investor's state and marginal rates.

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;
use yield_core::calculations::{
    FundFilter, TaxProportionCalculator, YieldCalculator, marginal_rate, rank_funds,
};
use yield_data::{BracketTableLoader, FundFeedClient, load_funds};

mod report;

/// Rank money-market funds by tax-equivalent yield.
///
/// Tax rates are decimals (0.22, not 22). The federal rate can instead be
/// resolved from taxable income against a bracket-schedule CSV with
/// `threshold,rate` columns.
#[derive(Parser, Debug)]
#[command(name = "yield-optimizer")]
#[command(version, about, long_about = None)]
struct Args {
    /// Two-letter state code, or NONE/GEN for no state treatment
    #[arg(short, long, default_value = "NONE")]
    state: String,

    /// Marginal federal tax rate as a decimal in [0, 1)
    #[arg(long, conflicts_with = "income")]
    federal_tax_rate: Option<Decimal>,

    /// Taxable income; resolves the federal rate via --federal-brackets
    #[arg(long, requires = "federal_brackets")]
    income: Option<Decimal>,

    /// CSV bracket schedule used with --income
    #[arg(long)]
    federal_brackets: Option<PathBuf>,

    /// Marginal state tax rate as a decimal in [0, 1)
    #[arg(long, default_value = "0")]
    state_tax_rate: Decimal,

    /// Amount to invest; funds with higher minimums are skipped
    #[arg(short, long)]
    investment_amount: Decimal,

    /// Only include funds whose name contains this issuer, case-insensitively
    #[arg(long)]
    issuer: Option<String>,

    /// How many funds to show
    #[arg(long, default_value_t = 5)]
    top: usize,

    /// Bank APY (as a percentage) to compare against
    #[arg(long)]
    bank_apy: Option<Decimal>,

    /// Read the feed JSON from a local file instead of over HTTP
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Override the feed URL
    #[arg(long, default_value = yield_data::DEFAULT_FEED_URL)]
    url: String,
}

/// Federal rate from the flag, or resolved from income against the schedule.
fn resolve_federal_rate(args: &Args) -> Result<Decimal> {
    match (args.federal_tax_rate, args.income, &args.federal_brackets) {
        (Some(rate), _, _) => Ok(rate),
        (None, Some(income), Some(path)) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open bracket schedule: {}", path.display()))?;
            let table = BracketTableLoader::parse(file)
                .with_context(|| format!("failed to parse bracket schedule: {}", path.display()))?;
            let rate = marginal_rate(income, &table);
            tracing::info!(%income, %rate, "resolved federal rate from bracket schedule");
            Ok(rate)
        }
        _ => bail!("provide --federal-tax-rate, or --income with --federal-brackets"),
    }
}

fn check_rate(name: &str, rate: Decimal) -> Result<()> {
    if rate < Decimal::ZERO || rate >= Decimal::ONE {
        bail!("{name} must be a decimal in [0, 1), got {rate}");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let federal_rate = resolve_federal_rate(&args)?;
    check_rate("federal tax rate", federal_rate)?;
    check_rate("state tax rate", args.state_tax_rate)?;
    let state = args.state.to_ascii_uppercase();

    let funds = match &args.file {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open feed file: {}", path.display()))?;
            load_funds(file)
                .with_context(|| format!("failed to parse feed file: {}", path.display()))?
        }
        None => FundFeedClient::new(&args.url)
            .fetch_funds()
            .await
            .context("failed to fetch the fund yield feed")?,
    };

    let filter = FundFilter::new(args.investment_amount, args.issuer.clone());
    let proportions = TaxProportionCalculator::default();
    let yields = YieldCalculator::new(federal_rate, args.state_tax_rate);
    let ranked = rank_funds(funds, &state, &filter, &proportions, &yields, args.top);

    report::print_ranked(&ranked, args.investment_amount);
    if let Some(bank_apy) = args.bank_apy {
        report::print_bank_comparison(bank_apy, federal_rate, args.investment_amount);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn args_parse_with_an_explicit_federal_rate() {
        let args = Args::try_parse_from([
            "yield-optimizer",
            "--investment-amount",
            "10000",
            "--federal-tax-rate",
            "0.24",
            "--state",
            "ca",
            "--state-tax-rate",
            "0.093",
        ])
        .unwrap();

        assert_eq!(resolve_federal_rate(&args).unwrap(), dec!(0.24));
        assert_eq!(args.state_tax_rate, dec!(0.093));
        assert_eq!(args.top, 5);
    }

    #[test]
    fn args_require_a_rate_or_an_income_with_brackets() {
        let args =
            Args::try_parse_from(["yield-optimizer", "--investment-amount", "10000"]).unwrap();

        assert!(resolve_federal_rate(&args).is_err());
    }

    #[test]
    fn income_without_brackets_is_rejected_at_parse_time() {
        let result = Args::try_parse_from([
            "yield-optimizer",
            "--investment-amount",
            "10000",
            "--income",
            "100000",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn rates_outside_the_unit_interval_are_rejected() {
        assert!(check_rate("federal tax rate", dec!(1.0)).is_err());
        assert!(check_rate("federal tax rate", dec!(-0.1)).is_err());
        assert!(check_rate("federal tax rate", dec!(0.99)).is_ok());
        assert!(check_rate("state tax rate", dec!(0)).is_ok());
    }
}
