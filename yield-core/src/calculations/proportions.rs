//! Splitting a fund's income into tax-treatment proportions.
//!
//! For a given (fund, state) pair the calculator produces four proportions
//! that partition unity:
//!
//! - `state_exempt` — in-state municipal income, taxed by nobody
//! - `other_municipal` — out-of-state/general municipal income, state tax only
//! - `government` — U.S. government obligation income, federal tax only
//! - `fully_taxable` — the residual, taxed by both authorities
//!
//! Two jurisdiction rules apply. New Jersey only recognizes a single-state
//! fund when at least 80% of its municipal exposure is in-state, and a small
//! set of states (California, New York, Connecticut) only grant the
//! government-obligation exemption when such holdings are at least half the
//! fund. Both boundaries are inclusive; both live in [`TaxPolicy`] so
//! jurisdictions can be added without touching calculation code.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use yield_core::calculations::TaxProportionCalculator;
//! use yield_core::models::{FundCategory, FundRecord};
//!
//! let calculator = TaxProportionCalculator::default();
//! let fund = FundRecord {
//!     name: "Vanguard New York Municipal Money Market Fund".into(),
//!     category: FundCategory::SingleState,
//!     variable_rate_demand_note: dec!(0.6),
//!     other_municipal_security: dec!(0.4),
//!     ..FundRecord::default()
//! };
//!
//! let proportions = calculator.calculate(&fund, "NY");
//! assert_eq!(proportions.state_exempt, dec!(1.0));
//! assert_eq!(proportions.fully_taxable, dec!(0));
//!
//! let proportions = calculator.calculate(&fund, "CA");
//! assert_eq!(proportions.state_exempt, dec!(0));
//! assert_eq!(proportions.other_municipal, dec!(1.0));
//! ```

use rust_decimal::Decimal;
use tracing::warn;

use crate::models::{FundRecord, StateDirectory, TaxProportions};

/// State code meaning "no state of residence"; never matches a fund.
const NO_STATE: &str = "NONE";
/// Legacy alias for [`NO_STATE`] used by general/national portfolios.
const GENERAL: &str = "GEN";
const NEW_JERSEY: &str = "NJ";
const DISTRICT_OF_COLUMBIA: &str = "DC";

/// Jurisdiction rules applied by the proportion calculator.
///
/// `Default` reflects current law: CA, NY and CT gate the
/// government-obligation exemption at 50%, and New Jersey gates single-state
/// recognition at 80% municipal exposure.
#[derive(Debug, Clone)]
pub struct TaxPolicy {
    /// States that only grant the government-obligation exemption when the
    /// obligation share meets `government_floor`.
    pub fifty_percent_states: Vec<String>,

    /// Inclusive floor for the fifty-percent rule.
    pub government_floor: Decimal,

    /// Inclusive municipal-share floor for New Jersey's single-state rule.
    pub new_jersey_floor: Decimal,
}

impl Default for TaxPolicy {
    fn default() -> Self {
        Self {
            fifty_percent_states: vec!["CA".into(), "NY".into(), "CT".into()],
            government_floor: Decimal::new(5, 1),
            new_jersey_floor: Decimal::new(8, 1),
        }
    }
}

/// Computes [`TaxProportions`] for (fund, state) pairs.
///
/// Pure and synchronous: proportions are derived fresh on every call and the
/// fund record is never mutated.
#[derive(Debug, Clone, Default)]
pub struct TaxProportionCalculator {
    policy: TaxPolicy,
    directory: StateDirectory,
}

impl TaxProportionCalculator {
    pub fn new(policy: TaxPolicy, directory: StateDirectory) -> Self {
        Self { policy, directory }
    }

    /// Municipal share of the fund: the sum of the five municipal-security
    /// composition fields, or zero when the category is not
    /// municipal-eligible.
    pub fn municipal_percent(&self, fund: &FundRecord) -> Decimal {
        if fund.category.is_municipal_eligible() {
            fund.municipal_security_total()
        } else {
            Decimal::ZERO
        }
    }

    /// Whether the fund is an in-state fund for `state`.
    ///
    /// `NONE` and `GEN` never match. `DC` always matches: District funds
    /// rarely carry the district's name. Otherwise the state's canonical name
    /// must appear in the fund name, case-insensitively; a code the directory
    /// cannot resolve matches nothing rather than failing.
    pub fn state_match(&self, fund: &FundRecord, state: &str) -> bool {
        if state.eq_ignore_ascii_case(NO_STATE) || state.eq_ignore_ascii_case(GENERAL) {
            return false;
        }
        if state.eq_ignore_ascii_case(DISTRICT_OF_COLUMBIA) {
            return true;
        }
        match self.directory.name_of(state) {
            Some(name) => fund.name_contains(name),
            None => false,
        }
    }

    /// In-state municipal proportion, exempt from federal and state tax.
    ///
    /// Zero unless the fund matches the investor's state, and — for New
    /// Jersey — unless the municipal share meets the 80% floor (inclusive).
    pub fn state_exempt(&self, fund: &FundRecord, state: &str) -> Decimal {
        let muni = self.municipal_percent(fund);
        let nj_satisfied =
            !state.eq_ignore_ascii_case(NEW_JERSEY) || muni >= self.policy.new_jersey_floor;
        if self.state_match(fund, state) && nj_satisfied {
            muni
        } else {
            Decimal::ZERO
        }
    }

    /// Out-of-state or general municipal proportion, exempt from federal tax
    /// only. Non-zero exactly when the fund does not match the investor's
    /// state, so it is mutually exclusive with [`state_exempt`](Self::state_exempt).
    pub fn other_municipal(&self, fund: &FundRecord, state: &str) -> Decimal {
        if self.state_match(fund, state) {
            Decimal::ZERO
        } else {
            self.municipal_percent(fund)
        }
    }

    /// U.S. government obligation proportion, exempt from state tax only.
    ///
    /// In the configured fifty-percent states the share only counts when it
    /// meets the floor (inclusive); everywhere else the raw sum is used.
    pub fn government(&self, fund: &FundRecord, state: &str) -> Decimal {
        let usgo = fund.government_obligation_total();
        let gated = self
            .policy
            .fifty_percent_states
            .iter()
            .any(|s| s.eq_ignore_ascii_case(state));
        if gated && usgo < self.policy.government_floor {
            Decimal::ZERO
        } else {
            usgo
        }
    }

    /// Computes the full partition for one (fund, state) pair.
    ///
    /// The fully-taxable proportion is the residual and is deliberately not
    /// clamped; composition fields summing above 1 drive it negative, which
    /// is logged and propagated so bad feed data stays visible downstream.
    pub fn calculate(&self, fund: &FundRecord, state: &str) -> TaxProportions {
        let state_exempt = self.state_exempt(fund, state);
        let other_municipal = self.other_municipal(fund, state);
        let government = self.government(fund, state);
        let fully_taxable = Decimal::ONE - (state_exempt + other_municipal + government);
        if fully_taxable < Decimal::ZERO {
            warn!(
                ticker = %fund.ticker,
                %fully_taxable,
                "composition fields sum above 1; residual proportion is negative"
            );
        }
        TaxProportions {
            state_exempt,
            other_municipal,
            government,
            fully_taxable,
        }
    }
}
