//! Tax-treatment and yield calculations for money-market funds.
//!
//! The components compose top-down: the filter decides inclusion, the
//! proportion calculator splits a fund's income into tax treatments, the
//! yield calculator prices those treatments against the investor's marginal
//! rates, and the ranking pipeline orders the survivors. Everything here is
//! pure and synchronous: each call operates solely on its arguments.

pub mod filter;
pub mod marginal_rate;
pub mod proportions;
pub mod ranking;
pub mod yields;

pub use filter::FundFilter;
pub use marginal_rate::marginal_rate;
pub use proportions::{TaxPolicy, TaxProportionCalculator};
pub use ranking::rank_funds;
pub use yields::YieldCalculator;
