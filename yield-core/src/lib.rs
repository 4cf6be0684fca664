pub mod calculations;
pub mod models;

pub use calculations::{
    FundFilter, TaxPolicy, TaxProportionCalculator, YieldCalculator, marginal_rate, rank_funds,
};
pub use models::*;
