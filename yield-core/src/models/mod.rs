mod fund;
mod proportions;
mod state;
mod tax_bracket;
mod yield_result;

pub use fund::{FundCategory, FundRecord};
pub use proportions::TaxProportions;
pub use state::StateDirectory;
pub use tax_bracket::{BracketTable, BracketTableError, TaxBracket};
pub use yield_result::{RankedFund, YieldResult};
