use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::FundRecord;

/// After-tax and tax-equivalent yields for one fund, in the same percentage
/// units as the feed's raw yield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YieldResult {
    pub after_tax_yield: Decimal,
    pub tax_equivalent_yield: Decimal,
}

/// A fund that survived filtering, augmented with its computed yields.
///
/// This is the row handed to presentation; the ranking pipeline returns these
/// ordered descending by `tax_equivalent_yield`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedFund {
    #[serde(flatten)]
    pub fund: FundRecord,
    pub after_tax_yield: Decimal,
    pub tax_equivalent_yield: Decimal,
}
