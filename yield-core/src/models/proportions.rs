use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a fund's income divides among tax treatments for one (fund, state)
/// pair.
///
/// The four fields partition unity: `fully_taxable` is always the residual
/// `1 - (state_exempt + other_municipal + government)`. Proportions are
/// recomputed per call by the proportion calculator and never cached or
/// mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxProportions {
    /// In-state municipal share: exempt from both federal and state tax.
    pub state_exempt: Decimal,

    /// Out-of-state or general municipal share: exempt from federal tax,
    /// taxed by the state. Mutually exclusive with `state_exempt`.
    pub other_municipal: Decimal,

    /// U.S. government obligation share: taxed federally, exempt from state
    /// tax.
    pub government: Decimal,

    /// Residual share taxed by both authorities. Not clamped: composition
    /// data summing above 1 drives this negative, and the calculator warns
    /// rather than silently correcting it.
    pub fully_taxable: Decimal,
}

impl TaxProportions {
    /// Sum of all four proportions. Equals 1 by construction for any input.
    pub fn total(&self) -> Decimal {
        self.state_exempt + self.other_municipal + self.government + self.fully_taxable
    }
}
