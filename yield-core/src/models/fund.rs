use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Category a fund carries in the yield feed.
///
/// Only [`SingleState`](Self::SingleState) and
/// [`OtherTaxExempt`](Self::OtherTaxExempt) can qualify for municipal tax
/// treatment; everything else is handled through the government-obligation
/// and fully-taxable branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum FundCategory {
    Treasury,
    Government,
    Prime,
    SingleState,
    OtherTaxExempt,
    /// Any category string the feed adds that carries no special tax
    /// treatment.
    #[default]
    Other,
}

impl FundCategory {
    /// Whether funds in this category are eligible for municipal exemption
    /// treatment.
    pub fn is_municipal_eligible(&self) -> bool {
        matches!(self, Self::SingleState | Self::OtherTaxExempt)
    }
}

impl<'de> Deserialize<'de> for FundCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "Treasury" => Self::Treasury,
            "Government" => Self::Government,
            "Prime" => Self::Prime,
            "SingleState" => Self::SingleState,
            "OtherTaxExempt" => Self::OtherTaxExempt,
            _ => Self::Other,
        })
    }
}

fn null_to_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Decimal> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or(Decimal::ZERO))
}

/// One money-market fund as published by the yield feed.
///
/// The composition fields are shares of assets in [0, 1]. The feed omits or
/// nulls fields a fund does not hold; deserialization defaults them to zero so
/// the calculators never branch on missing-vs-present.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundRecord {
    pub ticker: String,
    pub name: String,
    pub category: FundCategory,

    /// Raw annualized yield, as a percentage (5.07 means 5.07%).
    #[serde(rename = "yield")]
    pub fund_yield: Decimal,

    /// Smallest opening investment the fund accepts, in dollars.
    pub minimum_initial_investment: Decimal,

    // Municipal-security composition.
    #[serde(default, deserialize_with = "null_to_zero")]
    pub variable_rate_demand_note: Decimal,
    #[serde(default, deserialize_with = "null_to_zero")]
    pub other_municipal_security: Decimal,
    #[serde(default, deserialize_with = "null_to_zero")]
    pub tender_option_bond: Decimal,
    #[serde(default, deserialize_with = "null_to_zero")]
    pub investment_company: Decimal,
    #[serde(default, deserialize_with = "null_to_zero")]
    pub non_financial_company_commercial_paper: Decimal,

    // U.S. government obligation composition.
    #[serde(default, deserialize_with = "null_to_zero")]
    pub us_treasury_debt: Decimal,
    #[serde(default, deserialize_with = "null_to_zero")]
    pub us_government_agency_debt: Decimal,
}

impl FundRecord {
    /// Sum of the five municipal-security composition fields.
    ///
    /// Category eligibility is not applied here; the proportion calculator
    /// gates this on [`FundCategory::is_municipal_eligible`].
    pub fn municipal_security_total(&self) -> Decimal {
        self.variable_rate_demand_note
            + self.other_municipal_security
            + self.tender_option_bond
            + self.investment_company
            + self.non_financial_company_commercial_paper
    }

    /// Sum of the two U.S. government obligation composition fields.
    pub fn government_obligation_total(&self) -> Decimal {
        self.us_treasury_debt + self.us_government_agency_debt
    }

    /// Case-insensitive containment check against the fund name.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}
