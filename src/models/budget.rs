//! Budget month models
//!
//! The service computes every figure here; this crate only renames and
//! converts them for output.

use serde::Deserialize;

use super::Amount;

/// Summary of one budget month
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetMonth {
    /// Month in YYYY-MM form
    pub month: String,

    #[serde(default)]
    pub income_available: Amount,

    #[serde(default)]
    pub last_month_overspent: Amount,

    #[serde(default)]
    pub for_next_month: Amount,

    #[serde(default)]
    pub total_budgeted: Amount,

    #[serde(default)]
    pub to_budget: Amount,

    #[serde(default)]
    pub category_groups: Vec<BudgetMonthGroup>,
}

/// Per-group totals within a budget month
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BudgetMonthGroup {
    pub id: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub budgeted: Amount,

    #[serde(default)]
    pub spent: Amount,

    #[serde(default)]
    pub balance: Amount,

    #[serde(default)]
    pub categories: Vec<BudgetMonthCategory>,
}

/// Per-category figures within a budget month
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BudgetMonthCategory {
    pub id: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub budgeted: Amount,

    #[serde(default)]
    pub spent: Amount,

    #[serde(default)]
    pub balance: Amount,

    /// Unspent budget rolls into the next month
    #[serde(default)]
    pub carryover: bool,
}
