//! `get-budget`

use chrono::NaiveDate;

use super::args::ParsedArgs;
use crate::client::BudgetClient;
use crate::display::{budget_view, BudgetView};
use crate::error::{ActualError, ActualResult};

/// Budget figures for one month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetBudget {
    /// YYYY-MM
    pub month: String,
}

impl GetBudget {
    pub fn from_args(args: &ParsedArgs) -> ActualResult<Self> {
        let month = args.require("month", "YYYY-MM")?.to_string();

        let valid = month.len() == 7
            && NaiveDate::parse_from_str(&format!("{}-01", month), "%Y-%m-%d").is_ok();
        if !valid {
            return Err(ActualError::Validation(format!(
                "--month must be in YYYY-MM form, got \"{}\"",
                month
            )));
        }

        Ok(Self { month })
    }

    pub async fn run<C: BudgetClient>(&self, client: &C) -> ActualResult<BudgetView> {
        let month = client.get_budget_month(&self.month).await?;
        let (categories, groups) =
            tokio::try_join!(client.get_categories(), client.get_category_groups())?;

        Ok(budget_view(month, &categories, &groups))
    }
}
