//! Budget month output

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{Amount, BudgetMonth, Category, CategoryGroup};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetView {
    pub month: String,
    pub income_available: Amount,
    pub last_month_overspent: Amount,
    pub for_next_month: Amount,
    pub total_budgeted: Amount,
    pub to_budget: Amount,
    pub category_groups: Vec<BudgetGroupView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetGroupView {
    pub id: String,
    pub name: String,
    pub budgeted: Amount,
    pub spent: Amount,
    pub balance: Amount,
    pub categories: Vec<BudgetCategoryView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetCategoryView {
    pub id: String,
    pub name: String,
    pub budgeted: Amount,
    pub spent: Amount,
    pub balance: Amount,
    pub carryover: bool,
}

/// Attach group and category names to a budget month
///
/// Names come from the category lists, falling back to the id.
pub fn budget_view(
    month: BudgetMonth,
    categories: &[Category],
    groups: &[CategoryGroup],
) -> BudgetView {
    let category_names: HashMap<&str, &str> = categories
        .iter()
        .map(|c| (c.id.as_str(), c.name.as_str()))
        .collect();
    let group_names: HashMap<&str, &str> = groups
        .iter()
        .map(|g| (g.id.as_str(), g.name.as_str()))
        .collect();

    let name_of = |names: &HashMap<&str, &str>, id: &str| {
        names.get(id).map(|n| n.to_string()).unwrap_or_else(|| id.to_string())
    };

    BudgetView {
        month: month.month,
        income_available: month.income_available,
        last_month_overspent: month.last_month_overspent,
        for_next_month: month.for_next_month,
        total_budgeted: month.total_budgeted,
        to_budget: month.to_budget,
        category_groups: month
            .category_groups
            .into_iter()
            .map(|g| BudgetGroupView {
                name: name_of(&group_names, &g.id),
                budgeted: g.budgeted,
                spent: g.spent,
                balance: g.balance,
                categories: g
                    .categories
                    .into_iter()
                    .map(|c| BudgetCategoryView {
                        name: name_of(&category_names, &c.id),
                        id: c.id,
                        budgeted: c.budgeted,
                        spent: c.spent,
                        balance: c.balance,
                        carryover: c.carryover,
                    })
                    .collect(),
                id: g.id,
            })
            .collect(),
    }
}
