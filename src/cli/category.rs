//! `list-categories`

use crate::client::BudgetClient;
use crate::display::{group_categories, CategoryGroupRow};
use crate::error::ActualResult;

/// Categories grouped under their category groups
pub async fn list_categories<C: BudgetClient>(client: &C) -> ActualResult<Vec<CategoryGroupRow>> {
    let categories = client.get_categories().await?;
    let groups = client.get_category_groups().await?;

    Ok(group_categories(categories, &groups))
}
