//! Category output

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{Category, CategoryGroup};

/// A group and the categories that belong to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroupRow {
    /// Group name, or the group id if the group is unknown
    pub group: String,
    pub id: String,
    pub categories: Vec<CategoryRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRow {
    pub id: String,
    pub name: String,
    pub is_income: bool,
}

/// Group categories by `group_id`, in the order groups are first seen
pub fn group_categories(
    categories: Vec<Category>,
    groups: &[CategoryGroup],
) -> Vec<CategoryGroupRow> {
    let group_names: HashMap<&str, &str> = groups
        .iter()
        .map(|g| (g.id.as_str(), g.name.as_str()))
        .collect();

    let mut rows: Vec<CategoryGroupRow> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for category in categories {
        let slot = *index.entry(category.group_id.clone()).or_insert_with(|| {
            rows.push(CategoryGroupRow {
                group: group_names
                    .get(category.group_id.as_str())
                    .map(|name| name.to_string())
                    .unwrap_or_else(|| category.group_id.clone()),
                id: category.group_id.clone(),
                categories: Vec::new(),
            });
            rows.len() - 1
        });

        rows[slot].categories.push(CategoryRow {
            id: category.id,
            name: category.name,
            is_income: category.is_income,
        });
    }

    rows
}
