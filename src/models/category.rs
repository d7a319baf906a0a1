//! Category and category group models

use serde::{Deserialize, Serialize};

/// A budget category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub is_income: bool,

    #[serde(default)]
    pub hidden: bool,

    /// Owning category group
    pub group_id: String,
}

/// A named collection of categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub is_income: bool,

    #[serde(default)]
    pub hidden: bool,

    #[serde(default)]
    pub categories: Vec<Category>,
}
