//! Account model

use serde::{Deserialize, Serialize};

/// An account as reported by the budget service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,

    pub name: String,

    /// Off-budget accounts are tracked but not budgeted
    #[serde(default)]
    pub offbudget: bool,

    #[serde(default)]
    pub closed: bool,
}

impl Account {
    pub fn is_open(&self) -> bool {
        !self.closed
    }
}
