//! Payee model

use serde::{Deserialize, Serialize};

/// A payee known to the budget service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payee {
    pub id: String,

    pub name: String,

    /// Default category id, if one has been learned or set
    #[serde(default)]
    pub category: Option<String>,

    /// Set when the payee represents a transfer to another account
    #[serde(default)]
    pub transfer_acct: Option<String>,
}

impl Payee {
    pub fn is_transfer(&self) -> bool {
        self.transfer_acct.is_some()
    }
}
