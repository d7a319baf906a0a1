//! Transaction models
//!
//! [`Transaction`] is what the service returns; [`NewTransaction`] is what
//! the add and import commands send.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Amount;

/// A stored transaction
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transaction {
    pub id: String,

    #[serde(default)]
    pub account: Option<String>,

    /// Date in YYYY-MM-DD form
    pub date: String,

    pub amount: Amount,

    /// Payee id
    #[serde(default)]
    pub payee: Option<String>,

    /// Category id
    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub notes: Option<String>,

    #[serde(default)]
    pub cleared: bool,

    #[serde(default)]
    pub imported_id: Option<String>,
}

/// A transaction to be created, in the service's wire shape
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewTransaction {
    pub date: String,

    /// Integer cents
    pub amount: i64,

    /// Existing payee id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payee: Option<String>,

    /// Raw payee text, for the service to match or create
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imported_payee: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub imported_id: Option<String>,
}

impl NewTransaction {
    pub fn new(date: impl Into<String>, amount: Amount) -> Self {
        Self {
            date: date.into(),
            amount: amount.cents(),
            ..Self::default()
        }
    }
}

/// What an import reported back
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ImportOutcome {
    /// Ids of newly created transactions
    #[serde(default)]
    pub added: Vec<String>,

    /// Ids of existing transactions that were matched and updated
    #[serde(default)]
    pub updated: Vec<String>,

    /// Per-row errors, passed through as reported
    #[serde(default)]
    pub errors: Vec<Value>,
}
