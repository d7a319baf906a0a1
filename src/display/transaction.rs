//! Transaction output

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{Amount, Category, Payee, Transaction};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub amount: Amount,
    /// Payee name, else the raw payee id
    pub payee: Option<String>,
    /// Category name, else the raw category id
    pub category: Option<String>,
    pub notes: Option<String>,
    pub cleared: bool,
    pub imported_id: Option<String>,
}

/// Resolve payee and category ids to names
pub fn transaction_rows(
    transactions: Vec<Transaction>,
    payees: &[Payee],
    categories: &[Category],
) -> Vec<TransactionRow> {
    let payee_names: HashMap<&str, &str> = payees
        .iter()
        .map(|p| (p.id.as_str(), p.name.as_str()))
        .collect();
    let category_names: HashMap<&str, &str> = categories
        .iter()
        .map(|c| (c.id.as_str(), c.name.as_str()))
        .collect();

    let resolve = |names: &HashMap<&str, &str>, id: Option<String>| {
        id.filter(|id| !id.is_empty())
            .map(|id| names.get(id.as_str()).map(|n| n.to_string()).unwrap_or(id))
    };

    transactions
        .into_iter()
        .map(|t| TransactionRow {
            id: t.id,
            date: t.date,
            amount: t.amount,
            payee: resolve(&payee_names, t.payee),
            category: resolve(&category_names, t.category),
            notes: t.notes,
            cleared: t.cleared,
            imported_id: t.imported_id,
        })
        .collect()
}
