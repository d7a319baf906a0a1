//! Payee output

use serde::Serialize;

use crate::models::Payee;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayeeRow {
    pub id: String,
    pub name: String,
    /// Default category id
    pub category: Option<String>,
}

/// Payees minus the transfer payees the service creates for each account
pub fn payee_rows(payees: Vec<Payee>) -> Vec<PayeeRow> {
    payees
        .into_iter()
        .filter(|p| !p.is_transfer())
        .map(|p| PayeeRow {
            id: p.id,
            name: p.name,
            category: p.category,
        })
        .collect()
}
