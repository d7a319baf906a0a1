//! Account output

use serde::Serialize;

use crate::models::{Account, Amount};

/// One open account with its balance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountRow {
    pub id: String,
    pub name: String,
    pub offbudget: bool,
    pub balance: Amount,
}

/// Pair accounts with their balances
pub fn account_rows(accounts: Vec<(Account, Amount)>) -> Vec<AccountRow> {
    accounts
        .into_iter()
        .map(|(account, balance)| AccountRow {
            id: account.id,
            name: account.name,
            offbudget: account.offbudget,
            balance,
        })
        .collect()
}
