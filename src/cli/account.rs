//! `list-accounts`

use crate::client::BudgetClient;
use crate::display::{account_rows, AccountRow};
use crate::error::ActualResult;

/// Open accounts with their current balances
pub async fn list_accounts<C: BudgetClient>(client: &C) -> ActualResult<Vec<AccountRow>> {
    let accounts = client.get_accounts().await?;

    let mut with_balances = Vec::new();
    for account in accounts.into_iter().filter(|a| a.is_open()) {
        let balance = client.get_account_balance(&account.id).await?;
        with_balances.push((account, balance));
    }

    Ok(account_rows(with_balances))
}
