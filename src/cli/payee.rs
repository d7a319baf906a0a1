//! `list-payees`

use crate::client::BudgetClient;
use crate::display::{payee_rows, PayeeRow};
use crate::error::ActualResult;

pub async fn list_payees<C: BudgetClient>(client: &C) -> ActualResult<Vec<PayeeRow>> {
    let payees = client.get_payees().await?;
    Ok(payee_rows(payees))
}
