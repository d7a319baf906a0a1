//! `add-transaction` and `get-transactions`

use chrono::NaiveDate;
use serde_json::{json, Value};

use super::args::ParsedArgs;
use crate::client::{BudgetClient, EntityType};
use crate::display::{transaction_rows, TransactionRow};
use crate::error::{ActualError, ActualResult};
use crate::models::{Amount, NewTransaction};

/// Start of the default `get-transactions` range
pub const HISTORY_START: &str = "2000-01-01";

/// Check a flag value is a YYYY-MM-DD date
pub(crate) fn validate_date(flag: &str, value: &str) -> ActualResult<()> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| {
            ActualError::Validation(format!(
                "--{} must be a date in YYYY-MM-DD form, got \"{}\"",
                flag, value
            ))
        })
}

/// A single transaction to add
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTransaction {
    pub account: String,
    pub date: String,
    pub amount: Amount,
    pub payee: Option<String>,
    pub category: Option<String>,
    pub notes: Option<String>,
}

impl AddTransaction {
    pub fn from_args(args: &ParsedArgs) -> ActualResult<Self> {
        let account = args.require("account", "name")?.to_string();
        let date = args.require("date", "YYYY-MM-DD")?.to_string();
        let raw_amount = args.require("amount", "number")?;

        validate_date("date", &date)?;
        let amount =
            Amount::parse(raw_amount).map_err(|e| ActualError::Validation(e.to_string()))?;

        Ok(Self {
            account,
            date,
            amount,
            payee: args.value("payee").map(String::from),
            category: args.value("category").map(String::from),
            notes: args.value("notes").map(String::from),
        })
    }

    /// Resolve names, add the transaction and sync
    ///
    /// A known payee name is sent as a payee id; an unknown one is sent as
    /// raw payee text for the service to create. The category must exist.
    pub async fn run<C: BudgetClient>(&self, client: &C) -> ActualResult<Value> {
        let account_id = client
            .get_id_by_name(EntityType::Accounts, &self.account)
            .await?
            .ok_or_else(|| ActualError::account_not_found(&self.account))?;

        let mut txn = NewTransaction::new(self.date.clone(), self.amount);

        if let Some(payee) = &self.payee {
            match client.get_id_by_name(EntityType::Payees, payee).await? {
                Some(id) => txn.payee = Some(id),
                None => txn.imported_payee = Some(payee.clone()),
            }
        }

        if let Some(category) = &self.category {
            let id = client
                .get_id_by_name(EntityType::Categories, category)
                .await?
                .ok_or_else(|| ActualError::category_not_found(category))?;
            txn.category = Some(id);
        }

        txn.notes = self.notes.clone();

        let ids = client.add_transactions(&account_id, &[txn]).await?;
        client.sync().await?;

        tracing::info!(account = %self.account, "transaction added");
        Ok(json!({ "created": ids.into_iter().next() }))
    }
}

/// Transactions for one account over a date range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetTransactions {
    pub account: String,
    pub from: String,
    pub to: String,
}

impl GetTransactions {
    /// Missing `--from`/`--to` default to the start of history and `today`
    pub fn from_args(args: &ParsedArgs, today: NaiveDate) -> ActualResult<Self> {
        let account = args.require("account", "name")?.to_string();

        let from = args.value("from").unwrap_or(HISTORY_START).to_string();
        let to = args
            .value("to")
            .map(String::from)
            .unwrap_or_else(|| today.format("%Y-%m-%d").to_string());

        validate_date("from", &from)?;
        validate_date("to", &to)?;

        Ok(Self { account, from, to })
    }

    pub async fn run<C: BudgetClient>(&self, client: &C) -> ActualResult<Vec<TransactionRow>> {
        let account_id = client
            .get_id_by_name(EntityType::Accounts, &self.account)
            .await?
            .ok_or_else(|| ActualError::account_not_found(&self.account))?;

        let (transactions, payees, categories) = tokio::try_join!(
            client.get_transactions(&account_id, &self.from, &self.to),
            client.get_payees(),
            client.get_categories(),
        )?;

        tracing::debug!(count = transactions.len(), "fetched transactions");
        Ok(transaction_rows(transactions, &payees, &categories))
    }
}
