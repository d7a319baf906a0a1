//! Budget service client
//!
//! [`BudgetClient`] names every operation this crate needs from the budget
//! service. Budgeting logic (balances, carryover, sync) lives behind it; the
//! commands only shape inputs and outputs. [`HttpBudgetClient`] is the
//! production implementation and [`Session`] scopes its lifecycle.

pub mod http;
pub mod session;
#[cfg(test)]
pub mod testing;

use std::path::PathBuf;

use crate::error::ActualResult;
use crate::models::{
    Account, Amount, BudgetMonth, Category, CategoryGroup, ImportOutcome, NewTransaction, Payee,
    Transaction,
};

pub use http::HttpBudgetClient;
pub use session::Session;

/// Connection parameters passed to [`BudgetClient::init`]
#[derive(Clone)]
pub struct ConnectOptions {
    pub data_dir: PathBuf,
    pub server_url: String,
    pub password: String,
}

/// Entity kinds that can be looked up by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityType {
    Accounts,
    Categories,
    Payees,
}

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Accounts => "accounts",
            EntityType::Categories => "categories",
            EntityType::Payees => "payees",
        }
    }
}

/// Operations provided by the budget service
///
/// Lifecycle methods take `&mut self`; everything else is a read or write
/// against the budget opened by [`download_budget`](Self::download_budget).
#[allow(async_fn_in_trait)]
pub trait BudgetClient {
    /// Connect to the server
    async fn init(&mut self, options: &ConnectOptions) -> ActualResult<()>;

    /// Open the budget identified by `sync_id`
    async fn download_budget(
        &mut self,
        sync_id: &str,
        encryption_password: Option<&str>,
    ) -> ActualResult<()>;

    /// Release the connection
    async fn shutdown(&mut self) -> ActualResult<()>;

    async fn get_accounts(&self) -> ActualResult<Vec<Account>>;

    async fn get_account_balance(&self, account_id: &str) -> ActualResult<Amount>;

    async fn get_categories(&self) -> ActualResult<Vec<Category>>;

    async fn get_category_groups(&self) -> ActualResult<Vec<CategoryGroup>>;

    async fn get_payees(&self) -> ActualResult<Vec<Payee>>;

    /// Transactions in `account_id` dated `from..=to` (YYYY-MM-DD)
    async fn get_transactions(
        &self,
        account_id: &str,
        from: &str,
        to: &str,
    ) -> ActualResult<Vec<Transaction>>;

    /// Budget figures for a month (YYYY-MM)
    async fn get_budget_month(&self, month: &str) -> ActualResult<BudgetMonth>;

    /// Add transactions, returning the new ids
    async fn add_transactions(
        &self,
        account_id: &str,
        transactions: &[NewTransaction],
    ) -> ActualResult<Vec<String>>;

    /// Import transactions, letting the service reconcile duplicates
    async fn import_transactions(
        &self,
        account_id: &str,
        transactions: &[NewTransaction],
    ) -> ActualResult<ImportOutcome>;

    /// Push local changes to the server
    async fn sync(&self) -> ActualResult<()>;

    /// Find an entity id by exact name
    async fn get_id_by_name(&self, entity: EntityType, name: &str) -> ActualResult<Option<String>> {
        tracing::debug!(entity = entity.as_str(), name, "looking up id by name");

        let id = match entity {
            EntityType::Accounts => self
                .get_accounts()
                .await?
                .into_iter()
                .find(|a| a.name == name)
                .map(|a| a.id),
            EntityType::Categories => self
                .get_categories()
                .await?
                .into_iter()
                .find(|c| c.name == name)
                .map(|c| c.id),
            EntityType::Payees => self
                .get_payees()
                .await?
                .into_iter()
                .find(|p| p.name == name)
                .map(|p| p.id),
        };

        Ok(id)
    }
}
