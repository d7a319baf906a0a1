//! In-memory [`BudgetClient`] for tests
//!
//! Serves canned data and records every call, so tests can check both the
//! output of a command and which service operations it reached.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde_json::Value;

use super::{BudgetClient, ConnectOptions};
use crate::error::{ActualError, ActualResult};
use crate::models::{
    Account, Amount, BudgetMonth, Category, CategoryGroup, ImportOutcome, NewTransaction, Payee,
    Transaction,
};

/// Shared log of operation names, in call order
pub type CallLog = Rc<RefCell<Vec<String>>>;

#[derive(Default)]
pub struct MemoryClient {
    pub accounts: Vec<Account>,
    pub balances: HashMap<String, Amount>,
    pub categories: Vec<Category>,
    pub groups: Vec<CategoryGroup>,
    pub payees: Vec<Payee>,
    pub transactions: Vec<Transaction>,
    pub months: HashMap<String, BudgetMonth>,
    /// Returned as the per-row errors of every import
    pub import_errors: Vec<Value>,
    pub fail_download: bool,
    pub calls: CallLog,
    /// Everything passed to add or import, with its account id
    pub written: Rc<RefCell<Vec<(String, NewTransaction)>>>,
}

impl MemoryClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account(mut self, id: &str, name: &str, balance_cents: i64) -> Self {
        self.accounts.push(Account {
            id: id.into(),
            name: name.into(),
            offbudget: false,
            closed: false,
        });
        self.balances
            .insert(id.into(), Amount::from_cents(balance_cents));
        self
    }

    pub fn with_closed_account(mut self, id: &str, name: &str) -> Self {
        self.accounts.push(Account {
            id: id.into(),
            name: name.into(),
            offbudget: false,
            closed: true,
        });
        self
    }

    pub fn with_group(mut self, id: &str, name: &str) -> Self {
        self.groups.push(CategoryGroup {
            id: id.into(),
            name: name.into(),
            is_income: false,
            hidden: false,
            categories: Vec::new(),
        });
        self
    }

    pub fn with_category(mut self, id: &str, name: &str, group_id: &str) -> Self {
        self.categories.push(Category {
            id: id.into(),
            name: name.into(),
            is_income: false,
            hidden: false,
            group_id: group_id.into(),
        });
        self
    }

    pub fn with_payee(mut self, id: &str, name: &str) -> Self {
        self.payees.push(Payee {
            id: id.into(),
            name: name.into(),
            category: None,
            transfer_acct: None,
        });
        self
    }

    pub fn with_transaction(mut self, transaction: Transaction) -> Self {
        self.transactions.push(transaction);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: &str) {
        self.calls.borrow_mut().push(call.to_string());
    }
}

impl BudgetClient for MemoryClient {
    async fn init(&mut self, _options: &ConnectOptions) -> ActualResult<()> {
        self.record("init");
        Ok(())
    }

    async fn download_budget(
        &mut self,
        _sync_id: &str,
        _encryption_password: Option<&str>,
    ) -> ActualResult<()> {
        self.record("download_budget");
        if self.fail_download {
            return Err(ActualError::Service("Could not download budget".into()));
        }
        Ok(())
    }

    async fn shutdown(&mut self) -> ActualResult<()> {
        self.record("shutdown");
        Ok(())
    }

    async fn get_accounts(&self) -> ActualResult<Vec<Account>> {
        self.record("get_accounts");
        Ok(self.accounts.clone())
    }

    async fn get_account_balance(&self, account_id: &str) -> ActualResult<Amount> {
        self.record("get_account_balance");
        Ok(self.balances.get(account_id).copied().unwrap_or_default())
    }

    async fn get_categories(&self) -> ActualResult<Vec<Category>> {
        self.record("get_categories");
        Ok(self.categories.clone())
    }

    async fn get_category_groups(&self) -> ActualResult<Vec<CategoryGroup>> {
        self.record("get_category_groups");
        Ok(self.groups.clone())
    }

    async fn get_payees(&self) -> ActualResult<Vec<Payee>> {
        self.record("get_payees");
        Ok(self.payees.clone())
    }

    async fn get_transactions(
        &self,
        account_id: &str,
        from: &str,
        to: &str,
    ) -> ActualResult<Vec<Transaction>> {
        self.record("get_transactions");
        Ok(self
            .transactions
            .iter()
            .filter(|t| t.account.as_deref() == Some(account_id))
            .filter(|t| t.date.as_str() >= from && t.date.as_str() <= to)
            .cloned()
            .collect())
    }

    async fn get_budget_month(&self, month: &str) -> ActualResult<BudgetMonth> {
        self.record("get_budget_month");
        self.months
            .get(month)
            .cloned()
            .ok_or_else(|| ActualError::Service(format!("No budget for month {}", month)))
    }

    async fn add_transactions(
        &self,
        account_id: &str,
        transactions: &[NewTransaction],
    ) -> ActualResult<Vec<String>> {
        self.record("add_transactions");
        let mut written = self.written.borrow_mut();
        let ids = transactions
            .iter()
            .map(|t| {
                written.push((account_id.to_string(), t.clone()));
                format!("txn-{}", written.len())
            })
            .collect();
        Ok(ids)
    }

    async fn import_transactions(
        &self,
        account_id: &str,
        transactions: &[NewTransaction],
    ) -> ActualResult<ImportOutcome> {
        self.record("import_transactions");
        let mut outcome = ImportOutcome {
            errors: self.import_errors.clone(),
            ..ImportOutcome::default()
        };
        let mut written = self.written.borrow_mut();

        for txn in transactions {
            let existing = self.transactions.iter().find(|t| {
                t.imported_id.is_some() && t.imported_id == txn.imported_id
            });
            match existing {
                Some(t) => outcome.updated.push(t.id.clone()),
                None => {
                    written.push((account_id.to_string(), txn.clone()));
                    outcome.added.push(format!("txn-{}", written.len()));
                }
            }
        }

        Ok(outcome)
    }

    async fn sync(&self) -> ActualResult<()> {
        self.record("sync");
        Ok(())
    }
}
