//! `import-transactions`
//!
//! The CSV file is read and validated while parsing arguments, before any
//! session exists. Category names are resolved against the live category
//! list once the budget is open.

use std::path::PathBuf;

use serde::Serialize;
use serde_json::Value;

use super::args::ParsedArgs;
use crate::client::{BudgetClient, EntityType};
use crate::error::{ActualError, ActualResult};
use crate::import::{category_lookup, read_import_file, ImportRow};
use crate::models::NewTransaction;

/// A batch of CSV rows bound for one account
#[derive(Debug, Clone)]
pub struct ImportTransactions {
    pub account: String,
    pub file: PathBuf,
    pub rows: Vec<ImportRow>,
}

/// Counts reported after an import
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportSummary {
    pub added: usize,
    pub updated: usize,
    pub errors: Vec<Value>,
}

impl ImportTransactions {
    pub fn from_args(args: &ParsedArgs) -> ActualResult<Self> {
        let account = args.require("account", "name")?.to_string();
        let file = PathBuf::from(args.require("file", "path-to-csv")?);
        let rows = read_import_file(&file)?;

        Ok(Self {
            account,
            file,
            rows,
        })
    }

    pub async fn run<C: BudgetClient>(&self, client: &C) -> ActualResult<ImportSummary> {
        let account_id = client
            .get_id_by_name(EntityType::Accounts, &self.account)
            .await?
            .ok_or_else(|| ActualError::account_not_found(&self.account))?;

        let categories = category_lookup(&client.get_categories().await?);
        let transactions = self
            .rows
            .iter()
            .map(|row| row.to_transaction(&categories))
            .collect::<ActualResult<Vec<NewTransaction>>>()?;

        let outcome = client
            .import_transactions(&account_id, &transactions)
            .await?;
        client.sync().await?;

        tracing::info!(
            file = %self.file.display(),
            added = outcome.added.len(),
            updated = outcome.updated.len(),
            "import finished"
        );

        Ok(ImportSummary {
            added: outcome.added.len(),
            updated: outcome.updated.len(),
            errors: outcome.errors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::MemoryClient;
    use crate::models::{Amount, Transaction};
    use serde_json::json;
    use tempfile::TempDir;

    fn write_csv(dir: &TempDir, contents: &str) -> String {
        let path = dir.path().join("bank.csv");
        std::fs::write(&path, contents).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_requires_flags() {
        let err = ImportTransactions::from_args(&ParsedArgs::parse(&["--file", "x.csv"]))
            .unwrap_err();
        assert_eq!(err.to_string(), "--account <name> is required");

        let err = ImportTransactions::from_args(&ParsedArgs::parse(&["--account", "Checking"]))
            .unwrap_err();
        assert_eq!(err.to_string(), "--file <path-to-csv> is required");
    }

    #[test]
    fn test_bad_csv_fails_while_parsing_args() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "date,amount,payee\n");

        let err = ImportTransactions::from_args(&ParsedArgs::parse(&[
            "--account", "Checking", "--file", path.as_str(),
        ]))
        .unwrap_err();
        assert!(matches!(err, ActualError::Format(_)));
    }

    #[tokio::test]
    async fn test_import_counts_and_errors() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            "date,amount,payee,category,imported_id\n\
             2024-02-01,-20.00,\"Shop, Inc\",food,bank-1\n\
             2024-02-02,1500,Employer,,bank-2\n",
        );

        let mut client = MemoryClient::new()
            .with_account("a1", "Checking", 0)
            .with_group("g1", "Needs")
            .with_category("c1", "Food", "g1")
            .with_transaction(Transaction {
                id: "existing".into(),
                account: Some("a1".into()),
                date: "2024-02-02".into(),
                amount: Amount::from_cents(150000),
                payee: None,
                category: None,
                notes: None,
                cleared: true,
                imported_id: Some("bank-2".into()),
            });
        client.import_errors = vec![json!({ "message": "row skipped" })];

        let cmd = ImportTransactions::from_args(&ParsedArgs::parse(&[
            "--account", "Checking", "--file", path.as_str(),
        ]))
        .unwrap();
        let summary = cmd.run(&client).await.unwrap();

        assert_eq!(summary.added, 1);
        assert_eq!(summary.updated, 1);
        assert_eq!(summary.errors, vec![json!({ "message": "row skipped" })]);

        let written = client.written.borrow();
        assert_eq!(written[0].1.imported_payee.as_deref(), Some("Shop, Inc"));
        assert_eq!(written[0].1.category.as_deref(), Some("c1"));
        assert_eq!(written[0].1.amount, -2000);
        assert_eq!(client.calls().last().map(String::as_str), Some("sync"));
    }

    #[tokio::test]
    async fn test_unknown_category_stops_import() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "date,amount,category\n2024-02-01,-1,Travel\n");
        let client = MemoryClient::new().with_account("a1", "Checking", 0);

        let cmd = ImportTransactions::from_args(&ParsedArgs::parse(&[
            "--account", "Checking", "--file", path.as_str(),
        ]))
        .unwrap();
        let err = cmd.run(&client).await.unwrap_err();

        assert_eq!(err.to_string(), "Row 1: category not found: Travel");
        assert!(!client.calls().contains(&"import_transactions".to_string()));
    }
}
