//! Command dispatch
//!
//! A command name selects an entry in a fixed table. Its flags are parsed
//! and validated first; only then are settings resolved and a budget session
//! opened. The session is closed after the command body whether it
//! succeeded or not.

pub mod account;
pub mod args;
pub mod budget;
pub mod category;
pub mod import;
pub mod payee;
pub mod transaction;

use chrono::{NaiveDate, Utc};
use serde_json::Value;

use crate::client::{BudgetClient, Session};
use crate::config::Settings;
use crate::error::{ActualError, ActualResult};

pub use args::{FlagValue, ParsedArgs};
pub use budget::GetBudget;
pub use import::{ImportSummary, ImportTransactions};
pub use transaction::{AddTransaction, GetTransactions};

/// Every command name, in help order
pub const COMMAND_NAMES: [&str; 7] = [
    "add-transaction",
    "import-transactions",
    "list-accounts",
    "list-categories",
    "list-payees",
    "get-transactions",
    "get-budget",
];

/// A validated command, ready to run against a session
#[derive(Debug, Clone)]
pub enum Command {
    AddTransaction(AddTransaction),
    ImportTransactions(ImportTransactions),
    ListAccounts,
    ListCategories,
    ListPayees,
    GetTransactions(GetTransactions),
    GetBudget(GetBudget),
}

impl Command {
    /// Look up `name` and validate its flags
    ///
    /// Nothing here touches the network or the settings.
    pub fn parse(name: Option<&str>, args: &ParsedArgs, today: NaiveDate) -> ActualResult<Self> {
        let command = match name {
            Some("add-transaction") => Command::AddTransaction(AddTransaction::from_args(args)?),
            Some("import-transactions") => {
                Command::ImportTransactions(ImportTransactions::from_args(args)?)
            }
            Some("list-accounts") => Command::ListAccounts,
            Some("list-categories") => Command::ListCategories,
            Some("list-payees") => Command::ListPayees,
            Some("get-transactions") => {
                Command::GetTransactions(GetTransactions::from_args(args, today)?)
            }
            Some("get-budget") => Command::GetBudget(GetBudget::from_args(args)?),
            other => {
                return Err(ActualError::UnknownCommand {
                    command: other.unwrap_or("(none)").to_string(),
                    available: COMMAND_NAMES.to_vec(),
                })
            }
        };

        Ok(command)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::AddTransaction(_) => "add-transaction",
            Command::ImportTransactions(_) => "import-transactions",
            Command::ListAccounts => "list-accounts",
            Command::ListCategories => "list-categories",
            Command::ListPayees => "list-payees",
            Command::GetTransactions(_) => "get-transactions",
            Command::GetBudget(_) => "get-budget",
        }
    }

    /// Run the command body against an open budget
    pub async fn execute<C: BudgetClient>(&self, client: &C) -> ActualResult<Value> {
        let value = match self {
            Command::AddTransaction(cmd) => cmd.run(client).await?,
            Command::ImportTransactions(cmd) => serde_json::to_value(cmd.run(client).await?)?,
            Command::ListAccounts => serde_json::to_value(account::list_accounts(client).await?)?,
            Command::ListCategories => {
                serde_json::to_value(category::list_categories(client).await?)?
            }
            Command::ListPayees => serde_json::to_value(payee::list_payees(client).await?)?,
            Command::GetTransactions(cmd) => serde_json::to_value(cmd.run(client).await?)?,
            Command::GetBudget(cmd) => serde_json::to_value(cmd.run(client).await?)?,
        };

        Ok(value)
    }
}

/// Run one invocation end to end
///
/// `load_settings` is only called once the command and its flags are known
/// to be valid, so bad input never needs configuration.
pub async fn dispatch<C, F>(
    name: Option<&str>,
    tokens: &[String],
    client: C,
    load_settings: F,
) -> ActualResult<Value>
where
    C: BudgetClient,
    F: FnOnce() -> ActualResult<Settings>,
{
    let args = ParsedArgs::parse(tokens);
    let command = Command::parse(name, &args, Utc::now().date_naive())?;
    tracing::debug!(command = command.name(), flags = args.len(), "dispatching");

    let settings = load_settings()?;
    let session = Session::open(client, &settings).await?;

    let result = command.execute(session.client()).await;
    let closed = session.close().await;

    let value = result?;
    closed?;
    Ok(value)
}
