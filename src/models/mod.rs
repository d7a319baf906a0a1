//! Data models exchanged with the budget service
//!
//! These mirror the JSON records the service returns and accepts. Amounts
//! arrive and leave as integer cents; see [`Amount`].

pub mod account;
pub mod amount;
pub mod budget;
pub mod category;
pub mod payee;
pub mod transaction;

pub use account::Account;
pub use amount::Amount;
pub use budget::{BudgetMonth, BudgetMonthCategory, BudgetMonthGroup};
pub use category::{Category, CategoryGroup};
pub use payee::Payee;
pub use transaction::{ImportOutcome, NewTransaction, Transaction};
