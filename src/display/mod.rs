//! Output shaping for command results
//!
//! Each command returns one of the record types defined here, serialized as
//! JSON. Names are resolved from ids where the service returns both, and
//! amounts are rendered as decimals.

pub mod account;
pub mod budget;
pub mod category;
pub mod payee;
pub mod transaction;

use serde_json::{json, Value};

use crate::error::ActualError;

pub use account::{account_rows, AccountRow};
pub use budget::{budget_view, BudgetView};
pub use category::{group_categories, CategoryGroupRow};
pub use payee::{payee_rows, PayeeRow};
pub use transaction::{transaction_rows, TransactionRow};

/// Pretty-print a successful result for stdout
pub fn render_success(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// The `{"error": ...}` object written to stderr
///
/// Unknown commands also list the available command names.
pub fn error_payload(err: &ActualError) -> Value {
    match err {
        ActualError::UnknownCommand { available, .. } => json!({
            "error": err.to_string(),
            "available": available,
        }),
        _ => json!({ "error": err.to_string() }),
    }
}

/// Compact rendering of [`error_payload`]
pub fn render_error(err: &ActualError) -> String {
    error_payload(err).to_string()
}
