//! CSV transaction import
//!
//! Turns a CSV file into typed rows ready for the budget service. Everything
//! here runs before a session is opened, so bad input never costs a
//! download.

pub mod csv;

use std::collections::HashMap;
use std::path::Path;

use chrono::NaiveDate;

use crate::error::{ActualError, ActualResult};
use crate::models::{Amount, Category, NewTransaction};

pub use self::csv::{parse_csv, split_fields, CsvRow};

/// A validated CSV row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRow {
    /// 1-based data row number, for error messages
    pub row_number: usize,
    pub date: String,
    pub amount: Amount,
    pub payee: Option<String>,
    /// Category name, resolved once a session is open
    pub category: Option<String>,
    pub notes: Option<String>,
    pub imported_id: Option<String>,
}

impl ImportRow {
    /// Build a typed row from a parsed CSV row
    ///
    /// `date` and `amount` are required; empty optional columns are dropped.
    pub fn from_csv_row(row_number: usize, row: &CsvRow) -> ActualResult<Self> {
        let field = |name: &str| row.get(name).filter(|v| !v.is_empty()).cloned();

        let date = field("date").ok_or_else(|| {
            ActualError::Validation(format!(
                "Row {}: missing required field \"date\"",
                row_number
            ))
        })?;
        if NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_err() {
            return Err(ActualError::Validation(format!(
                "Row {}: invalid date \"{}\" (expected YYYY-MM-DD)",
                row_number, date
            )));
        }

        let raw_amount = field("amount").ok_or_else(|| {
            ActualError::Validation(format!(
                "Row {}: missing required field \"amount\"",
                row_number
            ))
        })?;
        let amount = Amount::parse(&raw_amount)
            .map_err(|e| ActualError::Validation(format!("Row {}: {}", row_number, e)))?;

        Ok(Self {
            row_number,
            date,
            amount,
            payee: field("payee"),
            category: field("category"),
            notes: field("notes"),
            imported_id: field("imported_id"),
        })
    }

    /// Convert to the service's transaction shape
    ///
    /// Category names match case-insensitively against `categories`, which
    /// maps lower-cased name to id.
    pub fn to_transaction(
        &self,
        categories: &HashMap<String, String>,
    ) -> ActualResult<NewTransaction> {
        let mut txn = NewTransaction::new(self.date.clone(), self.amount);
        txn.imported_payee = self.payee.clone();
        txn.notes = self.notes.clone();
        txn.imported_id = self.imported_id.clone();

        if let Some(name) = &self.category {
            let id = categories.get(&name.to_lowercase()).ok_or_else(|| {
                ActualError::Validation(format!(
                    "Row {}: category not found: {}",
                    self.row_number, name
                ))
            })?;
            txn.category = Some(id.clone());
        }

        Ok(txn)
    }
}

/// Parse CSV text into typed rows
pub fn parse_import_rows(content: &str) -> ActualResult<Vec<ImportRow>> {
    parse_csv(content)?
        .iter()
        .enumerate()
        .map(|(i, row)| ImportRow::from_csv_row(i + 1, row))
        .collect()
}

/// Read and parse an import file
pub fn read_import_file(path: &Path) -> ActualResult<Vec<ImportRow>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ActualError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

    let rows = parse_import_rows(&content)?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "parsed import file");
    Ok(rows)
}

/// Lower-cased category name to id, for case-insensitive lookup
pub fn category_lookup(categories: &[Category]) -> HashMap<String, String> {
    categories
        .iter()
        .map(|c| (c.name.to_lowercase(), c.id.clone()))
        .collect()
}
