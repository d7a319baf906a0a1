//! actual-cli - command-line access to an Actual Budget server
//!
//! This library holds everything behind the `actual-cli` binary. Budgeting
//! itself (balances, carryover, sync) is the server's job; this crate
//! resolves configuration, parses flags and CSV files, and shapes JSON.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: `.env` file parsing and settings resolution
//! - `error`: Custom error types
//! - `models`: Records exchanged with the budget service
//! - `client`: The `BudgetClient` trait, its HTTP implementation and sessions
//! - `import`: CSV parsing for transaction imports
//! - `display`: JSON output shapes
//! - `cli`: Flag parsing and command dispatch
//!
//! # Example
//!
//! ```rust,ignore
//! use actual_cli::cli::dispatch;
//! use actual_cli::client::HttpBudgetClient;
//! use actual_cli::config::{ActualPaths, Settings};
//!
//! let paths = ActualPaths::new()?;
//! let tokens = vec!["--month".to_string(), "2024-01".to_string()];
//! let value = dispatch(Some("get-budget"), &tokens, HttpBudgetClient::new(), || {
//!     Settings::load(&paths)
//! })
//! .await?;
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod import;
pub mod models;

pub use error::{ActualError, ActualResult};
