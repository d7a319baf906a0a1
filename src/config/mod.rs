//! Configuration module for actual-cli
//!
//! This module provides configuration management including:
//! - home-relative path resolution for the `.env` file and data directory
//! - `KEY=VALUE` file parsing
//! - settings resolution with environment precedence

pub mod env_file;
pub mod paths;
pub mod settings;

pub use paths::ActualPaths;
pub use settings::Settings;
