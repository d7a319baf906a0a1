//! `KEY=VALUE` config file parsing

use std::collections::HashMap;
use std::path::Path;

use crate::error::ActualError;

/// Parse the contents of a `.env` style file
///
/// Blank lines, `#` comments and lines without `=` are skipped. Keys and
/// values are trimmed, and a value wrapped in matching single or double
/// quotes is unwrapped. A repeated key keeps its last value.
pub fn parse_env(contents: &str) -> HashMap<String, String> {
    let mut vars = HashMap::new();

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };

        vars.insert(key.trim().to_string(), unquote(value.trim()).to_string());
    }

    vars
}

/// Read and parse a `.env` file; a missing file yields an empty map
pub fn load_env_file(path: &Path) -> Result<HashMap<String, String>, ActualError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file");
        return Ok(HashMap::new());
    }

    let contents = std::fs::read_to_string(path).map_err(|e| {
        ActualError::Io(format!("Failed to read {}: {}", path.display(), e))
    })?;

    tracing::debug!(path = %path.display(), "loaded config file");
    Ok(parse_env(&contents))
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.starts_with(quote) && value.ends_with(quote) {
            // A lone quote character unquotes to an empty value.
            return value.get(1..value.len() - 1).unwrap_or("");
        }
    }
    value
}
