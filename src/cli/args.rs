//! Flag parsing for command arguments
//!
//! Everything after the command name is a flat list of `--flag [value]`
//! tokens. A flag takes the following token as its value unless that token
//! is missing, empty, or itself a flag, in which case the flag is a bare
//! switch. Stray tokens are ignored and the last occurrence of a flag wins.

use std::collections::HashMap;

use crate::error::{ActualError, ActualResult};

/// The value given to a flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    Str(String),
    /// Flag present with no value
    Switch,
}

impl FlagValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FlagValue::Str(s) => Some(s.as_str()),
            FlagValue::Switch => None,
        }
    }
}

/// Parsed flags for one invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    flags: HashMap<String, FlagValue>,
}

impl ParsedArgs {
    /// Parse the tokens that follow the command name
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut flags = HashMap::new();
        let mut i = 0;

        while i < tokens.len() {
            let token = tokens[i].as_ref();
            let Some(name) = token.strip_prefix("--") else {
                i += 1;
                continue;
            };

            match tokens.get(i + 1).map(|t| t.as_ref()) {
                Some(next) if !next.is_empty() && !next.starts_with("--") => {
                    flags.insert(name.to_string(), FlagValue::Str(next.to_string()));
                    i += 2;
                }
                _ => {
                    flags.insert(name.to_string(), FlagValue::Switch);
                    i += 1;
                }
            }
        }

        Self { flags }
    }

    pub fn get(&self, name: &str) -> Option<&FlagValue> {
        self.flags.get(name)
    }

    /// The flag's string value, if it was given one
    pub fn value(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FlagValue::as_str)
    }

    /// The flag's string value, or a validation error naming the flag
    ///
    /// A bare switch counts as missing.
    pub fn require(&self, name: &str, placeholder: &str) -> ActualResult<&str> {
        self.value(name)
            .ok_or_else(|| ActualError::missing_flag(name, placeholder))
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}
