//! Token resolution
//!
//! The grammar has two configurable tokens: the keyword that opens an enum
//! line and the assignment operator that follows the key name. Both are read
//! from the plugin configuration and fall back to `enum` and `=`.

use serde::{Deserialize, Serialize};

use crate::errors::SpecLangError;
use crate::model::KeySet;

/// Configuration option naming the enum keyword
pub const CONFIG_ENUM_KEYWORD: &str = "/keyword/enum";
/// Configuration option naming the assignment operator
pub const CONFIG_ASSIGN: &str = "/keyword/assign";

pub const DEFAULT_ENUM_KEYWORD: &str = "enum";
pub const DEFAULT_ASSIGN_OPERATOR: &str = "=";

/// Leading tokens of the directive lines; an enum keyword may not shadow them
pub const DIRECTIVE_KEYWORDS: [&str; 2] = ["mountpoint", "plugins"];

/// Resolved grammar tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tokens {
    pub enum_keyword: String,
    pub assign_operator: String,
}

impl Default for Tokens {
    fn default() -> Self {
        Self {
            enum_keyword: DEFAULT_ENUM_KEYWORD.to_string(),
            assign_operator: DEFAULT_ASSIGN_OPERATOR.to_string(),
        }
    }
}

impl Tokens {
    /// Resolve tokens from a plugin configuration set
    ///
    /// Options without a value count as absent.
    pub fn resolve(config: &KeySet) -> Self {
        let lookup = |option: &str, default: &str| {
            config
                .lookup(option)
                .and_then(|k| k.value())
                .unwrap_or(default)
                .to_string()
        };

        Self {
            enum_keyword: lookup(CONFIG_ENUM_KEYWORD, DEFAULT_ENUM_KEYWORD),
            assign_operator: lookup(CONFIG_ASSIGN, DEFAULT_ASSIGN_OPERATOR),
        }
    }

    /// Parse tokens from TOML; missing fields take their defaults
    pub fn from_toml_str(content: &str) -> Result<Self, SpecLangError> {
        Ok(toml::from_str(content)?)
    }

    /// Replace the enum keyword
    pub fn with_enum_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.enum_keyword = keyword.into();
        self
    }

    /// Replace the assignment operator
    pub fn with_assign_operator(mut self, operator: impl Into<String>) -> Self {
        self.assign_operator = operator.into();
        self
    }

    /// Check that both tokens survive whitespace tokenization
    pub fn validate(&self) -> Result<(), SpecLangError> {
        validate_token(CONFIG_ENUM_KEYWORD, &self.enum_keyword)?;
        validate_token(CONFIG_ASSIGN, &self.assign_operator)?;

        if DIRECTIVE_KEYWORDS.contains(&self.enum_keyword.as_str()) {
            return Err(SpecLangError::InvalidToken {
                option: CONFIG_ENUM_KEYWORD.to_string(),
                reason: format!("'{}' is a directive keyword", self.enum_keyword),
            });
        }

        Ok(())
    }
}

fn validate_token(option: &str, token: &str) -> Result<(), SpecLangError> {
    if token.is_empty() {
        return Err(SpecLangError::InvalidToken {
            option: option.to_string(),
            reason: "token cannot be empty".to_string(),
        });
    }
    if token.chars().any(char::is_whitespace) {
        return Err(SpecLangError::InvalidToken {
            option: option.to_string(),
            reason: format!("token '{}' contains whitespace", token),
        });
    }
    Ok(())
}
