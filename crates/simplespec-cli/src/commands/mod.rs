//! Subcommands and the token options they share

pub mod check;
pub mod decode;
pub mod fmt;

use clap::Args;
use simplespec_codec::SimpleSpecLang;
use simplespec_core::tokens::{CONFIG_ASSIGN, CONFIG_ENUM_KEYWORD};
use simplespec_core::{Diagnostics, Key, KeySet, Tokens};
use std::path::PathBuf;

/// Parent key used when `--parent` is not given
pub const DEFAULT_PARENT: &str = "user/simplespec";

/// Token options accepted by every subcommand
#[derive(Debug, Args)]
pub struct TokenArgs {
    /// TOML file with `enum_keyword` and `assign_operator`
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Keyword opening an enum line (overrides the config file)
    #[arg(long, global = true)]
    pub enum_keyword: Option<String>,

    /// Assignment operator (overrides the config file)
    #[arg(long, global = true)]
    pub assign: Option<String>,
}

impl TokenArgs {
    /// Merge the config file and the flag overrides
    pub fn tokens(&self) -> Result<Tokens, Box<dyn std::error::Error>> {
        let mut tokens = match &self.config {
            Some(path) => Tokens::from_toml_str(&std::fs::read_to_string(path)?)?,
            None => Tokens::default(),
        };
        if let Some(keyword) = &self.enum_keyword {
            tokens = tokens.with_enum_keyword(keyword.as_str());
        }
        if let Some(assign) = &self.assign {
            tokens = tokens.with_assign_operator(assign.as_str());
        }
        Ok(tokens)
    }

    /// Plugin configuration set carrying the resolved tokens
    pub fn config_set(&self) -> Result<KeySet, Box<dyn std::error::Error>> {
        let tokens = self.tokens()?;
        let option = |name: &str, value: String| Key::with_value(&format!("user{}", name), value);

        Ok(vec![
            option(CONFIG_ENUM_KEYWORD, tokens.enum_keyword),
            option(CONFIG_ASSIGN, tokens.assign_operator),
        ]
        .into_iter()
        .collect())
    }

    /// Validated plugin instance
    pub fn plugin(&self) -> Result<SimpleSpecLang, Box<dyn std::error::Error>> {
        let config = self.config_set()?;
        SimpleSpecLang::check_config(&config)?;
        Ok(SimpleSpecLang::from_config(&config))
    }
}

/// Print collected diagnostics to stderr
pub fn print_diagnostics(diagnostics: &Diagnostics) {
    for diagnostic in diagnostics.iter() {
        eprintln!("{}", diagnostic);
    }
}
