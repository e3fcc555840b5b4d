//! Decode command
//!
//! Usage: simplespec decode <FILE> [--parent <NAME>] [--json]

use super::{print_diagnostics, TokenArgs, DEFAULT_PARENT};
use clap::Args;
use simplespec_core::{Diagnostics, Key, KeySet};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DecodeArgs {
    /// Spec file to decode
    pub file: PathBuf,

    /// Parent key the decoded keys are placed below
    #[arg(short, long, default_value = DEFAULT_PARENT)]
    pub parent: String,

    /// Print the keys as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute decode command
pub fn execute(tokens: &TokenArgs, args: DecodeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let plugin = tokens.plugin()?;
    let parent = Key::with_value(&args.parent, args.file.to_string_lossy());

    let mut ks = KeySet::new();
    let mut diagnostics = Diagnostics::new();
    plugin.get(&parent, &mut ks, &mut diagnostics)?;
    print_diagnostics(&diagnostics);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&ks)?);
    } else {
        print!("{}", render_text(&ks));
    }

    Ok(())
}

fn render_text(ks: &KeySet) -> String {
    let mut out = String::new();
    for key in ks {
        out.push_str(key.name());
        out.push('\n');
        for entry in key.metadata().iter() {
            out.push_str(&format!("  {} = {}\n", entry.name, entry.value));
        }
    }
    out
}
