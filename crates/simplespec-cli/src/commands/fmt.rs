//! Fmt command
//!
//! Usage: simplespec fmt <FILE> [--parent <NAME>] [--output <FILE>]
//!
//! Only enum lines survive; directives and unrecognized lines are dropped.

use super::{print_diagnostics, TokenArgs, DEFAULT_PARENT};
use clap::Args;
use simplespec_codec::SpecCodec;
use simplespec_core::{Diagnostics, Key, KeySet};
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct FmtArgs {
    /// Spec file to rewrite
    pub file: PathBuf,

    /// Parent key used while decoding
    #[arg(short, long, default_value = DEFAULT_PARENT)]
    pub parent: String,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute fmt command
pub fn execute(tokens: &TokenArgs, args: FmtArgs) -> Result<(), Box<dyn std::error::Error>> {
    let plugin = tokens.plugin()?;
    let source = Key::with_value(&args.parent, args.file.to_string_lossy());

    let mut ks = KeySet::new();
    let mut diagnostics = Diagnostics::new();
    plugin.get(&source, &mut ks, &mut diagnostics)?;
    print_diagnostics(&diagnostics);

    if let Some(output_path) = args.output {
        let target = Key::with_value(&args.parent, output_path.to_string_lossy());
        // A failed write comes back as the returned error
        let lines = plugin.set(&target, &ks, &mut Diagnostics::new())?;
        println!("✓ Wrote {} lines to {}", lines, output_path.display());
    } else {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        plugin.encode(&source, &ks, &mut out);
        out.flush()?;
    }

    Ok(())
}
