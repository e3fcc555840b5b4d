//! Check-config command
//!
//! Usage: simplespec check-config [--config <TOML>] [--enum-keyword <KW>] [--assign <OP>]

use super::TokenArgs;

/// Execute check-config command
pub fn execute(tokens: &TokenArgs) -> Result<(), Box<dyn std::error::Error>> {
    let plugin = tokens.plugin()?;
    let tokens = simplespec_codec::SpecCodec::tokens(&plugin);

    println!(
        "✓ Configuration valid: enum keyword '{}', assignment '{}'",
        tokens.enum_keyword, tokens.assign_operator
    );
    Ok(())
}
