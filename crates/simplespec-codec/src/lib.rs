//! SimpleSpec Codec - the simple spec language
//!
//! Provides:
//! - Encoder: enum-constrained keys to `enum <name> = <values>` lines
//! - Decoder: spec lines back to keys plus the directive node
//! - Plugin boundary: token resolution, file-backed get/set, module contract

pub mod atomic;
pub mod decoder;
pub mod encoder;
pub mod errors;
pub mod plugin;

// Re-export key types
pub use decoder::{decode, DecodeSummary};
pub use encoder::encode;
pub use errors::Result;
pub use plugin::{GetOutcome, SimpleSpecLang, SpecCodec};
