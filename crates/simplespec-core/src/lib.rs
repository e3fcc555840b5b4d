//! SimpleSpec Core - key model and shared facilities
//!
//! This crate provides the in-memory configuration tree the codec reads and
//! writes, together with the facilities shared by every SimpleSpec crate:
//! - Key, Metadata (with indexed arrays) and KeySet models
//! - Token resolution for the configurable grammar keywords
//! - Canonical error facility and the diagnostic channel
//! - Structured logging facility

pub mod diagnostics;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod tokens;

pub use simplespec_core_types::schema;

// Re-export commonly used types
pub use diagnostics::{Diagnostic, DiagnosticSink, Diagnostics, Severity};
pub use errors::{ExError, ExErrorKind, Result, SpecLangError};
pub use model::{Key, KeySet, MetaEntry, Metadata};
pub use tokens::Tokens;
