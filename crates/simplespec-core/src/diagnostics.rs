//! Diagnostic channel
//!
//! Fatal I/O failures and per-line parse errors are reported against a key
//! through a [`DiagnosticSink`]. The host decides what to do with them;
//! [`Diagnostics`] simply collects them in order.

use crate::errors::ExError;
use crate::model::Key;

/// Severity of a reported diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A diagnostic reported against a key
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Name of the key the diagnostic was reported against
    pub key: String,
    pub error: ExError,
}

impl Diagnostic {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        self.error.code()
    }

    /// Human-readable message
    pub fn message(&self) -> &str {
        self.error.message()
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}: {}", self.severity, self.key, self.error)
    }
}

/// Receiver of diagnostics
pub trait DiagnosticSink {
    fn report(&mut self, severity: Severity, key: &Key, error: ExError);
}

/// Collecting sink
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// All diagnostics in report order
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    /// Diagnostics with `Severity::Error`
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries
            .iter()
            .filter(|d| d.severity == Severity::Error)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DiagnosticSink for Diagnostics {
    fn report(&mut self, severity: Severity, key: &Key, error: ExError) {
        self.entries.push(Diagnostic {
            severity,
            key: key.name().to_string(),
            error,
        });
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, severity: Severity, key: &Key, error: ExError) {
        (**self).report(severity, key, error);
    }
}
