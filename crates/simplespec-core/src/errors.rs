use thiserror::Error;

/// Result type alias using the canonical structured error
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that hosts can use for programmatic
/// handling, and that is carried on every diagnostic the codec reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidInput,

    // Grammar
    /// A line the grammar classified but could not accept
    Parse,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::Parse => "ERR_PARSE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Classification fields for programmatic handling plus context (operation,
/// key name, line number) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    key: Option<String>,
    line: Option<usize>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            key: None,
            line: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add key name context
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Add 1-based line number context
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the key name context, if any
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Get the line number context, if any
    pub fn line(&self) -> Option<usize> {
        self.line
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(key) = &self.key {
            write!(f, " (key: {})", key)?;
        }
        if let Some(line) = self.line {
            write!(f, " (line: {})", line)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Typed failures of the simple spec language codec
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpecLangError {
    /// Enum line whose assignment position holds the wrong token
    #[error("Expected assignment ({expected}), but got ({found})")]
    UnexpectedAssignment {
        key: String,
        line: usize,
        expected: String,
        found: String,
    },

    /// Backing file could not be opened
    #[error("Could not open {path}: {reason}")]
    OpenFailed {
        key: String,
        path: String,
        reason: String,
    },

    /// Reading from an open stream failed
    #[error("Could not read line {line}: {reason}")]
    ReadFailed {
        key: String,
        line: usize,
        reason: String,
    },

    /// `mountpoint` directive with nothing after the keyword
    #[error("Directive 'mountpoint' without a path, line ignored")]
    MountpointWithoutPath { key: String, line: usize },

    /// Parent key carries no file path
    #[error("Key {key} does not name a file")]
    MissingPath { key: String },

    /// A configured token cannot be used by the grammar
    #[error("Invalid value for {option}: {reason}")]
    InvalidToken { option: String, reason: String },

    /// Token file could not be parsed
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

/// Conversion from SpecLangError to ExError
impl From<SpecLangError> for ExError {
    fn from(err: SpecLangError) -> Self {
        let message = err.to_string();
        match err {
            SpecLangError::UnexpectedAssignment { key, line, .. } => {
                ExError::new(ExErrorKind::Parse)
                    .with_op("decode")
                    .with_key(key)
                    .with_line(line)
                    .with_message(message)
            }
            SpecLangError::OpenFailed { key, .. } => ExError::new(ExErrorKind::Io)
                .with_op("open")
                .with_key(key)
                .with_message(message),
            SpecLangError::ReadFailed { key, line, .. } => ExError::new(ExErrorKind::Io)
                .with_op("decode")
                .with_key(key)
                .with_line(line)
                .with_message(message),
            SpecLangError::MountpointWithoutPath { key, line } => {
                ExError::new(ExErrorKind::Parse)
                    .with_op("decode")
                    .with_key(key)
                    .with_line(line)
                    .with_message(message)
            }
            SpecLangError::MissingPath { key } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("open")
                .with_key(key)
                .with_message(message),
            SpecLangError::InvalidToken { .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("check_config")
                .with_message(message),
            SpecLangError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

/// Conversion from toml::de::Error to SpecLangError
impl From<toml::de::Error> for SpecLangError {
    fn from(err: toml::de::Error) -> Self {
        SpecLangError::Serialization {
            message: err.to_string(),
        }
    }
}
