//! Structured logging facility for SimpleSpec
//!
//! - Single initialization point via `init(profile)`
//! - Operation boundary macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! Boundary operations (`encode`, `decode`, `get`, `set`) own start/end
//! logging. Line-level detail goes through `tracing::debug!` and
//! `tracing::trace!`.
//!
//! # Usage
//!
//! ```rust
//! use simplespec_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
