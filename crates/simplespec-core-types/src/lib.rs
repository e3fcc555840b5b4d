//! Core types shared across SimpleSpec facilities
//!
//! This crate provides the canonical schema constants used by both the
//! error facility and the logging facility:
//!
//! - **Field keys**: structured logging field names
//! - **Event names**: operation boundary events
//! - **Metadata names**: the well-known metadata the codec reads and writes

pub mod schema;
