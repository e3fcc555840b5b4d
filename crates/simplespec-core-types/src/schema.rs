//! Canonical schema constants for structured logging and key metadata
//!
//! These constants ensure consistency across logging, error reporting and the
//! codec itself.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Entity identifiers
pub const FIELD_KEY: &str = "key";
pub const FIELD_LINE: &str = "line";

// Counters on end events
pub const FIELD_KEYS: &str = "keys";
pub const FIELD_LINES: &str = "lines";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Well-known key metadata
pub const META_CHECK_ENUM: &str = "check/enum";
pub const META_REQUIRED: &str = "required";
pub const META_MANDATORY: &str = "mandatory";
pub const META_MOUNTPOINT: &str = "mountpoint";
pub const META_INFOS_PLUGINS: &str = "infos/plugins";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_accessibility() {
        assert!(!FIELD_COMPONENT.is_empty());
        assert!(!FIELD_OP.is_empty());
        assert!(!EVENT_START.is_empty());
        assert!(!EVENT_END.is_empty());
        assert!(!EVENT_END_ERROR.is_empty());
    }

    #[test]
    fn test_event_names_are_distinct() {
        assert_ne!(EVENT_START, EVENT_END);
        assert_ne!(EVENT_START, EVENT_END_ERROR);
        assert_ne!(EVENT_END, EVENT_END_ERROR);
    }

    #[test]
    fn test_flag_metadata_names_are_distinct() {
        assert_ne!(META_REQUIRED, META_MANDATORY);
        assert!(META_INFOS_PLUGINS.contains('/'));
    }
}
