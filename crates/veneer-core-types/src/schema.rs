//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Entity identifiers
pub const FIELD_MUTATION_ID: &str = "mutation_id";
pub const FIELD_TABLE: &str = "table";
pub const FIELD_ROW_EVENT: &str = "row_event";

// Collection sizes
pub const FIELD_UPDATE_COUNT: &str = "update_count";
pub const FIELD_PENDING_LEN: &str = "pending_len";

// Error fields
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
