// Single source of truth for all default values.

// --- Codes ---
pub const DEFAULT_NO_CODE: &str = crate::constants::DEFAULT_NO_CODE;
pub const DEFAULT_FLYOVER_CODE: &str = crate::constants::DEFAULT_FLYOVER_CODE;

// --- Escalation ---
pub const DEFAULT_ESCALATION_THRESHOLD: &str = crate::constants::DEFAULT_ESCALATION_THRESHOLD;

// --- Collection window ---
pub const DEFAULT_FIRST_YEAR: i32 = 2021;
pub const DEFAULT_LAST_YEAR: i32 = 2026;

// --- Pipeline ---
pub const DEFAULT_PARALLEL: bool = true;
pub const DEFAULT_FAIL_ON_WARNINGS: bool = false;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
