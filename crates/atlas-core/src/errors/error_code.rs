//! AtlasErrorCode trait for stable fault codes.

/// Trait giving every atlas error a stable code string.
/// Reports group species faults by this code.
pub trait AtlasErrorCode {
    /// Returns the fault code string (e.g., "PARTITION_FAULT").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const REFERENCE_ERROR: &str = "REFERENCE_ERROR";
pub const PARTITION_FAULT: &str = "PARTITION_FAULT";
pub const LOOKUP_MISS: &str = "LOOKUP_MISS";
pub const UNCATEGORIZED_CODE: &str = "UNCATEGORIZED_CODE";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const TRANSITION_ERROR: &str = "TRANSITION_ERROR";
