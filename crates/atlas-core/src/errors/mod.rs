//! Error handling for the atlas engine.
//! One error enum per subsystem, `thiserror` only.

pub mod adjudication_error;
pub mod atlas_error;
pub mod calendar_error;
pub mod classification_error;
pub mod config_error;
pub mod error_code;
pub mod reference_error;
pub mod transition_error;

pub use adjudication_error::AdjudicationError;
pub use atlas_error::{AtlasError, AtlasResult};
pub use calendar_error::CalendarError;
pub use classification_error::ClassificationError;
pub use config_error::ConfigError;
pub use error_code::AtlasErrorCode;
pub use reference_error::ReferenceError;
pub use transition_error::TransitionError;
