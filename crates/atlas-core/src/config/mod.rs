//! Configuration system for the atlas engine.
//! TOML-based, resolution: env > file > defaults.

pub mod atlas_config;
pub mod codes_config;
pub mod defaults;
pub mod escalation_config;
pub mod observability_config;
pub mod pipeline_config;
pub mod window_config;

pub use atlas_config::AtlasConfig;
pub use codes_config::CodesConfig;
pub use escalation_config::EscalationConfig;
pub use observability_config::ObservabilityConfig;
pub use pipeline_config::PipelineConfig;
pub use window_config::WindowConfig;
