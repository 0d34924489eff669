//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;

static INIT: Once = Once::new();

/// Filter used when `ATLAS_LOG` is unset or invalid: every atlas crate at
/// the configured level.
pub fn fallback_filter(config: &ObservabilityConfig) -> String {
    format!("atlas={}", config.log_level.trim().to_ascii_lowercase())
}

/// Initialize the atlas tracing/logging system.
///
/// Reads `ATLAS_LOG` for per-crate log levels.
/// Format: `ATLAS_LOG=atlas_tiers=debug,atlas_calendar=warn`
///
/// Falls back to `atlas=<observability.log_level>` if `ATLAS_LOG` is not set
/// or is invalid.
///
/// This function is idempotent; calling it more than once is safe.
pub fn init_tracing(config: &ObservabilityConfig) {
    let fallback = fallback_filter(config);
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("ATLAS_LOG")
            .or_else(|_| EnvFilter::try_new(&fallback))
            .unwrap_or_else(|_| EnvFilter::new("atlas=info"));

        // try_init: another subscriber may already be installed by the host.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
