//! Tests for the atlas tracing setup.

use std::sync::Mutex;

use atlas_core::config::ObservabilityConfig;
use atlas_core::tracing::setup::{fallback_filter, init_tracing};

/// Global mutex to serialize tracing tests (env var manipulation).
static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn init_tracing_accepts_per_crate_filters() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("ATLAS_LOG", "atlas_tiers=debug,atlas_calendar=warn");
    init_tracing(&ObservabilityConfig::default());
    std::env::remove_var("ATLAS_LOG");
}

#[test]
fn init_tracing_is_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing(&ObservabilityConfig::default());
    init_tracing(&ObservabilityConfig::default());
}

#[test]
fn invalid_atlas_log_falls_back() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("ATLAS_LOG", "=== not a filter ===");
    init_tracing(&ObservabilityConfig::default());
    std::env::remove_var("ATLAS_LOG");
}

#[test]
fn fallback_filter_uses_configured_level() {
    assert_eq!(fallback_filter(&ObservabilityConfig::default()), "atlas=info");
    let config = ObservabilityConfig {
        log_level: " DEBUG ".to_string(),
    };
    assert_eq!(fallback_filter(&config), "atlas=debug");
}
