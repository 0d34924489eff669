use std::io::Write;

use atlas_core::config::*;
use atlas_core::errors::ConfigError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = AtlasConfig::from_toml("").unwrap();

    assert_eq!(config.codes.no_code, "NC");
    assert_eq!(config.codes.flyover_code, "F");
    assert_eq!(config.escalation.threshold_code, "B");
    assert_eq!(config.window.first_year, 2021);
    assert_eq!(config.window.last_year, 2026);
    assert!(config.pipeline.parallel);
    assert!(!config.pipeline.fail_on_warnings);
    assert_eq!(config.observability.log_level, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[escalation]
threshold_code = "A"

[window]
first_year = 2019
"#;
    let config = AtlasConfig::from_toml(toml).unwrap();
    assert_eq!(config.escalation.threshold_code, "A");
    assert_eq!(config.window.first_year, 2019);
    // Non-overridden fields keep defaults
    assert_eq!(config.window.last_year, 2026);
    assert_eq!(config.codes.no_code, "NC");
}

#[test]
fn config_rejects_inverted_window() {
    let config = AtlasConfig::from_toml("[window]\nfirst_year = 2030\nlast_year = 2020\n").unwrap();
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "window"));
}

#[test]
fn config_rejects_threshold_equal_to_sentinel() {
    let config = AtlasConfig::from_toml("[escalation]\nthreshold_code = \"nc\"\n").unwrap();
    assert!(config.validate().is_err());
}

#[test]
fn config_rejects_invalid_toml() {
    let err = AtlasConfig::from_toml("[window\nfirst_year = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn config_load_reads_file_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[pipeline]\nparallel = false\n").unwrap();
    let config = AtlasConfig::load(file.path()).unwrap();
    assert!(!config.pipeline.parallel);
}

#[test]
fn config_load_missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = AtlasConfig::load(&dir.path().join("atlas.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn config_round_trips_through_toml() {
    let config = AtlasConfig::default();
    let text = config.to_toml().unwrap();
    let back = AtlasConfig::from_toml(&text).unwrap();
    assert_eq!(back.escalation.threshold_code, config.escalation.threshold_code);
    assert_eq!(back.window.last_year, config.window.last_year);
}

#[test]
fn config_rejects_unknown_log_level() {
    let config = AtlasConfig::from_toml("[observability]\nlog_level = \"loud\"\n").unwrap();
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "observability.log_level"));
}
