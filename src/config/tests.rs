//! Tests for the configuration system: validation, presets, environment
//! parsing and JSON persistence.

use super::*;
use std::env;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_default_config_is_valid() {
    let config = AlgebraConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.sort_strategy, SortStrategy::Adaptive);
    assert_eq!(config.merge_inputs, MergeInputs::Verify);
}

#[test]
fn test_all_presets_valid() {
    assert!(AlgebraConfig::performance_preset().validate().is_ok());
    assert!(AlgebraConfig::faithful_preset().validate().is_ok());
    assert!(AlgebraConfig::balanced_preset().validate().is_ok());

    let faithful = AlgebraConfig::faithful_preset();
    assert_eq!(faithful.sort_strategy, SortStrategy::Bubble);
    assert_eq!(faithful.merge_inputs, MergeInputs::Verify);
}

#[test]
fn test_adaptive_requires_threshold() {
    let config = AlgebraConfig {
        sort_strategy: SortStrategy::Adaptive,
        adaptive_threshold: 0,
        ..AlgebraConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert_eq!(err.category(), "config");
    assert!(err.to_string().contains("adaptive_threshold"));

    // the threshold is irrelevant for the other strategies
    let stable = AlgebraConfig {
        sort_strategy: SortStrategy::Stable,
        adaptive_threshold: 0,
        ..AlgebraConfig::default()
    };
    assert!(stable.validate().is_ok());
}

#[test]
fn test_builder() {
    let config = AlgebraConfig::builder()
        .sort_strategy(SortStrategy::Stable)
        .adaptive_threshold(8)
        .merge_inputs(MergeInputs::Sort)
        .collect_stats(false)
        .build()
        .unwrap();
    assert_eq!(config.sort_strategy, SortStrategy::Stable);
    assert_eq!(config.adaptive_threshold, 8);
    assert_eq!(config.merge_inputs, MergeInputs::Sort);
    assert!(!config.collect_stats);

    let invalid = AlgebraConfig::builder()
        .sort_strategy(SortStrategy::Adaptive)
        .adaptive_threshold(0)
        .build();
    assert!(invalid.is_err());
}

#[test]
fn test_from_env_with_prefix() {
    env::set_var("TEST_ENV_ALGEBRA_SORT_STRATEGY", "Stable");
    env::set_var("TEST_ENV_ALGEBRA_ADAPTIVE_THRESHOLD", "12");
    env::set_var("TEST_ENV_ALGEBRA_MERGE_INPUTS", "sort");
    env::set_var("TEST_ENV_ALGEBRA_COLLECT_STATS", "off");

    let config = AlgebraConfig::from_env_with_prefix("TEST_ENV_").unwrap();
    assert_eq!(config.sort_strategy, SortStrategy::Stable);
    assert_eq!(config.adaptive_threshold, 12);
    assert_eq!(config.merge_inputs, MergeInputs::Sort);
    assert!(!config.collect_stats);

    env::remove_var("TEST_ENV_ALGEBRA_SORT_STRATEGY");
    env::remove_var("TEST_ENV_ALGEBRA_ADAPTIVE_THRESHOLD");
    env::remove_var("TEST_ENV_ALGEBRA_MERGE_INPUTS");
    env::remove_var("TEST_ENV_ALGEBRA_COLLECT_STATS");
}

#[test]
fn test_from_env_ignores_unparsable_values() {
    env::set_var("TEST_BAD_ALGEBRA_SORT_STRATEGY", "quicksort");
    env::set_var("TEST_BAD_ALGEBRA_ADAPTIVE_THRESHOLD", "many");

    let config = AlgebraConfig::from_env_with_prefix("TEST_BAD_").unwrap();
    let defaults = AlgebraConfig::default();
    assert_eq!(config.sort_strategy, defaults.sort_strategy);
    assert_eq!(config.adaptive_threshold, defaults.adaptive_threshold);

    env::remove_var("TEST_BAD_ALGEBRA_SORT_STRATEGY");
    env::remove_var("TEST_BAD_ALGEBRA_ADAPTIVE_THRESHOLD");
}

#[test]
fn test_from_env_rejects_invalid_combination() {
    env::set_var("TEST_ZERO_ALGEBRA_SORT_STRATEGY", "adaptive");
    env::set_var("TEST_ZERO_ALGEBRA_ADAPTIVE_THRESHOLD", "0");

    let result = AlgebraConfig::from_env_with_prefix("TEST_ZERO_");
    assert!(result.is_err());

    env::remove_var("TEST_ZERO_ALGEBRA_SORT_STRATEGY");
    env::remove_var("TEST_ZERO_ALGEBRA_ADAPTIVE_THRESHOLD");
}

#[test]
fn test_parse_env_helpers() {
    env::set_var("TEST_PARSE_NUMBER", " 42 ");
    env::set_var("TEST_PARSE_FLAG", "Yes");

    assert_eq!(parse_env_var("TEST_PARSE_NUMBER", 0usize), 42);
    assert_eq!(parse_env_var("TEST_PARSE_MISSING", 7usize), 7);
    assert!(parse_env_bool("TEST_PARSE_FLAG", false));
    assert!(parse_env_bool("TEST_PARSE_MISSING", true));

    env::remove_var("TEST_PARSE_NUMBER");
    env::remove_var("TEST_PARSE_FLAG");
}

#[test]
fn test_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("algebra.json");

    let config = AlgebraConfig::builder()
        .sort_strategy(SortStrategy::Bubble)
        .merge_inputs(MergeInputs::Sort)
        .build()
        .unwrap();
    config.save_to_file(&path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"sort_strategy\": \"bubble\""));
    assert!(content.contains("\"merge_inputs\": \"sort\""));

    let loaded = AlgebraConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_load_rejects_bad_files() {
    let dir = tempdir().unwrap();

    let missing = AlgebraConfig::load_from_file(dir.path().join("missing.json")).unwrap_err();
    assert_eq!(missing.category(), "io");

    let garbage = dir.path().join("garbage.json");
    fs::write(&garbage, "{ not json").unwrap();
    let err = AlgebraConfig::load_from_file(&garbage).unwrap_err();
    assert_eq!(err.category(), "config");

    let invalid = dir.path().join("invalid.json");
    fs::write(
        &invalid,
        r#"{"sort_strategy":"adaptive","adaptive_threshold":0,"merge_inputs":"verify","collect_stats":true}"#,
    )
    .unwrap();
    assert!(AlgebraConfig::load_from_file(&invalid).is_err());
}

#[test]
fn test_enum_parsing_and_display() {
    assert_eq!("ADAPTIVE".parse::<SortStrategy>().unwrap(), SortStrategy::Adaptive);
    assert!("heap".parse::<SortStrategy>().is_err());
    assert_eq!(SortStrategy::Stable.to_string(), "stable");

    assert_eq!("Verify".parse::<MergeInputs>().unwrap(), MergeInputs::Verify);
    assert!("maybe".parse::<MergeInputs>().is_err());
    assert_eq!(MergeInputs::Sort.to_string(), "sort");
}

#[test]
fn test_validation_error_display() {
    let err = ValidationError::new("adaptive_threshold", "0", "must be positive")
        .with_suggestion("1..=1024");
    let text = err.to_string();
    assert!(text.contains("adaptive_threshold"));
    assert!(text.contains("must be positive"));
    assert!(text.contains("Suggested values: 1..=1024"));
}
