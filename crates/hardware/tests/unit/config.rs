//! # Configuration Tests

use ls8_core::Config;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(!config.general.trace_instructions);
    assert_eq!(config.general.max_steps, 0);
}

#[test]
fn test_from_json_overrides_fields() {
    let config = Config::from_json(
        r#"{ "general": { "trace_instructions": true, "max_steps": 500 } }"#,
    )
    .expect("valid config document");
    assert!(config.general.trace_instructions);
    assert_eq!(config.general.max_steps, 500);
}

#[test]
fn test_from_json_missing_fields_fall_back_to_defaults() {
    let config = Config::from_json(r#"{ "general": { "max_steps": 7 } }"#)
        .expect("valid config document");
    assert!(!config.general.trace_instructions);
    assert_eq!(config.general.max_steps, 7);
}

#[test]
fn test_from_json_rejects_invalid_document() {
    assert!(Config::from_json("not json").is_err());
    assert!(Config::from_json(r#"{ "general": { "max_steps": "many" } }"#).is_err());
}
