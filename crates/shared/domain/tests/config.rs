use conf_domain::config::{ConfConfig, IdentifierConfig, LoggingConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let identifiers = IdentifierConfig::default();
    assert_eq!(identifiers.length, 12);

    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert!(logging.env_filter.is_none());
    assert!(!logging.json);
}

#[test]
fn conf_config_deserializes() {
    let raw = json!({
        "identifiers": { "length": 21 },
        "logging": { "level": "debug", "env_filter": "conf_people=trace" }
    });

    let cfg: ConfConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.identifiers.length, 21);
    assert_eq!(cfg.logging.level, "debug");
    assert_eq!(cfg.logging.env_filter.as_deref(), Some("conf_people=trace"));
    assert!(!cfg.logging.json);
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let cfg: ConfConfig = serde_json::from_value(json!({})).expect("empty config");
    assert_eq!(cfg.identifiers.length, 12);
    assert_eq!(cfg.logging.level, "info");
}

#[test]
fn clones_share_until_mutated() {
    let base = ConfConfig::default();
    let mut tuned = base.clone();
    tuned.identifiers.length = 16;

    assert_eq!(base.identifiers.length, 12);
    assert_eq!(tuned.identifiers.length, 16);
}
