use super::*;

#[test]
fn default_matches_stock_markup() {
    let cfg = PageConfig::default();
    assert_eq!(cfg.storage_key, "theme");
    assert_eq!(cfg.deep_link_delay_ms, 200);
    assert_eq!(cfg.copy_revert_ms, 1200);
    assert_eq!(cfg.selectors.blocks, ".posts details");
    assert_eq!(cfg.selectors.block_body, ".post-body");
    assert_eq!(cfg.labels.when_dark, "Lights On");
    assert_eq!(cfg.labels.when_light, "Lights Out");
    assert_eq!(cfg.level(), log::Level::Info);
}

#[test]
fn empty_object_yields_defaults() {
    let cfg = PageConfig::from_json("{}").unwrap();
    assert_eq!(cfg, PageConfig::default());
}

#[test]
fn partial_overrides_keep_other_defaults() {
    let cfg = PageConfig::from_json(
        r#"{"copy_revert_ms": 800, "labels": {"when_dark": "Light"}, "selectors": {"blocks": "article details"}}"#,
    )
    .unwrap();
    assert_eq!(cfg.copy_revert_ms, 800);
    assert_eq!(cfg.labels.when_dark, "Light");
    assert_eq!(cfg.labels.when_light, "Lights Out");
    assert_eq!(cfg.selectors.blocks, "article details");
    assert_eq!(cfg.selectors.block_body, ".post-body");
    assert_eq!(cfg.deep_link_delay_ms, 200);
}

#[test]
fn malformed_json_is_rejected() {
    let err = PageConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn negative_delay_is_rejected_by_type() {
    assert!(matches!(PageConfig::from_json(r#"{"copy_revert_ms": -1}"#), Err(ConfigError::Json(_))));
}

#[test]
fn empty_storage_key_is_rejected() {
    let err = PageConfig::from_json(r#"{"storage_key": "  "}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn unknown_log_level_is_rejected() {
    let err = PageConfig::from_json(r#"{"log_level": "chatty"}"#).unwrap_err();
    assert!(err.to_string().contains("chatty"));
}

#[test]
fn log_level_is_case_insensitive() {
    let cfg = PageConfig::from_json(r#"{"log_level": "DEBUG"}"#).unwrap();
    assert_eq!(cfg.level(), log::Level::Debug);
}

#[test]
fn log_level_accepts_padded_names() {
    let cfg = PageConfig::from_json(r#"{"log_level": " Warn "}"#).unwrap();
    assert_eq!(cfg.level(), log::Level::Warn);
    assert_eq!(PageConfig::from_json(r#"{"log_level": "trace"}"#).unwrap().level(), log::Level::Trace);
}

#[test]
fn copy_triggers_and_icon_buttons_are_separate_selectors() {
    let cfg = PageConfig::default();
    assert_eq!(cfg.selectors.copy_triggers, "[data-copy]");
    assert_eq!(cfg.selectors.copy_icon_buttons, ".copy-btn");

    let cfg = PageConfig::from_json(r#"{"selectors": {"copy_triggers": "[data-share]"}}"#).unwrap();
    assert_eq!(cfg.selectors.copy_triggers, "[data-share]");
    assert_eq!(cfg.selectors.copy_icon_buttons, ".copy-btn");
}
