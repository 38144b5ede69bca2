use super::*;

#[test]
fn default_matches_stock_markup() {
    let config = ThemeConfig::default();
    assert_eq!(config.storage_key, "theme");
    assert_eq!(config.attribute, "data-theme");
    assert_eq!(config.toggle_id, "theme-toggle-btn");
    assert_eq!(config.icon_selector, ".theme-icon");
    assert_eq!(config.media_query, "(prefers-color-scheme: dark)");
    assert_eq!(config.labels.switch_to_light, "Switch to light mode");
    assert_eq!(config.labels.switch_to_dark, "Switch to dark mode");
}

#[test]
fn empty_object_yields_defaults() {
    let config = ThemeConfig::from_json("{}").unwrap();
    assert_eq!(config, ThemeConfig::default());
}

#[test]
fn partial_config_keeps_other_defaults() {
    let config = ThemeConfig::from_json(
        r#"{"storage_key": "site-theme", "labels": {"switch_to_dark": "Přepnout na tmavý režim"}}"#,
    )
    .unwrap();
    assert_eq!(config.storage_key, "site-theme");
    assert_eq!(config.attribute, DEFAULT_ATTRIBUTE);
    assert_eq!(config.labels.switch_to_dark, "Přepnout na tmavý režim");
    assert_eq!(config.labels.switch_to_light, "Switch to light mode");
}

#[test]
fn malformed_json_is_config_error() {
    let err = ThemeConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, ThemeError::Config(_)));
    assert!(err.to_string().starts_with("invalid theme config"));
}

#[test]
fn wrong_field_type_is_config_error() {
    assert!(matches!(
        ThemeConfig::from_json(r#"{"toggle_id": 7}"#),
        Err(ThemeError::Config(_))
    ));
}
