//! Global settings loaded from TOML, following the same OnceLock pattern as the romaji table.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

use crate::field::FieldSettings;
use crate::romaji::{ConvertOptions, NPolicy};

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
///
/// Fails with `AlreadyInitialized` once settings have been read, since the
/// custom TOML could no longer take effect.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    if SETTINGS.get().is_some() {
        return Err(SettingsError::AlreadyInitialized);
    }
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    SETTINGS.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized; init_custom must run before the first settings() call")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub conversion: ConversionSettings,
    #[serde(default)]
    pub field: FieldSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConversionSettings {
    n_policy: String,
    #[serde(default)]
    pub extended_gemination: bool,
}

impl ConversionSettings {
    pub fn n_policy(&self) -> NPolicy {
        // Checked in validate()
        self.n_policy.parse().unwrap_or_default()
    }
}

impl Settings {
    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            n_policy: self.conversion.n_policy(),
            extended_gemination: self.conversion.extended_gemination,
        }
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if let Err(e) = s.conversion.n_policy.parse::<NPolicy>() {
        return Err(SettingsError::InvalidValue {
            field: "conversion.n_policy".to_string(),
            reason: e.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::romaji::TargetScript;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.conversion.n_policy(), NPolicy::Nasal);
        assert!(!s.conversion.extended_gemination);
        assert_eq!(s.field.preferred_script, None);
        assert!(!s.field.strict_romaji);
        assert_eq!(s.convert_options(), ConvertOptions::default());
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[conversion]
n_policy = "literal"
extended_gemination = true

[field]
preferred_script = "katakana"
strict_romaji = true
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.conversion.n_policy(), NPolicy::Literal);
        assert!(s.conversion.extended_gemination);
        assert_eq!(s.field.preferred_script, Some(TargetScript::Katakana));
        assert!(s.field.strict_romaji);
    }

    #[test]
    fn field_section_is_optional() {
        let s = parse_settings_toml("[conversion]\nn_policy = \"nasal\"\n").unwrap();
        assert!(!s.conversion.extended_gemination);
        assert_eq!(s.field.preferred_script, None);
    }

    #[test]
    fn error_unknown_n_policy() {
        let toml = "[conversion]\nn_policy = \"eager\"\n";
        let err = parse_settings_toml(toml).unwrap_err();
        match err {
            SettingsError::InvalidValue { field, .. } => assert_eq!(field, "conversion.n_policy"),
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn error_unknown_preferred_script() {
        let toml = "[conversion]\nn_policy = \"nasal\"\n[field]\npreferred_script = \"kanji\"\n";
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn init_custom_after_settings_read() {
        let before = settings().convert_options();
        let custom = "[conversion]\nn_policy = \"literal\"\nextended_gemination = true\n";
        let err = init_custom(custom.to_string()).unwrap_err();
        assert!(matches!(err, SettingsError::AlreadyInitialized));
        assert!(err.to_string().contains("before the first settings() call"));
        assert_eq!(settings().convert_options(), before);
    }

    #[test]
    fn init_custom_validates_first() {
        let err = init_custom("[conversion]\nn_policy = \"eager\"\n".to_string()).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let err = parse_settings_toml("[field]\nstrict_romaji = true\n").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
