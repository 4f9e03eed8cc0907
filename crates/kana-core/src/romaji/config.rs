use std::collections::BTreeMap;

use serde::Deserialize;

use crate::unicode::is_hiragana_reading;

/// Longest romaji key a table may hold; the converter never looks further ahead.
pub const MAX_KEY_LEN: usize = 4;

#[derive(Deserialize)]
struct RomajiConfig {
    mappings: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum RomajiConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("invalid key {0:?}: keys are lowercase ASCII letters or \"-\"")]
    InvalidKey(String),
    #[error("key {0:?} is longer than 4 characters")]
    KeyTooLong(String),
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("value for key {0:?} is not hiragana")]
    NonHiraganaValue(String),
    #[error("romaji table already initialized; init_custom must run before the first conversion")]
    AlreadyInitialized,
}

fn valid_key(key: &str) -> bool {
    key == "-" || (!key.is_empty() && key.bytes().all(|b| b.is_ascii_lowercase()))
}

/// Parse TOML text into a sorted `BTreeMap<romaji, hiragana>`.
pub fn parse_romaji_toml(toml_str: &str) -> Result<BTreeMap<String, String>, RomajiConfigError> {
    let config: RomajiConfig =
        toml::from_str(toml_str).map_err(|e| RomajiConfigError::Parse(e.to_string()))?;

    if config.mappings.is_empty() {
        return Err(RomajiConfigError::Empty);
    }

    for (key, value) in &config.mappings {
        if !valid_key(key) {
            return Err(RomajiConfigError::InvalidKey(key.clone()));
        }
        if key.len() > MAX_KEY_LEN {
            return Err(RomajiConfigError::KeyTooLong(key.clone()));
        }
        if value.is_empty() {
            return Err(RomajiConfigError::EmptyValue(key.clone()));
        }
        if !is_hiragana_reading(value) {
            return Err(RomajiConfigError::NonHiraganaValue(key.clone()));
        }
    }

    Ok(config.mappings)
}
