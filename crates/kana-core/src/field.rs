//! Conversion for typed answer fields.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::romaji::{convert, invalid_chars, ConversionResult, TargetScript};
use crate::script::UnknownScript;
use crate::settings::settings;
use crate::unicode::{is_hiragana, is_kanji, is_katakana};

/// Which script an input field expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Hiragana,
    Katakana,
    Romaji,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FieldType::Hiragana => "hiragana",
            FieldType::Katakana => "katakana",
            FieldType::Romaji => "romaji",
        })
    }
}

impl FromStr for FieldType {
    type Err = UnknownScript;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hiragana" => Ok(FieldType::Hiragana),
            "katakana" => Ok(FieldType::Katakana),
            "romaji" => Ok(FieldType::Romaji),
            _ => Err(UnknownScript(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldSettings {
    /// Script that romaji fields are converted to; `None` keeps romaji as typed.
    #[serde(default)]
    pub preferred_script: Option<TargetScript>,
    /// Report kana or kanji typed into a romaji field.
    #[serde(default)]
    pub strict_romaji: bool,
}

/// Convert `input` for a field of type `field`.
///
/// `field_settings` of `None` uses the `[field]` section of the global settings.
pub fn convert_input_for_field(
    input: &str,
    field: FieldType,
    field_settings: Option<&FieldSettings>,
) -> ConversionResult {
    let field_settings = field_settings.unwrap_or(&settings().field);
    match field {
        FieldType::Hiragana => convert(input, TargetScript::Hiragana),
        FieldType::Katakana => convert(input, TargetScript::Katakana),
        FieldType::Romaji => match field_settings.preferred_script {
            Some(script) => convert(input, script),
            None => keep_romaji(input, field_settings.strict_romaji),
        },
    }
}

fn keep_romaji(input: &str, strict: bool) -> ConversionResult {
    let converted = input.trim().to_string();
    let errors = if strict {
        invalid_chars(&converted, |c| {
            !(is_hiragana(c) || is_katakana(c) || is_kanji(c))
        })
    } else {
        Vec::new()
    };
    ConversionResult {
        original: input.to_string(),
        converted,
        is_valid: errors.is_empty(),
        errors,
    }
}
