//! String-level script detection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::unicode;

/// Which writing system a piece of text is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptType {
    Romaji,
    Hiragana,
    Katakana,
    Kanji,
    Mixed,
}

impl ScriptType {
    pub fn as_str(self) -> &'static str {
        match self {
            ScriptType::Romaji => "romaji",
            ScriptType::Hiragana => "hiragana",
            ScriptType::Katakana => "katakana",
            ScriptType::Kanji => "kanji",
            ScriptType::Mixed => "mixed",
        }
    }
}

impl fmt::Display for ScriptType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown script name: {0}")]
pub struct UnknownScript(pub String);

impl FromStr for ScriptType {
    type Err = UnknownScript;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "romaji" => Ok(ScriptType::Romaji),
            "hiragana" => Ok(ScriptType::Hiragana),
            "katakana" => Ok(ScriptType::Katakana),
            "kanji" => Ok(ScriptType::Kanji),
            "mixed" => Ok(ScriptType::Mixed),
            _ => Err(UnknownScript(s.to_string())),
        }
    }
}

// Bit per base script, so "more than one" is a popcount.
const HIRAGANA: u8 = 1;
const KATAKANA: u8 = 1 << 1;
const KANJI: u8 = 1 << 2;
const LATIN: u8 = 1 << 3;

fn script_bit(c: char) -> u8 {
    if unicode::is_hiragana(c) {
        HIRAGANA
    } else if unicode::is_katakana(c) {
        KATAKANA
    } else if unicode::is_kanji(c) {
        KANJI
    } else if unicode::is_latin(c) {
        LATIN
    } else {
        0
    }
}

/// Classify `text` by the Unicode ranges of its characters.
///
/// Characters outside the four base scripts (digits, punctuation, spaces) are
/// ignored. ー and ・ sit in the katakana block and count as katakana. Text
/// with no classifiable character, including the empty string, is `Romaji`.
pub fn detect_script(text: &str) -> ScriptType {
    script_of(text.chars())
}

/// Like [`detect_script`], but skips the marks shared by both syllabaries
/// (ー, ・), so "らーめん" is `Hiragana` rather than `Mixed`.
pub fn detect_script_ignoring_marks(text: &str) -> ScriptType {
    script_of(text.chars().filter(|&c| !unicode::is_shared_kana_mark(c)))
}

fn script_of(chars: impl Iterator<Item = char>) -> ScriptType {
    match chars.fold(0u8, |acc, c| acc | script_bit(c)) {
        HIRAGANA => ScriptType::Hiragana,
        KATAKANA => ScriptType::Katakana,
        KANJI => ScriptType::Kanji,
        0 | LATIN => ScriptType::Romaji,
        _ => ScriptType::Mixed,
    }
}

/// True if `text` is non-empty and written entirely in hiragana
/// (the prolonged sound mark is allowed).
pub fn is_hiragana(text: &str) -> bool {
    unicode::is_hiragana_reading(text)
}

/// True if `text` is non-empty and written entirely in katakana.
pub fn is_katakana(text: &str) -> bool {
    !text.is_empty() && text.chars().all(unicode::is_katakana)
}
