use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

use super::config::MAX_KEY_LEN;
use super::table::{SymbolTable, TargetScript};
use crate::settings::settings;
use crate::unicode::hiragana_to_katakana;

const SMALL_TSU: char = 'っ';
const NASAL: char = 'ん';

/// Doubled consonants that geminate into っ.
const GEMINATION_CONSONANTS: &[char] = &[
    'k', 'g', 's', 'z', 't', 'd', 'h', 'b', 'p', 'm', 'y', 'r', 'w',
];
/// Extra consonants accepted with `extended_gemination` ("kocchi", "baffu").
const EXTENDED_GEMINATION_CONSONANTS: &[char] = &['c', 'f', 'j', 'v'];

/// How a bare "n" resolves when it does not start a longer mora
/// ("shinbun", "kanji"). A terminal "n" is ん under every policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NPolicy {
    /// Resolve to ん immediately.
    #[default]
    Nasal,
    /// Keep the Latin "n" so later keystrokes can still complete a mora.
    Literal,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown n policy {0:?}: expected \"nasal\" or \"literal\"")]
pub struct UnknownNPolicy(pub String);

impl FromStr for NPolicy {
    type Err = UnknownNPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nasal" => Ok(NPolicy::Nasal),
            "literal" => Ok(NPolicy::Literal),
            _ => Err(UnknownNPolicy(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    pub n_policy: NPolicy,
    pub extended_gemination: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            n_policy: NPolicy::Nasal,
            extended_gemination: false,
        }
    }
}

/// Outcome of converting one input string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    pub original: String,
    pub converted: String,
    pub is_valid: bool,
    /// One entry per output character outside the target script.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl ConversionResult {
    /// Build a result, checking every non-whitespace output char against `script`.
    pub(crate) fn checked(original: &str, converted: String, script: TargetScript) -> Self {
        let errors = invalid_chars(&converted, |c| script.accepts(c));
        ConversionResult {
            original: original.to_string(),
            converted,
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Describe every non-whitespace char of `text` rejected by `accepts`.
pub(crate) fn invalid_chars(text: &str, accepts: impl Fn(char) -> bool) -> Vec<String> {
    text.chars()
        .enumerate()
        .filter(|&(_, c)| !c.is_whitespace() && !accepts(c))
        .map(|(i, c)| format!("unmapped character '{c}' at position {i}"))
        .collect()
}

/// One step of the tokenizer.
#[derive(Debug, PartialEq)]
pub(crate) enum Token<'t> {
    Kana(&'t str),
    Glyph(char),
    Passthrough(char),
}

fn is_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'i' | 'u' | 'e' | 'o')
}

fn geminates(ch: char, opts: &ConvertOptions) -> bool {
    GEMINATION_CONSONANTS.contains(&ch)
        || (opts.extended_gemination && EXTENDED_GEMINATION_CONSONANTS.contains(&ch))
}

/// Read the token starting at `chars[i]`, returning it and the number of
/// chars consumed (always at least 1).
///
/// Rules in precedence order: gemination, moraic n, longest table match,
/// passthrough.
pub(crate) fn next_token<'t>(
    table: &'t SymbolTable,
    chars: &[char],
    i: usize,
    opts: &ConvertOptions,
) -> (Token<'t>, usize) {
    let ch = chars[i];
    let next = chars.get(i + 1).copied();

    // Sokuon: consume only the first of the pair, the second starts the next mora.
    if next == Some(ch) && ch != 'n' && !is_vowel(ch) && geminates(ch, opts) {
        return (Token::Glyph(SMALL_TSU), 1);
    }

    if ch == 'n' {
        if next.is_none() {
            return (Token::Glyph(NASAL), 1);
        }
        let end = chars.len().min(i + 3);
        if let Some((kana, len)) = table.longest_match(&chars[i..end], 2) {
            return (Token::Kana(kana), len);
        }
        return match opts.n_policy {
            NPolicy::Nasal => (Token::Glyph(NASAL), 1),
            NPolicy::Literal => (Token::Passthrough(ch), 1),
        };
    }

    let end = chars.len().min(i + MAX_KEY_LEN);
    match table.longest_match(&chars[i..end], 1) {
        Some((kana, len)) => (Token::Kana(kana), len),
        None => (Token::Passthrough(ch), 1),
    }
}

/// Hiragana for `chars`, plus the number of characters passed through unmapped.
fn transliterate(table: &SymbolTable, chars: &[char], opts: &ConvertOptions) -> (String, usize) {
    let mut out = String::with_capacity(chars.len() * 3);
    let mut passthrough = 0;
    let mut i = 0;
    while i < chars.len() {
        let (token, used) = next_token(table, chars, i, opts);
        match token {
            Token::Kana(kana) => out.push_str(kana),
            Token::Glyph(c) => out.push(c),
            Token::Passthrough(c) => {
                passthrough += 1;
                out.push(c);
            }
        }
        i += used;
    }
    (out, passthrough)
}

/// Convert romaji to `target` using the global settings.
pub fn convert(romaji: &str, target: TargetScript) -> ConversionResult {
    convert_with(romaji, target, &settings().convert_options())
}

/// Convert romaji to `target`.
///
/// Input is trimmed and lower-cased. Katakana is produced by converting to
/// hiragana and remapping, so both scripts share every rule. Characters the
/// table does not cover are kept as-is and reported in `errors`.
pub fn convert_with(romaji: &str, target: TargetScript, opts: &ConvertOptions) -> ConversionResult {
    let _span = debug_span!("convert", target = target.as_str()).entered();

    let chars: Vec<char> = romaji.trim().to_lowercase().chars().collect();
    let (hiragana, passthrough) = transliterate(SymbolTable::hiragana(), &chars, opts);
    let converted = match target {
        TargetScript::Hiragana => hiragana,
        TargetScript::Katakana => hiragana_to_katakana(&hiragana),
    };

    debug!(
        input_len = chars.len(),
        output_len = converted.chars().count(),
        passthrough
    );
    ConversionResult::checked(romaji, converted, target)
}

pub fn convert_romaji_to_hiragana(text: &str) -> String {
    convert(text, TargetScript::Hiragana).converted
}

pub fn convert_romaji_to_katakana(text: &str) -> String {
    convert(text, TargetScript::Katakana).converted
}
