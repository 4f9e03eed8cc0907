use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::config::{parse_romaji_toml, RomajiConfigError};
use super::trie::{RomajiTrie, TrieLookupResult};
use crate::script::UnknownScript;
use crate::unicode::{self, hiragana_to_katakana, PROLONGED_SOUND_MARK};

pub(crate) const DEFAULT_TOML: &str = include_str!("default_romaji.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static MAPPINGS: OnceLock<BTreeMap<String, String>> = OnceLock::new();

/// Syllabary a conversion produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetScript {
    #[default]
    Hiragana,
    Katakana,
}

impl TargetScript {
    pub fn as_str(self) -> &'static str {
        match self {
            TargetScript::Hiragana => "hiragana",
            TargetScript::Katakana => "katakana",
        }
    }

    /// Whether `c` belongs in output of this script. Hiragana text may carry
    /// the prolonged sound mark ー.
    pub fn accepts(self, c: char) -> bool {
        match self {
            TargetScript::Hiragana => unicode::is_hiragana(c) || c == PROLONGED_SOUND_MARK,
            TargetScript::Katakana => unicode::is_katakana(c),
        }
    }
}

impl fmt::Display for TargetScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetScript {
    type Err = UnknownScript;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hiragana" => Ok(TargetScript::Hiragana),
            "katakana" => Ok(TargetScript::Katakana),
            _ => Err(UnknownScript(s.to_string())),
        }
    }
}

/// Romaji → kana mapping for one target script.
///
/// Keys are lowercase; callers lower-case input before lookup. Several keys may
/// share a value ("sha", "sya", "shya"), but each key has exactly one.
pub struct SymbolTable {
    script: TargetScript,
    entries: BTreeMap<String, String>,
    trie: RomajiTrie,
}

impl SymbolTable {
    /// Build a table from validated romaji → hiragana mappings. For a katakana
    /// table every value is remapped, so both tables always share their keys.
    pub fn from_mappings(script: TargetScript, mappings: &BTreeMap<String, String>) -> Self {
        let entries: BTreeMap<String, String> = match script {
            TargetScript::Hiragana => mappings.clone(),
            TargetScript::Katakana => mappings
                .iter()
                .map(|(k, v)| (k.clone(), hiragana_to_katakana(v)))
                .collect(),
        };
        let trie = RomajiTrie::build(entries.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        SymbolTable {
            script,
            entries,
            trie,
        }
    }

    /// Parse and build in one step.
    pub fn from_toml(script: TargetScript, toml_str: &str) -> Result<Self, RomajiConfigError> {
        let mappings = parse_romaji_toml(toml_str)?;
        Ok(Self::from_mappings(script, &mappings))
    }

    pub fn hiragana() -> &'static SymbolTable {
        static INSTANCE: OnceLock<SymbolTable> = OnceLock::new();
        INSTANCE.get_or_init(|| SymbolTable::from_mappings(TargetScript::Hiragana, active_mappings()))
    }

    pub fn katakana() -> &'static SymbolTable {
        static INSTANCE: OnceLock<SymbolTable> = OnceLock::new();
        INSTANCE.get_or_init(|| SymbolTable::from_mappings(TargetScript::Katakana, active_mappings()))
    }

    pub fn script(&self) -> TargetScript {
        self.script
    }

    /// Exact-match lookup.
    pub fn get(&self, romaji: &str) -> Option<&str> {
        self.entries.get(romaji).map(String::as_str)
    }

    /// Trie lookup distinguishing complete keys from prefixes of longer keys.
    pub fn lookup(&self, romaji: &str) -> TrieLookupResult<'_> {
        self.trie.lookup(romaji)
    }

    /// True if `romaji` is a key or the start of one and some longer key
    /// extends it, i.e. more input could change the match.
    pub fn is_open_prefix(&self, romaji: &str) -> bool {
        matches!(
            self.trie.lookup(romaji),
            TrieLookupResult::Prefix | TrieLookupResult::ExactAndPrefix(_)
        )
    }

    pub(crate) fn longest_match(&self, input: &[char], min_len: usize) -> Option<(&str, usize)> {
        self.trie.longest_match(input, min_len)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Install a custom romaji table before the first conversion.
///
/// Fails with `AlreadyInitialized` if a table is already in use.
pub fn init_custom(toml_content: String) -> Result<(), RomajiConfigError> {
    // Validate eagerly
    parse_romaji_toml(&toml_content)?;
    if MAPPINGS.get().is_some() {
        return Err(RomajiConfigError::AlreadyInitialized);
    }
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| RomajiConfigError::AlreadyInitialized)
}

/// Returns the embedded default romaji TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

fn active_mappings() -> &'static BTreeMap<String, String> {
    MAPPINGS.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_TOML);
        parse_romaji_toml(toml_str).expect("romaji TOML must be valid")
    })
}
