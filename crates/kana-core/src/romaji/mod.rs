//! Romaji-to-kana conversion engine.
//!
//! A trie over the romaji table drives a greedy longest-match tokenizer that
//! handles sokuon (っ), the moraic nasal (ん), and yōon (きゃ). Katakana is
//! derived from the hiragana output.

mod compose;
mod config;
mod convert;
mod table;
mod trie;

pub use compose::{compose, ComposeResult};
pub use config::{parse_romaji_toml, RomajiConfigError, MAX_KEY_LEN};
pub use convert::{
    convert, convert_romaji_to_hiragana, convert_romaji_to_katakana, convert_with,
    ConversionResult, ConvertOptions, NPolicy, UnknownNPolicy,
};
pub use table::{default_toml, init_custom, SymbolTable, TargetScript};
pub use trie::TrieLookupResult;

pub(crate) use convert::invalid_chars;
