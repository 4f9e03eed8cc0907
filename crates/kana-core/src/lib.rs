//! Romaji ⇄ kana transliteration for Japanese answer input.
//!
//! The crate converts Latin keystrokes into hiragana or katakana, classifies
//! text by script, and maps between the two syllabaries. Everything here is a
//! pure function over strings backed by read-only tables, so it is safe to
//! call from any number of threads.

pub mod field;
pub mod romaji;
pub mod script;
pub mod settings;
pub mod unicode;

pub use field::{convert_input_for_field, FieldSettings, FieldType};
pub use romaji::{
    compose, convert, convert_romaji_to_hiragana, convert_romaji_to_katakana, convert_with,
    ComposeResult, ConversionResult, ConvertOptions, NPolicy, SymbolTable, TargetScript,
    UnknownNPolicy,
};
pub use script::{
    detect_script, detect_script_ignoring_marks, is_hiragana, is_katakana, ScriptType,
};
pub use unicode::{hiragana_to_katakana, katakana_to_hiragana};

#[cfg(test)]
mod tests;
