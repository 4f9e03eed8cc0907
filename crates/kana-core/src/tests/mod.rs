mod table_coverage;

use crate::romaji::{convert_with, ConvertOptions, TargetScript};

/// Hiragana conversion with default options, independent of global settings.
pub(super) fn to_hiragana(romaji: &str) -> String {
    convert_with(romaji, TargetScript::Hiragana, &ConvertOptions::default()).converted
}
