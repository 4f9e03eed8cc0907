use std::fs;

use unicode_width::UnicodeWidthStr;

use kana_core::romaji::SymbolTable;

use super::die;

pub fn romaji_export() {
    print!("{}", kana_core::romaji::default_toml());
}

pub fn romaji_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let map = die!(kana_core::romaji::parse_romaji_toml(&content), "Error: {}");
    println!("OK: {} mappings", map.len());
}

pub fn romaji_table() {
    print!(
        "{}",
        format_table(SymbolTable::hiragana(), SymbolTable::katakana())
    );
}

/// Three aligned columns: romaji, hiragana, katakana.
pub fn format_table(hiragana: &SymbolTable, katakana: &SymbolTable) -> String {
    let kana_width = hiragana
        .iter()
        .map(|(_, v)| v.width())
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for (key, hira) in hiragana.iter() {
        let kata = katakana.get(key).unwrap_or("");
        let pad = " ".repeat(kana_width - hira.width());
        out.push_str(&format!("{key:<6}{hira}{pad}  {kata}\n"));
    }
    out
}

pub fn settings_export() {
    print!("{}", kana_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        kana_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    let preferred = s
        .field
        .preferred_script
        .map_or("none", |script| script.as_str());
    println!(
        "OK: conversion.n_policy={:?}, conversion.extended_gemination={}, field.preferred_script={}",
        s.conversion.n_policy(),
        s.conversion.extended_gemination,
        preferred
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use kana_core::romaji::TargetScript;

    #[test]
    fn table_columns_align() {
        let toml = "[mappings]\na = \"あ\"\nkya = \"きゃ\"\n";
        let hira = SymbolTable::from_toml(TargetScript::Hiragana, toml).unwrap();
        let kata = SymbolTable::from_toml(TargetScript::Katakana, toml).unwrap();
        let text = format_table(&hira, &kata);
        assert_eq!(text, "a     あ    ア\nkya   きゃ  キャ\n");
    }

    #[test]
    fn default_table_has_a_row_per_key() {
        let text = format_table(SymbolTable::hiragana(), SymbolTable::katakana());
        assert_eq!(text.lines().count(), SymbolTable::hiragana().len());
        assert!(text.lines().any(|l| l.starts_with("kyo ") && l.ends_with("キョ")));
    }
}
