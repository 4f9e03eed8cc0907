//! Every table entry survives the full converter, not just a trie lookup.

use super::to_hiragana;
use crate::romaji::{convert_with, ConvertOptions, SymbolTable, TargetScript};

#[test]
fn every_key_converts_to_its_value() {
    let table = SymbolTable::hiragana();
    for (key, value) in table.iter() {
        assert_eq!(to_hiragana(key), value, "key={key}");
    }
}

#[test]
fn every_key_converts_to_its_katakana_value() {
    let table = SymbolTable::katakana();
    let opts = ConvertOptions::default();
    for (key, value) in table.iter() {
        let r = convert_with(key, TargetScript::Katakana, &opts);
        assert_eq!(r.converted, value, "key={key}");
        assert!(r.is_valid, "key={key}");
    }
}

#[test]
fn digraphs_beat_their_decomposition() {
    for (key, expected) in [
        ("kya", "きゃ"),
        ("gyu", "ぎゅ"),
        ("sho", "しょ"),
        ("ja", "じゃ"),
        ("cha", "ちゃ"),
        ("nyo", "にょ"),
        ("hya", "ひゃ"),
        ("byu", "びゅ"),
        ("pyo", "ぴょ"),
        ("mya", "みゃ"),
        ("ryu", "りゅ"),
    ] {
        assert_eq!(to_hiragana(key), expected);
    }
}

#[test]
fn doubled_consonant_geminates() {
    let table = SymbolTable::hiragana();
    for c in ['k', 's', 't', 'p', 'g', 'z', 'd', 'b', 'm', 'r'] {
        let mora = table.get(&format!("{c}a")).unwrap();
        assert_eq!(to_hiragana(&format!("{c}{c}a")), format!("っ{mora}"), "c={c}");
    }
}

#[test]
fn all_keys_in_sequence() {
    // Keys separated by a vowel-initial mora never interact.
    let table = SymbolTable::hiragana();
    let (romaji, kana): (Vec<&str>, Vec<&str>) = table
        .iter()
        .filter(|(k, _)| !k.starts_with('n'))
        .flat_map(|(k, v)| [(k, v), ("a", "あ")])
        .unzip();
    assert_eq!(to_hiragana(&romaji.concat()), kana.concat());
}
