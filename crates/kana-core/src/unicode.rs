//! Character-level Unicode classification and the hiragana ↔ katakana mapping.

/// Prolonged sound mark. Lives in the katakana block but is written in
/// hiragana text too ("らーめん").
pub const PROLONGED_SOUND_MARK: char = 'ー';

/// Katakana middle dot, shared by both syllabaries in loanword spelling.
pub const MIDDLE_DOT: char = '・';

/// Distance between a hiragana code point and its katakana counterpart.
const KANA_OFFSET: u32 = 0x60;

/// Hiragana ranges that have a one-to-one katakana partner at `KANA_OFFSET`.
/// ぁ..ゖ pairs with ァ..ヶ, and the iteration marks ゝゞ pair with ヽヾ.
/// ゟ (U+309F) and the combining/standalone voicing marks (U+3099..U+309C)
/// have no partner and pass through.
const MAPPED_HIRAGANA: [(u32, u32); 2] = [(0x3041, 0x3096), (0x309D, 0x309E)];

/// Check the full Hiragana block (U+3040..U+309F).
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Check the full Katakana block (U+30A0..U+30FF). Includes ー and ・.
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

/// CJK Unified Ideographs as used for Japanese kanji (U+4E00..U+9FAF).
pub fn is_kanji(c: char) -> bool {
    ('\u{4E00}'..='\u{9FAF}').contains(&c)
}

pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Marks written in both syllabaries that say nothing about which one a
/// string is in.
pub fn is_shared_kana_mark(c: char) -> bool {
    c == PROLONGED_SOUND_MARK || c == MIDDLE_DOT
}

fn mapped_hiragana(cp: u32) -> bool {
    MAPPED_HIRAGANA
        .iter()
        .any(|&(lo, hi)| (lo..=hi).contains(&cp))
}

/// Convert a hiragana string to katakana.
/// Non-hiragana characters (ー, ASCII, kanji, katakana) are passed through unchanged.
pub fn hiragana_to_katakana(s: &str) -> String {
    s.chars()
        .map(|c| {
            let cp = c as u32;
            if mapped_hiragana(cp) {
                char::from_u32(cp + KANA_OFFSET).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Convert a katakana string to hiragana; the exact inverse of
/// [`hiragana_to_katakana`]. Katakana without a hiragana partner (ヷ..ヺ, ー, ・)
/// is passed through unchanged.
pub fn katakana_to_hiragana(s: &str) -> String {
    s.chars()
        .map(|c| {
            let cp = c as u32;
            match cp.checked_sub(KANA_OFFSET) {
                Some(h) if mapped_hiragana(h) => char::from_u32(h).unwrap_or(c),
                _ => c,
            }
        })
        .collect()
}

/// Check if a string is a valid hiragana reading.
///
/// Accepts hiragana characters (U+3040..U+309F) and the prolonged sound mark
/// ー (U+30FC, technically katakana) which commonly appears in readings like
/// "らーめん".
pub fn is_hiragana_reading(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| is_hiragana(c) || c == PROLONGED_SOUND_MARK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_hiragana_reading() {
        assert!(is_hiragana_reading("かんじ"));
        assert!(is_hiragana_reading("あ"));
        assert!(is_hiragana_reading("らーめん"));
        assert!(!is_hiragana_reading("カタカナ"));
        assert!(!is_hiragana_reading("abc"));
        assert!(!is_hiragana_reading(""));
    }

    #[test]
    fn test_hiragana_to_katakana() {
        assert_eq!(hiragana_to_katakana("きょうは"), "キョウハ");
        assert_eq!(hiragana_to_katakana("らーめん"), "ラーメン");
        assert_eq!(hiragana_to_katakana("っゔゝゞ"), "ッヴヽヾ");
        assert_eq!(hiragana_to_katakana(""), "");
        assert_eq!(hiragana_to_katakana("abc"), "abc");
        assert_eq!(hiragana_to_katakana("カタカナ"), "カタカナ");
        assert_eq!(hiragana_to_katakana("今日は"), "今日ハ");
    }

    #[test]
    fn test_katakana_to_hiragana() {
        assert_eq!(katakana_to_hiragana("キョウハ"), "きょうは");
        assert_eq!(katakana_to_hiragana("ラーメン"), "らーめん");
        assert_eq!(katakana_to_hiragana("ヴァ"), "ゔぁ");
        assert_eq!(katakana_to_hiragana("ヷ・ー"), "ヷ・ー");
        assert_eq!(katakana_to_hiragana("abc"), "abc");
    }

    #[test]
    fn test_unpaired_hiragana_passes_through() {
        // ゟ (yori) and the voicing marks have no katakana partner at +0x60.
        assert_eq!(hiragana_to_katakana("ゟ゛゜"), "ゟ゛゜");
    }

    #[test]
    fn test_block_round_trip() {
        for cp in 0x3040u32..=0x309F {
            let c = char::from_u32(cp).unwrap().to_string();
            assert_eq!(katakana_to_hiragana(&hiragana_to_katakana(&c)), c);
        }
    }

    #[test]
    fn test_char_classification() {
        assert!(is_hiragana('あ'));
        assert!(!is_hiragana('ア'));
        assert!(is_katakana('ア'));
        assert!(is_katakana('ー'));
        assert!(!is_katakana('あ'));
        assert!(is_kanji('漢'));
        assert!(!is_kanji('あ'));
        assert!(is_latin('a'));
        assert!(is_latin('Z'));
        assert!(!is_latin('あ'));
        assert!(is_shared_kana_mark('ー'));
        assert!(!is_shared_kana_mark('ア'));
    }
}
