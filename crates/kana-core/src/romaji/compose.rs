use tracing::{debug, debug_span};

use super::convert::{next_token, ConvertOptions, NPolicy, Token};
use super::table::SymbolTable;

/// State of an answer being typed one keystroke at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeResult {
    /// Hiragana settled so far, including what the caller passed in.
    pub composed: String,
    /// Romaji that could still grow into a longer mora.
    pub pending: String,
}

/// Move as much of `pending` into `composed` as is already unambiguous.
///
/// Uses the same rules as batch conversion. A tail that is the start of some
/// table key ("k", "sh", "n", "ky") stays pending until more input arrives,
/// unless `force` is set, which drains everything (a trailing "n" becomes ん).
pub fn compose(composed: &str, pending: &str, force: bool) -> ComposeResult {
    let _span = debug_span!("compose", force).entered();

    let table = SymbolTable::hiragana();
    // Deferral is handled by holding the tail, so an "n" that reaches the
    // tokenizer is never waiting on more input.
    let opts = ConvertOptions {
        n_policy: NPolicy::Nasal,
        ..crate::settings::settings().convert_options()
    };

    let chars: Vec<char> = pending.to_lowercase().chars().collect();
    let mut out = composed.to_string();
    let mut i = 0;
    while i < chars.len() {
        if !force && is_open_tail(table, &chars[i..]) {
            break;
        }
        let (token, used) = next_token(table, &chars, i, &opts);
        match token {
            Token::Kana(kana) => out.push_str(kana),
            Token::Glyph(c) | Token::Passthrough(c) => out.push(c),
        }
        i += used;
    }

    let pending: String = chars[i..].iter().collect();
    debug!(pending_len = pending.len());
    ComposeResult {
        composed: out,
        pending,
    }
}

fn is_open_tail(table: &SymbolTable, tail: &[char]) -> bool {
    if !tail.iter().all(char::is_ascii) {
        return false;
    }
    let tail: String = tail.iter().collect();
    table.is_open_prefix(&tail)
}
