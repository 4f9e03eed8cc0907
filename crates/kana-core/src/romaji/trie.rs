use std::collections::HashMap;

#[derive(Debug, PartialEq)]
pub enum TrieLookupResult<'a> {
    None,
    Prefix,
    Exact(&'a str),
    ExactAndPrefix(&'a str),
}

struct Node {
    children: HashMap<u8, Node>,
    value: Option<usize>,
}

impl Node {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            value: None,
        }
    }
}

/// Byte trie over ASCII romaji keys. Values are indices into `values`.
pub struct RomajiTrie {
    root: Node,
    values: Vec<String>,
}

impl RomajiTrie {
    /// Build from `(romaji, kana)` pairs. A later duplicate key replaces the
    /// earlier value.
    pub fn build<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut trie = RomajiTrie {
            root: Node::new(),
            values: Vec::new(),
        };
        for (romaji, kana) in pairs {
            trie.insert(romaji, kana);
        }
        trie
    }

    pub fn lookup(&self, romaji: &str) -> TrieLookupResult<'_> {
        let mut node = &self.root;
        for &b in romaji.as_bytes() {
            match node.children.get(&b) {
                Some(child) => node = child,
                None => return TrieLookupResult::None,
            }
        }
        let has_children = !node.children.is_empty();
        match node.value {
            Some(id) => {
                let kana = self.values[id].as_str();
                if has_children {
                    TrieLookupResult::ExactAndPrefix(kana)
                } else {
                    TrieLookupResult::Exact(kana)
                }
            }
            None => {
                if has_children {
                    TrieLookupResult::Prefix
                } else {
                    TrieLookupResult::None
                }
            }
        }
    }

    /// Longest key that is a prefix of `input`, at least `min_len` chars long.
    /// Returns the value and the key length in chars. Non-ASCII input ends the
    /// walk since every key is ASCII.
    pub fn longest_match(&self, input: &[char], min_len: usize) -> Option<(&str, usize)> {
        let mut node = &self.root;
        let mut best = None;
        for (depth, &c) in input.iter().enumerate() {
            if !c.is_ascii() {
                break;
            }
            match node.children.get(&(c as u8)) {
                Some(child) => node = child,
                None => break,
            }
            if let Some(id) = node.value {
                if depth + 1 >= min_len {
                    best = Some((self.values[id].as_str(), depth + 1));
                }
            }
        }
        best
    }

    fn insert(&mut self, romaji: &str, kana: &str) {
        let mut node = &mut self.root;
        for &b in romaji.as_bytes() {
            node = node.children.entry(b).or_insert_with(Node::new);
        }
        match node.value {
            Some(id) => self.values[id] = kana.to_string(),
            None => {
                node.value = Some(self.values.len());
                self.values.push(kana.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RomajiTrie {
        RomajiTrie::build([
            ("a", "あ"),
            ("ka", "か"),
            ("kya", "きゃ"),
            ("chi", "ち"),
            ("cha", "ちゃ"),
            ("xtu", "っ"),
            ("xtsu", "っ"),
            ("-", "ー"),
        ])
    }

    #[test]
    fn test_vowel_exact() {
        assert_eq!(sample().lookup("a"), TrieLookupResult::Exact("あ"));
    }

    #[test]
    fn test_prefix_k() {
        assert_eq!(sample().lookup("k"), TrieLookupResult::Prefix);
        assert_eq!(sample().lookup("ky"), TrieLookupResult::Prefix);
    }

    #[test]
    fn test_symbol_hyphen() {
        assert_eq!(sample().lookup("-"), TrieLookupResult::Exact("ー"));
    }

    #[test]
    fn test_exact_and_prefix() {
        // "xtu" is a key, and nothing longer starts with it; "xt" is only a prefix.
        let trie = sample();
        assert_eq!(trie.lookup("xt"), TrieLookupResult::Prefix);
        assert_eq!(trie.lookup("xtu"), TrieLookupResult::Exact("っ"));
        let trie = RomajiTrie::build([("n", "ん"), ("na", "な")]);
        assert_eq!(trie.lookup("n"), TrieLookupResult::ExactAndPrefix("ん"));
    }

    #[test]
    fn test_none_for_unknown() {
        assert_eq!(sample().lookup("xyz"), TrieLookupResult::None);
        assert_eq!(sample().lookup("あ"), TrieLookupResult::None);
    }

    #[test]
    fn test_duplicate_key_replaces() {
        let trie = RomajiTrie::build([("ka", "か"), ("ka", "カ")]);
        assert_eq!(trie.lookup("ka"), TrieLookupResult::Exact("カ"));
    }

    #[test]
    fn test_longest_match() {
        let trie = sample();
        let input: Vec<char> = "kyaka".chars().collect();
        assert_eq!(trie.longest_match(&input, 1), Some(("きゃ", 3)));
        let input: Vec<char> = "xtsu".chars().collect();
        assert_eq!(trie.longest_match(&input, 1), Some(("っ", 4)));
        let input: Vec<char> = "ak".chars().collect();
        assert_eq!(trie.longest_match(&input, 1), Some(("あ", 1)));
        assert_eq!(trie.longest_match(&input, 2), None);
        let input: Vec<char> = "kあ".chars().collect();
        assert_eq!(trie.longest_match(&input, 1), None);
    }
}
