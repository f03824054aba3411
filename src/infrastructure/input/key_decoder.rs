use std::collections::{HashMap, VecDeque};
use std::sync::OnceLock;

use super::key_map::{DOUBLE_ESCAPE, KEY_MAP};

/// Streaming decoder turning raw terminal input into key tokens.
///
/// Escape sequences may be split across calls; a partial sequence is
/// held until more characters arrive. With `flush` set there is no
/// continuation, so a held prefix resolves to its own key (a lone
/// escape becomes `escape`) or is dropped.
pub struct KeyDecoder {
    trie: &'static Trie,
    branch: usize,
    chars: VecDeque<char>,
}

struct TrieNode {
    terminal: Option<&'static [&'static str]>,
    children: HashMap<char, usize>,
}

struct Trie {
    nodes: Vec<TrieNode>,
}

const ROOT: usize = 0;

impl Trie {
    /// One trie is shared by all decoders; the key map is static.
    fn shared() -> &'static Trie {
        static TRIE: OnceLock<Trie> = OnceLock::new();
        TRIE.get_or_init(Trie::build)
    }

    fn build() -> Trie {
        let mut nodes = vec![TrieNode {
            terminal: None,
            children: HashMap::new(),
        }];

        for (seq, keys) in KEY_MAP {
            // The double escape stays out of the trie: matching it would
            // swallow the first byte of an escape sequence that follows
            // an escape key press. Adjacent escapes are collapsed in a
            // post-pass instead.
            if *seq == DOUBLE_ESCAPE {
                continue;
            }
            let mut node = ROOT;
            for ch in seq.chars() {
                node = match nodes[node].children.get(&ch) {
                    Some(&next) => next,
                    None => {
                        nodes.push(TrieNode {
                            terminal: None,
                            children: HashMap::new(),
                        });
                        let next = nodes.len() - 1;
                        nodes[node].children.insert(ch, next);
                        next
                    }
                };
            }
            nodes[node].terminal = Some(keys);
        }

        Trie { nodes }
    }
}

impl Default for KeyDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyDecoder {
    pub fn new() -> Self {
        Self {
            trie: Trie::shared(),
            branch: ROOT,
            chars: VecDeque::new(),
        }
    }

    /// Decode a chunk of input into key tokens.
    pub fn decode(&mut self, text: &str, flush: bool) -> Vec<String> {
        self.chars.extend(text.chars());
        let mut result: Vec<String> = Vec::new();

        while let Some(c) = self.chars.pop_front() {
            let node = &self.trie.nodes[self.branch];
            if let Some(&next) = node.children.get(&c) {
                let next_node = &self.trie.nodes[next];
                if next_node.children.is_empty() {
                    // Unambiguous end of a sequence.
                    let keys = next_node.terminal.unwrap_or(&[]);
                    result.extend(keys.iter().map(|k| k.to_string()));
                    self.branch = ROOT;
                } else {
                    self.branch = next;
                }
            } else if self.branch == ROOT {
                // A normal character.
                result.push(c.to_string());
            } else {
                // Mid-sequence mismatch. The walked prefix may itself be
                // a complete sequence; emit it if so, drop it otherwise.
                if let Some(keys) = self.trie.nodes[self.branch].terminal {
                    result.extend(keys.iter().map(|k| k.to_string()));
                }
                self.branch = ROOT;
                self.chars.push_front(c);
            }
        }

        if flush && self.branch != ROOT {
            if let Some(keys) = self.trie.nodes[self.branch].terminal {
                result.extend(keys.iter().map(|k| k.to_string()));
            }
            self.branch = ROOT;
        }

        collapse_double_escapes(&mut result);
        result
    }
}

/// Merge each adjacent pair of `escape` tokens into one. Some Windows
/// consoles send the escape key as two escape characters.
fn collapse_double_escapes(result: &mut Vec<String>) {
    let mut may_be_double = false;
    result.retain(|token| {
        let is_escape = token == "escape";
        if is_escape && may_be_double {
            may_be_double = false;
            false
        } else {
            may_be_double = is_escape;
            true
        }
    });
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn check_decoder(input: &str, expected: &[&str]) {
        let mut decoder = KeyDecoder::new();
        let result = decoder.decode(input, true);
        assert_eq!(result, expected, "input: {input:?}");
    }

    /// Concatenate the sequences (with a separator) and compare the
    /// decoded stream against the flattened expected tokens.
    fn compare_with_keys<'a, I>(keys: I, sep: &str)
    where
        I: IntoIterator<Item = &'a (&'a str, &'a [&'a str])>,
    {
        let mut input = String::new();
        let mut expected: Vec<String> = Vec::new();

        for (seq, names) in keys {
            input.push_str(seq);
            expected.extend(names.iter().map(|k| k.to_string()));
            input.push_str(sep);
            for ch in sep.chars() {
                expected.push(ch.to_string());
            }
        }

        let mut decoder = KeyDecoder::new();
        let result = decoder.decode(&input, true);
        assert_eq!(result, expected, "sep: {sep:?}");
    }

    /// Every sequence except the bare and double escape; those are
    /// ambiguous when concatenated and are covered separately.
    fn unambiguous_keys() -> Vec<&'static (&'static str, &'static [&'static str])> {
        KEY_MAP
            .iter()
            .filter(|(seq, _)| *seq != "\x1b" && *seq != DOUBLE_ESCAPE)
            .collect()
    }

    // =========================================================================
    // Tests: whole-map round trips
    // =========================================================================

    #[test]
    fn decodes_every_sequence_in_order() {
        let keys = unambiguous_keys();
        for sep in ["", " ", "a"] {
            compare_with_keys(keys.iter().copied(), sep);
            compare_with_keys(keys.iter().rev().copied(), sep);
        }
    }

    #[test]
    fn decodes_random_sequence_streams() {
        let keys = unambiguous_keys();
        // Deterministic LCG so failures reproduce.
        let mut state: u64 = 0x2545f491_4f6cdd1d;
        let mut next = move || {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (state >> 33) as usize
        };

        for sep in ["", " ", "a"] {
            for _ in 0..200 {
                let sample: Vec<_> = (0..50).map(|_| keys[next() % keys.len()]).collect();
                compare_with_keys(sample, sep);
            }
        }
    }

    // =========================================================================
    // Tests: ambiguous escapes
    // =========================================================================

    #[test]
    fn double_escape_decodes_as_one_escape() {
        check_decoder(" \x1b ", &[" ", "escape", " "]);
        check_decoder(" \x1b\x1b ", &[" ", "escape", " "]);
        check_decoder(" \x1b\x1b\x1b ", &[" ", "escape", "escape", " "]);
        check_decoder(" \x1b\x1b\x1b\x1b ", &[" ", "escape", "escape", " "]);
    }

    #[test]
    fn escape_before_a_sequence_stays_separate() {
        // Greedy double-escape matching would eat the '[' opener here
        // and mangle the rest into plain characters.
        check_decoder(" \x1b\x1b[[D", &[" ", "escape", "f4"]);
    }

    #[test]
    fn escape_then_tab_decodes_as_shift_tab() {
        // Could be read as escape+escape+tab; the eager reading wins.
        check_decoder(" \x1b\x1b\x09", &[" ", "escape", "shift+tab"]);
    }

    // =========================================================================
    // Tests: split sequences
    // =========================================================================

    #[test]
    fn sequence_in_one_chunk() {
        let mut decoder = KeyDecoder::new();
        assert_eq!(decoder.decode("\x1b[A", false), ["up"]);
    }

    #[test]
    fn sequence_char_by_char() {
        let mut decoder = KeyDecoder::new();
        assert!(decoder.decode("\x1b", false).is_empty());
        assert!(decoder.decode("[", false).is_empty());
        assert_eq!(decoder.decode("A", false), ["up"]);
    }

    #[test]
    fn sequence_split_after_the_bracket() {
        let mut decoder = KeyDecoder::new();
        assert!(decoder.decode("\x1b[", false).is_empty());
        assert_eq!(decoder.decode("A", false), ["up"]);
    }

    #[test]
    fn sequence_split_after_the_escape() {
        let mut decoder = KeyDecoder::new();
        assert!(decoder.decode("\x1b", false).is_empty());
        assert_eq!(decoder.decode("[A", false), ["up"]);
    }

    #[test]
    fn flushing_resolves_each_chunk_on_its_own() {
        let mut decoder = KeyDecoder::new();
        assert_eq!(decoder.decode("\x1b", true), ["escape"]);
        assert_eq!(decoder.decode("[", true), ["["]);
        assert_eq!(decoder.decode("A", true), ["A"]);
    }

    #[test]
    fn ignored_sequences_produce_no_tokens() {
        let mut decoder = KeyDecoder::new();
        assert!(decoder.decode("\x1b[E", false).is_empty());
        assert_eq!(decoder.decode("x", false), ["x"]);
    }

    #[test]
    fn plain_text_passes_through() {
        let mut decoder = KeyDecoder::new();
        let result = decoder.decode("ab c", false);
        assert_eq!(result, ["a", "b", " ", "c"]);
    }
}
