//! Provides a trie-based dictionary for storing a set of words with
//! exact lookup, prefix checks, and a JSON tree format.
//!
//! Words are walked one [`char`] at a time; each code point along a
//! word gets its own node. Removing a word prunes any branch left
//! dead by the removal back to the nearest node which still roots a
//! word, so the tree never carries paths that no stored word uses.
//!
//! The whole dictionary can be dumped to a compact JSON tree and
//! loaded back, either into an existing trie ([`trie::Trie::load_json`],
//! a wholesale replacement) or as a constructor
//! ([`trie::Trie::from_json`]). Malformed JSON surfaces as a
//! [`json::ParseError`], and a word set the wire format cannot
//! represent (one containing the reserved `^` marker) fails to dump
//! with a [`json::MarkerError`]; malformed *word* input (the empty
//! string) is deliberately benign and just answers `false` or does
//! nothing.
//!
//! ```
//! use wordtrie::trie::Trie;
//!
//! let mut trie = Trie::from_words(["cat", "car", "dog"]);
//! assert!(trie.lookup("cat"));
//! assert!(trie.is_valid_prefix("ca"));
//! assert!(!trie.lookup("ca"));
//!
//! trie.remove_word("car");
//! assert!(trie.is_valid_prefix("ca")); // "cat" still passes through
//!
//! let json = trie.dump_json().expect("no marker collision");
//! let restored = Trie::from_json(&json).expect("round trip");
//! assert_eq!(restored.words(), trie.words());
//! ```
//!
//! Examples:
//! * trie : [`crate::trie`]
//! * iterator : [`crate::iterator`]
//! * json format : [`crate::json`]
//!
//! Typical usages for this data structure:
//!  - Spell-check style dictionaries
//!  - Autocomplete prefix validation
//!  - Storing large numbers of words with significant amounts of
//!    shared-prefix duplication
//!  - ...

pub mod iterator;

pub mod json;

pub mod trie;
