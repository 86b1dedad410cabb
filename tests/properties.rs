//! Property tests for the trie dictionary invariants.

use std::collections::BTreeSet;

use proptest::prelude::*;
use proptest::sample::Index;

use wordtrie::trie::Trie;

fn word() -> impl Strategy<Value = String> {
    // Non-empty, mixed alphabet including multi-byte code points.
    proptest::string::string_regex("[a-dA-D0-3é☃]{1,12}").unwrap()
}

fn word_set() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(word(), 0..32)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: an added word is found, and every one of its
    /// non-empty prefixes is a valid prefix.
    #[test]
    fn property_added_word_is_found_with_all_prefixes(w in word()) {
        let mut trie = Trie::new();
        trie.add_word(&w);
        prop_assert!(trie.lookup(&w));
        prop_assert!(trie.is_valid_prefix(&w));
        for (offset, _) in w.char_indices().skip(1) {
            prop_assert!(trie.is_valid_prefix(&w[..offset]));
        }
    }

    /// PROPERTY: add then remove leaves the word absent and the trie
    /// structurally identical to before the add.
    #[test]
    fn property_add_then_remove_restores_the_trie(
        base in word_set(),
        w in word()
    ) {
        let mut trie = Trie::from_words(&base);
        trie.remove_word(&w);
        let before = trie.clone();
        trie.add_word(&w);
        trie.remove_word(&w);
        prop_assert!(!trie.lookup(&w));
        prop_assert_eq!(before, trie);
    }

    /// PROPERTY: duplicate insertion changes nothing.
    #[test]
    fn property_add_is_idempotent(base in word_set(), w in word()) {
        let mut trie = Trie::from_words(&base);
        trie.add_word(&w);
        let once = trie.clone();
        trie.add_word(&w);
        prop_assert_eq!(once, trie);
    }

    /// PROPERTY: removing a missing word changes nothing.
    #[test]
    fn property_remove_of_missing_word_is_noop(
        base in word_set(),
        w in word()
    ) {
        let mut trie = Trie::from_words(&base);
        trie.remove_word(&w);
        let snapshot = trie.clone();
        trie.remove_word(&w);
        prop_assert_eq!(snapshot, trie);
    }

    /// PROPERTY: enumeration returns exactly the distinct inserted
    /// words, with no duplicates and no extras.
    #[test]
    fn property_enumeration_matches_the_inserted_set(words in word_set()) {
        let trie = Trie::from_words(&words);
        let expected: BTreeSet<String> = words.iter().cloned().collect();
        let listed = trie.words();
        prop_assert_eq!(listed.len(), expected.len());
        let listed: BTreeSet<String> = listed.into_iter().collect();
        prop_assert_eq!(listed, expected);
        prop_assert_eq!(trie.count(), trie.words().len());
    }

    /// PROPERTY: removal never disturbs the other stored words.
    #[test]
    fn property_removal_preserves_other_words(
        words in word_set(),
        pick in any::<Index>()
    ) {
        prop_assume!(!words.is_empty());
        let victim = words[pick.index(words.len())].clone();
        let mut trie = Trie::from_words(&words);
        trie.remove_word(&victim);
        prop_assert!(!trie.lookup(&victim));
        for w in &words {
            if *w != victim {
                prop_assert!(trie.lookup(w), "lost {w:?} removing {victim:?}");
            }
        }
    }

    /// PROPERTY: the JSON dump parses back to the same word set. No
    /// strategy word contains `^`, so dumping always succeeds.
    #[test]
    fn property_json_round_trips_the_word_set(words in word_set()) {
        let trie = Trie::from_words(&words);
        let json = trie.dump_json().expect("dump");
        let restored = Trie::from_json(&json).expect("round trip");
        prop_assert_eq!(trie.words(), restored.words());
        prop_assert_eq!(trie.count(), restored.count());
    }

    /// PROPERTY: the round trip holds for words of any length,
    /// including ones nesting far past the default parser depth.
    #[test]
    fn property_json_round_trips_long_words(len in 1usize..4096) {
        let word: String = "ab".repeat(len);
        let trie = Trie::from_words([word.as_str()]);
        let json = trie.dump_json().expect("dump");
        let restored = Trie::from_json(&json).expect("round trip");
        prop_assert!(restored.lookup(&word));
        prop_assert_eq!(restored.count(), 1);
    }

    /// PROPERTY: `from_json` never panics on arbitrary input.
    #[test]
    fn property_from_json_never_panics(s in ".{0,64}") {
        let _ = Trie::from_json(&s);
    }
}
