use rand::{distributions::Alphanumeric, thread_rng, Rng};
use wordtrie::trie::Trie;

fn main() {
    static POPULATION_SIZE: usize = 10;
    static SIZE: usize = 10;

    // Create our trie and a collection of searches
    let mut trie = Trie::new();
    let mut searches = vec![];

    // Store 10 random words composed of between 1 and 10
    // characters in our search collection and our trie.
    for _i in 0..POPULATION_SIZE {
        let entry: String = thread_rng()
            .sample_iter(&Alphanumeric)
            .take(thread_rng().gen_range(1..=SIZE))
            .map(char::from)
            .collect();
        searches.push(entry.clone());
        trie.add_word(&entry);
    }

    // Every stored word is found exactly, and every one of its
    // leading substrings is a valid prefix.
    for entry in &searches {
        assert!(trie.lookup(entry));
        for (offset, _) in entry.char_indices().skip(1) {
            assert!(trie.is_valid_prefix(&entry[..offset]));
        }
    }

    println!("stored {} words:", trie.count());
    for word in trie.iter() {
        println!("  {word}");
    }

    // Round-trip the whole dictionary through its JSON form. The
    // alphanumeric population never contains the reserved marker.
    let json = trie.dump_json().expect("no marker collision");
    println!("json: {json}");
    let restored = Trie::from_json(&json).expect("well-formed dump");
    assert_eq!(trie.words(), restored.words());

    // Remove everything; pruning leaves the tree empty.
    for entry in &searches {
        trie.remove_word(entry);
    }
    assert!(trie.is_empty());
    println!("removed all words");
}
