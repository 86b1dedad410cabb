//! Provides the JSON tree format.
//!
//! Each node serializes to a JSON object. Keys are either a single
//! character, mapping to the child node object, or the reserved key
//! `"^"`, mapping to the integer `1` when the node ends a word. A
//! non-terminal node simply omits the marker (`0` is accepted on the
//! way in). The root is the outermost object:
//!
//! ```json
//! {"c":{"a":{"t":{"^":1},"r":{"^":1}}}}
//! ```
//!
//! The marker key lives only in the wire format; in memory the flag
//! is a typed field, so a stored word may legitimately contain `^`.
//! Such a trie has no JSON representation, and [`Trie::dump_json`]
//! refuses it with [`MarkerError`] rather than emitting an object in
//! which the marker is ambiguous.
//!
//! The format nests one object per character, so a dump is as deep as
//! the longest stored word. Both directions run through
//! [`serde_stacker`] (and parsing lifts `serde_json`'s recursion
//! limit) so depth is bounded by memory, not by the call stack.
//!
//! Example
//! ```
//! use wordtrie::trie::Trie;
//!
//! let trie = Trie::from_words(["hi", "ho"]);
//! let json = trie.dump_json().unwrap();
//! let restored = Trie::from_json(&json).unwrap();
//! assert_eq!(trie.words(), restored.words());
//! ```

use serde::de::{Deserializer, Error as _, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::trie::{Node, Trie};

/// Reserved wire-format key marking a node as the end of a word.
const TERMINAL_KEY: &str = "^";

/// The reserved marker as a character, for collision checks.
const TERMINAL_CHAR: char = '^';

/// The JSON form did not describe a well-formed trie.
#[derive(Debug, Error)]
#[error("malformed trie json: {0}")]
pub struct ParseError(#[from] serde_json::Error);

/// A stored word contains the reserved marker character, which the
/// wire format cannot represent.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("stored word contains the reserved marker character `^`")]
pub struct MarkerError;

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = self.children.len() + usize::from(self.terminal);
        let mut map = serializer.serialize_map(Some(len))?;
        if self.terminal {
            map.serialize_entry(TERMINAL_KEY, &1u8)?;
        }
        for (ch, child) in &self.children {
            map.serialize_entry(&ch.to_string(), child)?;
        }
        map.end()
    }
}

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = Node;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a trie node object with single-character keys")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Node, A::Error> {
        let mut node = Node::default();
        while let Some(key) = access.next_key::<String>()? {
            if key == TERMINAL_KEY {
                node.terminal = match access.next_value::<u8>()? {
                    0 => false,
                    1 => true,
                    other => {
                        return Err(A::Error::custom(format!(
                            "terminal marker must be 0 or 1, got {other}"
                        )))
                    }
                };
                continue;
            }
            let mut chars = key.chars();
            let (Some(ch), None) = (chars.next(), chars.next()) else {
                return Err(A::Error::custom(format!(
                    "node key must be a single character, got {key:?}"
                )));
            };
            node.children.insert(ch, access.next_value::<Node>()?);
        }
        Ok(node)
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Node, D::Error> {
        deserializer.deserialize_map(NodeVisitor)
    }
}

impl Trie {
    /// Create a Trie by parsing a previously dumped JSON tree.
    pub fn from_json(json: &str) -> Result<Self, ParseError> {
        let mut trie = Self::new();
        trie.load_json(json)?;
        Ok(trie)
    }

    /// Serialize the whole tree to its JSON form.
    ///
    /// Fails with [`MarkerError`] if any stored word contains `^`,
    /// since the wire format reserves that key for the terminal
    /// marker and could not be read back unambiguously.
    pub fn dump_json(&self) -> Result<String, MarkerError> {
        let mut pending = vec![&self.root];
        while let Some(node) = pending.pop() {
            if node.children.contains_key(&TERMINAL_CHAR) {
                return Err(MarkerError);
            }
            pending.extend(node.children.values());
        }
        let mut out = Vec::new();
        let mut serializer = serde_json::Serializer::new(&mut out);
        self.root
            .serialize(serde_stacker::Serializer::new(&mut serializer))
            // Only string keys and small integers appear.
            .expect("trie node serialization is infallible");
        Ok(String::from_utf8(out).expect("serde_json emits utf-8"))
    }

    /// Parse a JSON tree and replace this Trie's contents with it.
    ///
    /// This is a wholesale replacement, not a merge. On a parse
    /// failure the existing contents are left untouched. A terminal
    /// marker on the root object is dropped: the empty string is
    /// never a stored word.
    pub fn load_json(&mut self, json: &str) -> Result<(), ParseError> {
        let mut deserializer = serde_json::Deserializer::from_str(json);
        deserializer.disable_recursion_limit();
        let mut root = Node::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
        deserializer.end()?;
        root.terminal = false;
        self.replace_root(root);
        Ok(())
    }
}
