//! Provides Trie word iterators.
//!
//! Both iterators walk the tree depth-first, yielding each stored
//! word as an owned [`String`] in lexicographic order. The prefix
//! spelled so far is kept in a single buffer; pushing into a child
//! appends its character, backing out pops it.
use std::collections::btree_map;

use crate::trie::{Node, Trie};

/// Borrowing iterator over the words of a Trie.
#[derive(Debug)]
pub struct Words<'a> {
    stack: Vec<btree_map::Iter<'a, char, Node>>,
    prefix: String,
}

impl<'a> Iterator for Words<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let level = self.stack.last_mut()?;
            match level.next() {
                Some((&ch, node)) => {
                    self.prefix.push(ch);
                    self.stack.push(node.children.iter());
                    if node.terminal {
                        return Some(self.prefix.clone());
                    }
                }
                None => {
                    // This level is exhausted; drop back to the parent.
                    self.stack.pop();
                    self.prefix.pop();
                }
            }
        }
    }
}

impl<'a> IntoIterator for &'a Trie {
    type Item = String;
    type IntoIter = Words<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Words {
            stack: vec![self.root.children.iter()],
            prefix: String::new(),
        }
    }
}

/// Consuming iterator over the words of a Trie.
#[derive(Debug)]
pub struct IntoWords {
    stack: Vec<btree_map::IntoIter<char, Node>>,
    prefix: String,
}

impl Iterator for IntoWords {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let level = self.stack.last_mut()?;
            match level.next() {
                Some((ch, mut node)) => {
                    self.prefix.push(ch);
                    let children = std::mem::take(&mut node.children);
                    self.stack.push(children.into_iter());
                    if node.terminal {
                        return Some(self.prefix.clone());
                    }
                }
                None => {
                    self.stack.pop();
                    self.prefix.pop();
                }
            }
        }
    }
}

impl IntoIterator for Trie {
    type Item = String;
    type IntoIter = IntoWords;

    fn into_iter(mut self) -> Self::IntoIter {
        IntoWords {
            stack: vec![std::mem::take(&mut self.root.children).into_iter()],
            prefix: String::new(),
        }
    }
}

impl Trie {
    /// Create an iterator over the words of the Trie.
    pub fn iter(&self) -> Words<'_> {
        self.into_iter()
    }
}
