//! Prefix view into a prefix tree.
//!
//! This module provides the `PrefixView` type, a borrowed view of the subtree
//! below one prefix. Prefix search in `PrefixTree` is built on top of it.

use std::fmt;

use crate::node::{NodeArena, NodeId};
use crate::PrefixTree;

/// A lightweight view into the subtree reached by a prefix.
///
/// # Examples
///
/// ```
/// use prefix_tree::PrefixTree;
///
/// let mut tree = PrefixTree::new();
/// tree.insert("hello");
/// tree.insert("help");
/// tree.insert("world");
///
/// let view = tree.view_prefix("hel");
///
/// assert!(view.exists());
/// assert_eq!(view.len(), 2);
/// assert!(view.contains_word("hello"));
/// assert!(!view.contains_word("world"));
/// ```
#[derive(Clone)]
pub struct PrefixView<'a> {
    /// The tree this view borrows from
    tree: &'a PrefixTree,

    /// The prefix defining this view
    prefix: String,

    /// The node the prefix resolves to, if its whole path exists
    node: Option<NodeId>,
}

/// An iterator over the words of a `PrefixView`.
///
/// Words are produced in depth-first pre-order, children visited in the order
/// they were first inserted. Each word is rebuilt from its node's parent links.
pub struct PrefixViewIter<'a> {
    /// Nodes still to visit, next one on top
    stack: Vec<NodeId>,

    /// Arena of the tree being walked
    arena: &'a NodeArena,
}

impl<'a> PrefixView<'a> {
    /// Creates a view of `tree` at `prefix`.
    pub fn new(tree: &'a PrefixTree, prefix: &str) -> Self {
        PrefixView {
            tree,
            prefix: prefix.to_string(),
            node: tree.resolve(prefix),
        }
    }

    /// Returns the prefix for this view.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the underlying tree.
    pub fn tree(&self) -> &'a PrefixTree {
        self.tree
    }

    /// Returns whether the prefix path exists in the tree.
    ///
    /// A prefix can exist without any word below it, e.g. after a removal
    /// pruned the words but left the path in place.
    pub fn exists(&self) -> bool {
        self.node.is_some()
    }

    /// Returns the node the prefix resolves to, if its whole path exists.
    pub fn node(&self) -> Option<NodeId> {
        self.node
    }

    /// Returns the number of indexed words under this prefix.
    ///
    /// Counts terminal nodes directly without rebuilding any word.
    pub fn len(&self) -> usize {
        let arena = &self.tree.arena;
        let mut count = 0;
        let mut stack: Vec<NodeId> = self.node.into_iter().collect();

        while let Some(id) = stack.pop() {
            let node = &arena[id];
            if node.is_terminal {
                count += 1;
            }
            stack.extend(node.children.iter().map(|&(_, child)| child));
        }

        count
    }

    /// Returns whether no indexed word starts with this prefix.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Checks whether `word` is indexed and starts with this view's prefix.
    pub fn contains_word(&self, word: &str) -> bool {
        word.starts_with(self.prefix.as_str()) && self.tree.contains_word(word)
    }

    /// Returns an iterator over the words under this prefix, in pre-order.
    pub fn iter(&self) -> PrefixViewIter<'a> {
        PrefixViewIter {
            stack: self.node.into_iter().collect(),
            arena: &self.tree.arena,
        }
    }
}

impl fmt::Debug for PrefixView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixView")
            .field("prefix", &self.prefix)
            .field("exists", &self.exists())
            .field("words", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<'a> IntoIterator for &PrefixView<'a> {
    type Item = String;
    type IntoIter = PrefixViewIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Iterator for PrefixViewIter<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.arena;

        while let Some(id) = self.stack.pop() {
            let node = &arena[id];

            // Reversed so the first-inserted child is popped first
            self.stack
                .extend(node.children.iter().rev().map(|&(_, child)| child));

            if node.is_terminal {
                return Some(arena.word_of(id));
            }
        }

        None
    }
}
