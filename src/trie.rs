//! The main prefix tree implementation.
//!
//! This module contains the `PrefixTree` type, which provides the primary API
//! for indexing words: insertion, membership, prefix search and removal.

use std::fmt;

use tracing::{debug, trace};

use crate::config::{RemovalPolicy, TrieConfig};
use crate::node::{NodeArena, NodeId};
use crate::prefix_view::PrefixView;

/// A mutable prefix tree over UTF-16 code unit sequences.
///
/// Every edge is labeled with one UTF-16 code unit, so a character outside
/// the Basic Multilingual Plane takes two edges, one per surrogate. Words
/// sharing a prefix share the nodes of that prefix, so the final shape of the
/// tree only depends on the set of words inserted, not on their order. Children are kept in the order
/// they were first created, which is the order searches and removals walk
/// them in.
///
/// The tree performs no case folding or normalization; callers decide how
/// words are spelled before handing them in.
#[derive(Clone)]
pub struct PrefixTree {
    /// Storage for every node, root in the first slot
    pub(crate) arena: NodeArena,

    /// The number of indexed words
    size: usize,

    config: TrieConfig,
}

impl PrefixTree {
    /// Creates a new, empty tree with the default configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_tree::PrefixTree;
    ///
    /// let tree = PrefixTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_config(TrieConfig::default())
    }

    /// Creates a new, empty tree with the given configuration.
    pub fn with_config(config: TrieConfig) -> Self {
        PrefixTree {
            arena: NodeArena::new(),
            size: 0,
            config,
        }
    }

    /// Returns the configuration this tree was built with.
    pub fn config(&self) -> &TrieConfig {
        &self.config
    }

    /// Returns the number of indexed words.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_tree::PrefixTree;
    ///
    /// let mut tree = PrefixTree::new();
    /// tree.insert("hello");
    /// tree.insert("hello");
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if no word is indexed.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of live nodes, root included.
    pub fn node_count(&self) -> usize {
        self.arena.live()
    }

    /// Indexes `word`.
    ///
    /// Missing nodes along the path are created one per code unit, and the
    /// node of the last unit is marked terminal. Inserting a word that is
    /// already indexed changes nothing. The empty word is ignored since the root can
    /// never be terminal.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_tree::PrefixTree;
    ///
    /// let mut tree = PrefixTree::new();
    /// tree.insert("CAT");
    ///
    /// assert!(tree.contains_word("CAT"));
    /// assert!(!tree.contains_word("CA"));
    /// ```
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }

        let mut current = NodeId::ROOT;
        for unit in word.encode_utf16() {
            current = match self.arena[current].child(unit) {
                Some(child) => child,
                None => {
                    let child = self.arena.attach(current, unit);
                    trace!(?unit, node = child.index(), "created node");
                    child
                }
            };
        }

        let node = &mut self.arena[current];
        if !node.is_terminal {
            node.is_terminal = true;
            self.size += 1;
            debug!(word, "indexed word");
        }
    }

    /// Returns `true` if `word` is indexed.
    ///
    /// Prefixes of indexed words are not words themselves unless they were
    /// inserted too. The empty word is never contained.
    pub fn contains_word(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }

        self.resolve(word)
            .map_or(false, |id| self.arena[id].is_terminal)
    }

    /// Returns every indexed word that starts with `prefix`.
    ///
    /// With the default [`MatchOrder::ReversePreOrder`](crate::MatchOrder) the
    /// words come out in the reverse of a depth-first pre-order walk from the
    /// prefix node, children taken in insertion order. The empty prefix
    /// matches every word. A prefix with no matching word yields an empty
    /// vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_tree::PrefixTree;
    ///
    /// let mut tree = PrefixTree::new();
    /// tree.insert("CAR");
    /// tree.insert("CART");
    /// tree.insert("CAT");
    ///
    /// assert_eq!(tree.find_by_prefix("CA"), ["CAT", "CART", "CAR"]);
    /// assert!(tree.find_by_prefix("DOG").is_empty());
    /// ```
    pub fn find_by_prefix(&self, prefix: &str) -> Vec<String> {
        let view = self.view_prefix(prefix);
        if !view.exists() {
            trace!(prefix, "prefix path not found");
            return Vec::new();
        }

        self.config.order.arrange(view.iter().collect())
    }

    /// Unindexes `word`.
    ///
    /// If the word's node has children, only its terminal mark is cleared and
    /// longer words through it stay indexed. If the node is a leaf it is
    /// detached according to the configured [`RemovalPolicy`]: under
    /// `Faithful` the parent loses *all* of its children, sibling words
    /// included; under `Corrected` only the leaf goes.
    ///
    /// The empty word and words that are not indexed leave the tree unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_tree::PrefixTree;
    ///
    /// let mut tree = PrefixTree::new();
    /// tree.insert("CAT");
    /// tree.insert("CAR");
    /// tree.remove("CAT");
    ///
    /// // Both leaves hung off the same `A` node
    /// assert!(!tree.contains_word("CAT"));
    /// assert!(!tree.contains_word("CAR"));
    /// ```
    pub fn remove(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }

        let target = match self.find_terminal(word) {
            Some(id) => id,
            None => {
                debug!(word, "no indexed word to remove");
                return;
            }
        };

        if !self.arena[target].is_leaf() {
            self.arena[target].is_terminal = false;
            self.size -= 1;
            debug!(word, "cleared terminal mark, longer words kept");
            return;
        }

        let parent = self.arena[target].parent;
        let dropped = match self.config.removal {
            // Root is never terminal, so a matched node always has a parent
            RemovalPolicy::Faithful => parent.map_or(0, |parent| self.arena.detach_children(parent)),
            RemovalPolicy::Corrected => self.arena.detach(target),
        };

        self.size -= dropped;
        debug!(word, dropped, policy = %self.config.removal, "detached leaf");
    }

    /// Same as [`PrefixTree::remove`], treating an absent word as a no-op.
    pub fn remove_opt(&mut self, word: Option<&str>) {
        if let Some(word) = word {
            self.remove(word);
        }
    }

    /// Creates a view of the subtree below `prefix`.
    pub fn view_prefix(&self, prefix: &str) -> PrefixView<'_> {
        PrefixView::new(self, prefix)
    }

    /// Rebuilds the prefix spelled by the path to `id`.
    ///
    /// Returns `None` if `id` no longer refers to a node of this tree, e.g.
    /// because a removal detached it, or if its path stops between the two
    /// surrogates of one character.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_tree::PrefixTree;
    ///
    /// let mut tree = PrefixTree::new();
    /// tree.insert("MEET GEORGE");
    ///
    /// let node = tree.view_prefix("MEET").node().unwrap();
    /// assert_eq!(tree.word_of(node), Some("MEET".to_string()));
    /// ```
    pub fn word_of(&self, id: NodeId) -> Option<String> {
        self.arena
            .get(id)
            .and_then(|_| String::from_utf16(&self.arena.units_of(id)).ok())
    }

    /// Returns every indexed word in depth-first pre-order.
    pub fn words(&self) -> Vec<String> {
        self.view_prefix("").iter().collect()
    }

    /// Unindexes every word and drops all nodes but the root.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.size = 0;
    }

    /// Follows `path` edge by edge from the root. The empty path resolves to
    /// the root itself.
    pub(crate) fn resolve(&self, path: &str) -> Option<NodeId> {
        path.encode_utf16()
            .try_fold(NodeId::ROOT, |current, unit| self.arena[current].child(unit))
    }

    /// Finds the first terminal node, in pre-order from the root, whose
    /// rebuilt word equals `word`.
    ///
    /// Rebuilt words are unique per node because they spell the node's path,
    /// so the only candidate is the node `word` resolves to.
    fn find_terminal(&self, word: &str) -> Option<NodeId> {
        self.resolve(word)
            .filter(|&id| self.arena[id].is_terminal)
    }
}

impl Default for PrefixTree {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PrefixTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixTree")
            .field("len", &self.size)
            .field("config", &self.config)
            .field("words", &self.words())
            .finish()
    }
}

impl<S: AsRef<str>> Extend<S> for PrefixTree {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for PrefixTree {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tree = PrefixTree::new();
        tree.extend(iter);
        tree
    }
}
