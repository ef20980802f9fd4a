//! # Prefix Tree
//!
//! A character prefix tree (trie) for indexing words.
//!
//! Each edge of the tree is labeled with one UTF-16 code unit, and each node
//! stands for the prefix spelled by the edges leading to it. Nodes are stored
//! by value in an arena and point back to their parent by index, so a node's
//! word can be rebuilt without keeping it around as a string.
//!
//! ## Features
//!
//! - **Membership**: exact word lookup in `O(k)` for a word of `k` code units
//! - **Prefix Search**: every indexed word that starts with a given prefix
//! - **Removal**: unindex a word, with a configurable pruning policy
//! - **Prefix Views**: borrowed views over the subtree below a prefix
//!
//! None of the four core operations can fail. Empty words are never indexed,
//! unknown words are simply not found, and removing something that is not
//! there leaves the tree untouched.
//!
//! ## Example
//!
//! ```rust
//! use prefix_tree::PrefixTree;
//!
//! let mut tree = PrefixTree::new();
//! tree.insert("HIT THE GYM");
//! tree.insert("PAY BILLS");
//!
//! assert!(tree.contains_word("HIT THE GYM"));
//! assert!(!tree.contains_word("HIT THE"));
//! assert_eq!(tree.find_by_prefix("HIT"), vec!["HIT THE GYM".to_string()]);
//!
//! tree.remove("PAY BILLS");
//! assert!(!tree.contains_word("PAY BILLS"));
//! ```

mod config;
pub mod node;
mod prefix_view;
mod trie;

// Re-export public types
pub use crate::config::{MatchOrder, RemovalPolicy, TrieConfig, ORDER_VAR, REMOVAL_VAR};
pub use crate::node::NodeId;
pub use crate::prefix_view::{PrefixView, PrefixViewIter};
pub use crate::trie::PrefixTree;

/// Errors that can occur while configuring a prefix tree.
///
/// The tree operations themselves never fail; this type only covers parsing
/// and loading of [`TrieConfig`] values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Name does not match any removal policy
    #[error("unknown removal policy `{0}`, expected `faithful` or `corrected`")]
    InvalidRemovalPolicy(String),

    /// Name does not match any match order
    #[error(
        "unknown match order `{0}`, expected `reverse-pre-order`, `pre-order` or `lexicographic`"
    )]
    InvalidMatchOrder(String),

    /// An environment variable held a value that could not be parsed
    #[error("invalid value in environment variable {var}")]
    Config {
        /// Name of the offending variable
        var: &'static str,
        /// Why the value was rejected
        #[source]
        source: Box<Error>,
    },
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
