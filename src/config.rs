//! Behaviour switches for a `PrefixTree`.
//!
//! Both knobs default to the historical behaviour of the tree: removing a leaf
//! word clears every sibling of that leaf, and prefix searches list matches in
//! reverse pre-order.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::{Error, Result};

/// Environment variable read by [`TrieConfig::from_env`] for the removal policy.
pub const REMOVAL_VAR: &str = "PREFIX_TREE_REMOVAL";

/// Environment variable read by [`TrieConfig::from_env`] for the match order.
pub const ORDER_VAR: &str = "PREFIX_TREE_ORDER";

/// What happens to the tree when a removed word ends at a leaf node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum RemovalPolicy {
    /// The leaf's parent loses all of its children, so sibling words that
    /// branch off the same parent are dropped along with the removed word.
    #[default]
    Faithful,
    /// Only the matched leaf is unlinked from its parent.
    Corrected,
}

impl RemovalPolicy {
    fn as_str(self) -> &'static str {
        match self {
            RemovalPolicy::Faithful => "faithful",
            RemovalPolicy::Corrected => "corrected",
        }
    }
}

impl fmt::Display for RemovalPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RemovalPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "faithful" => Ok(RemovalPolicy::Faithful),
            "corrected" => Ok(RemovalPolicy::Corrected),
            _ => Err(Error::InvalidRemovalPolicy(s.to_string())),
        }
    }
}

/// Order in which `find_by_prefix` returns its matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum MatchOrder {
    /// Reverse of the depth-first pre-order discovery order, children visited
    /// in insertion order.
    #[default]
    ReversePreOrder,
    /// Depth-first pre-order, children visited in insertion order.
    PreOrder,
    /// Sorted by Unicode scalar value, the way `str` compares.
    Lexicographic,
}

impl MatchOrder {
    fn as_str(self) -> &'static str {
        match self {
            MatchOrder::ReversePreOrder => "reverse-pre-order",
            MatchOrder::PreOrder => "pre-order",
            MatchOrder::Lexicographic => "lexicographic",
        }
    }

    /// Rearranges words collected in pre-order into this order.
    pub(crate) fn arrange(self, mut words: Vec<String>) -> Vec<String> {
        match self {
            MatchOrder::ReversePreOrder => words.reverse(),
            MatchOrder::PreOrder => {}
            MatchOrder::Lexicographic => words.sort_unstable(),
        }
        words
    }
}

impl fmt::Display for MatchOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "reverse-pre-order" => Ok(MatchOrder::ReversePreOrder),
            "pre-order" => Ok(MatchOrder::PreOrder),
            "lexicographic" => Ok(MatchOrder::Lexicographic),
            _ => Err(Error::InvalidMatchOrder(s.to_string())),
        }
    }
}

/// Configuration of a `PrefixTree`.
///
/// ```rust
/// use prefix_tree::{MatchOrder, PrefixTree, RemovalPolicy, TrieConfig};
///
/// let config = TrieConfig::default()
///     .with_removal(RemovalPolicy::Corrected)
///     .with_order(MatchOrder::Lexicographic);
///
/// let mut tree = PrefixTree::with_config(config);
/// tree.insert("CAT");
/// tree.insert("CAR");
/// tree.remove("CAT");
///
/// assert!(tree.contains_word("CAR"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct TrieConfig {
    /// How leaf words are detached on removal
    pub removal: RemovalPolicy,

    /// How prefix search results are ordered
    pub order: MatchOrder,
}

impl TrieConfig {
    /// Returns this config with the given removal policy.
    pub fn with_removal(mut self, removal: RemovalPolicy) -> Self {
        self.removal = removal;
        self
    }

    /// Returns this config with the given match order.
    pub fn with_order(mut self, order: MatchOrder) -> Self {
        self.order = order;
        self
    }

    /// Reads the configuration from `PREFIX_TREE_REMOVAL` and
    /// `PREFIX_TREE_ORDER`. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`TrieConfig::from_env`] but resolves variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = TrieConfig::default();

        if let Some(value) = lookup(REMOVAL_VAR) {
            config.removal = parse_var(REMOVAL_VAR, &value)?;
        }
        if let Some(value) = lookup(ORDER_VAR) {
            config.order = parse_var(ORDER_VAR, &value)?;
        }

        debug!(removal = %config.removal, order = %config.order, "loaded prefix tree config");
        Ok(config)
    }
}

fn parse_var<T>(var: &'static str, value: &str) -> Result<T>
where
    T: FromStr<Err = Error>,
{
    value.parse().map_err(|source| Error::Config {
        var,
        source: Box::new(source),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = TrieConfig::default();

        assert_eq!(config.removal, RemovalPolicy::Faithful);
        assert_eq!(config.order, MatchOrder::ReversePreOrder);
    }

    #[test]
    fn test_removal_policy_from_str() {
        assert_eq!("faithful".parse::<RemovalPolicy>(), Ok(RemovalPolicy::Faithful));
        assert_eq!(" Corrected ".parse::<RemovalPolicy>(), Ok(RemovalPolicy::Corrected));
        assert_eq!(
            "lenient".parse::<RemovalPolicy>(),
            Err(Error::InvalidRemovalPolicy("lenient".to_string()))
        );
    }

    #[test]
    fn test_match_order_from_str() {
        assert_eq!("reverse-pre-order".parse::<MatchOrder>(), Ok(MatchOrder::ReversePreOrder));
        assert_eq!("PRE_ORDER".parse::<MatchOrder>(), Ok(MatchOrder::PreOrder));
        assert_eq!("lexicographic".parse::<MatchOrder>(), Ok(MatchOrder::Lexicographic));
        assert!("sorted".parse::<MatchOrder>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for policy in [RemovalPolicy::Faithful, RemovalPolicy::Corrected] {
            assert_eq!(policy.to_string().parse::<RemovalPolicy>(), Ok(policy));
        }
        for order in [
            MatchOrder::ReversePreOrder,
            MatchOrder::PreOrder,
            MatchOrder::Lexicographic,
        ] {
            assert_eq!(order.to_string().parse::<MatchOrder>(), Ok(order));
        }
    }

    #[test]
    fn test_arrange() {
        let words = vec!["b".to_string(), "c".to_string(), "a".to_string()];

        assert_eq!(MatchOrder::PreOrder.arrange(words.clone()), ["b", "c", "a"]);
        assert_eq!(
            MatchOrder::ReversePreOrder.arrange(words.clone()),
            ["a", "c", "b"]
        );
        assert_eq!(MatchOrder::Lexicographic.arrange(words), ["a", "b", "c"]);
    }

    #[test]
    fn test_from_lookup() {
        let vars: HashMap<&str, &str> =
            [(REMOVAL_VAR, "corrected"), (ORDER_VAR, "pre-order")].into();
        let config = TrieConfig::from_lookup(|var| vars.get(var).map(|v| v.to_string())).unwrap();

        assert_eq!(config.removal, RemovalPolicy::Corrected);
        assert_eq!(config.order, MatchOrder::PreOrder);
    }

    #[test]
    fn test_from_lookup_unset_keeps_defaults() {
        let config = TrieConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, TrieConfig::default());
    }

    #[test]
    fn test_from_lookup_rejects_bad_value() {
        let err = TrieConfig::from_lookup(|var| {
            (var == ORDER_VAR).then(|| "upside-down".to_string())
        })
        .unwrap_err();

        assert_eq!(
            err,
            Error::Config {
                var: ORDER_VAR,
                source: Box::new(Error::InvalidMatchOrder("upside-down".to_string())),
            }
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_tokens() {
        use serde_test::{assert_tokens, Token};

        assert_tokens(
            &RemovalPolicy::Corrected,
            &[Token::UnitVariant {
                name: "RemovalPolicy",
                variant: "corrected",
            }],
        );

        assert_tokens(
            &TrieConfig::default(),
            &[
                Token::Struct {
                    name: "TrieConfig",
                    len: 2,
                },
                Token::Str("removal"),
                Token::UnitVariant {
                    name: "RemovalPolicy",
                    variant: "faithful",
                },
                Token::Str("order"),
                Token::UnitVariant {
                    name: "MatchOrder",
                    variant: "reverse-pre-order",
                },
                Token::StructEnd,
            ],
        );
    }
}
