use std::fmt;
use std::io;
use std::iter::FromIterator;

use crate::config::Config;
use crate::node::Node;

/// A prefix tree mapping string keys to lists of values.
///
/// Keys are walked one `char` at a time, so any alphabet works. Nodes are
/// created on insertion and never removed; removing a value leaves the path
/// in place.
///
/// Mutation takes `&mut self`, so a trie shared across threads needs an
/// outer lock such as `RwLock<Trie<T>>`.
pub struct Trie<T> {
    pub(crate) root: Node<T>,
}

impl<T> Trie<T> {
    /// An empty trie that rejects duplicate values per key.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            root: Node::new(config.allow_duplicate_values, true),
        }
    }

    /// An empty trie that keeps every value added, equal or not.
    ///
    /// The policy applies to the whole tree: nodes created below the root
    /// allow duplicates too.
    pub fn allowing_duplicates() -> Self {
        Self::with_config(Config::new().allow_duplicate_values(true))
    }

    pub fn allows_duplicates(&self) -> bool {
        self.root.allow_duplicates
    }

    /// Values stored at exactly `key`, in insertion order. Empty if the key
    /// was never inserted.
    pub fn get_exact(&self, key: &str) -> &[T] {
        self.root.get_exact(key)
    }

    /// Values stored at `key` followed by the values of every longer key
    /// that starts with `key`.
    ///
    /// The order among descendants is arbitrary but stable while the trie
    /// is unchanged.
    pub fn get_all(&self, key: &str) -> Vec<&T> {
        self.root.get_all(key)
    }

    /// Total number of values stored.
    pub fn len(&self) -> usize {
        self.root.value_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of nodes, root included. Only insertion grows this.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }
}

impl<T: PartialEq> Trie<T> {
    /// Stores `value` under `key`.
    ///
    /// Returns `false` without storing anything when duplicates are
    /// disallowed and an equal value is already stored at `key`.
    pub fn add(&mut self, key: &str, value: T) -> bool {
        self.root.insert(key, value)
    }

    /// Removes the first value equal to `value` stored at `key`. Returns
    /// whether anything was removed.
    pub fn remove(&mut self, key: &str, value: &T) -> bool {
        self.root.remove(key, value)
    }

    pub fn contains(&self, key: &str, value: &T) -> bool {
        self.get_exact(key).contains(value)
    }
}

impl<T: fmt::Debug> Trie<T> {
    pub fn debug(&self, out: &mut impl io::Write) -> io::Result<()> {
        self.root.debug("", out)
    }
}

impl<T> Default for Trie<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: AsRef<str>, T: PartialEq> Extend<(K, T)> for Trie<T> {
    fn extend<I: IntoIterator<Item = (K, T)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.add(key.as_ref(), value);
        }
    }
}

impl<K: AsRef<str>, T: PartialEq> FromIterator<(K, T)> for Trie<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut t = Trie::new();
        t.extend(iter);
        t
    }
}
