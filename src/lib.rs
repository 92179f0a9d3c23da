//! A prefix tree mapping string keys to collections of values.
//!
//! Values are stored at the node reached by walking a key's characters from
//! the root. Lookups come in two flavors: [`Trie::get_exact`] returns only the
//! values stored at a key, while [`Trie::get_all`] also collects everything
//! stored under longer keys extending it.
//!
//! ```
//! use multitrie::Trie;
//!
//! let mut t = Trie::new();
//! assert!(t.add("abc", 1));
//! assert!(t.add("abcd", 2));
//! assert!(!t.add("abc", 1));
//!
//! assert_eq!(t.get_exact("abc"), &[1]);
//! assert_eq!(t.get_all("abc"), vec![&1, &2]);
//! assert!(t.get_exact("xyz").is_empty());
//! ```

mod config;
mod dig;
mod insert;
mod iter;
mod lookup;
mod node;
mod remove;
mod trie;


pub use config::Config;
pub use iter::Iter;
pub use trie::Trie;
