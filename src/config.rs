/// Construction-time settings for a [`Trie`](crate::Trie).
///
/// The settings are fixed for the lifetime of the trie.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Config {
    pub(crate) allow_duplicate_values: bool,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `add` may store a value equal to one already present at the
    /// same key. Defaults to `false`.
    pub fn allow_duplicate_values(mut self, allow: bool) -> Self {
        self.allow_duplicate_values = allow;
        self
    }
}
