use std::slice;

use crate::node::Node;
use crate::trie::Trie;

/// Pre-order iterator over `(key, value)` pairs of a [`Trie`].
///
/// Values stored at a node come before the values of its descendants, in the
/// same order [`Trie::get_all`] reports them.
pub struct Iter<'a, T> {
    stack: Vec<(String, &'a Node<T>)>,
    current: Option<(String, slice::Iter<'a, T>)>,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: &'a Node<T>) -> Self {
        Self {
            stack: vec![(String::new(), root)],
            current: None,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (String, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((key, values)) = &mut self.current {
                if let Some(v) = values.next() {
                    return Some((key.clone(), v));
                }
            }
            let (key, node) = self.stack.pop()?;

            // Push in reverse so the first child in map order is visited next.
            let children = node.children.iter().collect::<Vec<_>>();
            for (&c, child) in children.into_iter().rev() {
                let mut child_key = key.clone();
                child_key.push(c);
                self.stack.push((child_key, child));
            }
            self.current = Some((key, node.values.iter()));
        }
    }
}

impl<T> Trie<T> {
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.root)
    }
}

impl<'a, T> IntoIterator for &'a Trie<T> {
    type Item = (String, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
