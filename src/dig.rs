// Every operation locates its node by walking the key's characters down from
// the root. The mutable walk consults `should_descend` before each step: a
// `false` aborts the walk, a `true` descends, creating the child if it isn't
// there yet. So `add` digs with an always-true predicate and `remove` digs
// with one that only accepts existing children, which means a miss never
// grows the tree.
//
// Reads can't create anything through a shared reference, so `dig` walks
// under the `existing_only` policy: it stops with `None` at the first
// character that has no child, exactly as `dig_mut(key, existing_only)`
// would.

use crate::node::Node;

impl<T> Node<T> {
    pub fn dig_mut<F>(&mut self, key: &str, mut should_descend: F) -> Option<&mut Node<T>>
    where
        F: FnMut(&Node<T>, char) -> bool,
    {
        let mut cur = self;
        for c in key.chars() {
            if !should_descend(&*cur, c) {
                return None;
            }
            if !cur.children.contains_key(&c) {
                log::trace!("creating node for {:?} in key {:?}", c, key);
                let child = cur.child();
                cur.children.insert(c, child);
            }
            cur = cur.children.get_mut(&c)?;
        }
        Some(cur)
    }

    pub fn dig(&self, key: &str) -> Option<&Node<T>> {
        let mut cur = self;
        for c in key.chars() {
            if !existing_only(cur, c) {
                return None;
            }
            cur = &cur.children[&c];
        }
        Some(cur)
    }
}

pub fn create_missing<T>(_: &Node<T>, _: char) -> bool {
    true
}

pub fn existing_only<T>(node: &Node<T>, c: char) -> bool {
    node.children.contains_key(&c)
}
