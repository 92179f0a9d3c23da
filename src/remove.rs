// Removal never unlinks nodes. A node whose last value is removed stays in
// the tree with an empty value list, so the path is still there for later
// inserts. Nothing is created on a miss either: the walk only follows
// children that already exist.

use crate::dig::existing_only;
use crate::node::Node;

impl<T: PartialEq> Node<T> {
    pub fn remove(&mut self, key: &str, value: &T) -> bool {
        let node = match self.dig_mut(key, existing_only) {
            Some(node) => node,
            None => {
                log::trace!("remove: no node for key {:?}", key);
                return false;
            }
        };
        match node.values.iter().position(|v| v == value) {
            Some(i) => {
                node.values.remove(i);
                true
            }
            None => false,
        }
    }
}
