use crate::dig::create_missing;
use crate::node::Node;

impl<T: PartialEq> Node<T> {
    pub fn push_value(&mut self, value: T) -> bool {
        if !self.allow_duplicates && self.values.contains(&value) {
            return false;
        }
        self.values.push(value);
        true
    }

    pub fn insert(&mut self, key: &str, value: T) -> bool {
        let node = match self.dig_mut(key, create_missing) {
            Some(node) => node,
            // `create_missing` accepts every step, so the walk always ends
            // on a node.
            None => return false,
        };
        let inserted = node.push_value(value);
        if !inserted {
            log::debug!("rejected duplicate value for key {:?}", key);
        }
        inserted
    }
}
