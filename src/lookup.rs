use crate::node::Node;

impl<T> Node<T> {
    pub fn get_exact(&self, key: &str) -> &[T] {
        match self.dig(key) {
            Some(node) => &node.values[..],
            None => &[],
        }
    }

    pub fn get_all(&self, key: &str) -> Vec<&T> {
        let mut out = vec![];
        if let Some(node) = self.dig(key) {
            node.collect_subtree(&mut out);
        }
        out
    }
}
