use std::fmt;
use std::io;

use hashbrown::HashMap;

pub struct Node<T> {
    pub values: Vec<T>,
    pub children: HashMap<char, Node<T>>,
    pub allow_duplicates: bool,
    pub is_root: bool,
}

impl<T> Node<T> {
    pub fn new(allow_duplicates: bool, is_root: bool) -> Self {
        Self {
            values: Vec::new(),
            children: HashMap::new(),
            allow_duplicates,
            is_root,
        }
    }

    // Children carry their parent's duplicate policy.
    pub fn child(&self) -> Self {
        Node::new(self.allow_duplicates, false)
    }

    pub fn node_count(&self) -> usize {
        1 + self.children.values().map(Node::node_count).sum::<usize>()
    }

    pub fn value_count(&self) -> usize {
        self.values.len() + self.children.values().map(Node::value_count).sum::<usize>()
    }

    // Own values first, then each child's subtree in map order.
    pub fn collect_subtree<'a>(&'a self, out: &mut Vec<&'a T>) {
        out.extend(self.values.iter());
        for child in self.children.values() {
            child.collect_subtree(out);
        }
    }
}

impl<T: fmt::Debug> Node<T> {
    pub fn debug(&self, indent: &str, out: &mut impl io::Write) -> io::Result<()> {
        writeln!(
            out,
            "Node {{ root: {}, values: {:?}, children: {} }}",
            self.is_root,
            self.values,
            self.children.len()
        )?;

        let mut children = self.children.iter().collect::<Vec<_>>();
        children.sort_by_key(|&(&c, _)| c);

        if let Some(((last_char, last), init)) = children.split_last() {
            let child_indent = format!("{} \u{2502}", indent);
            for (c, child) in init {
                write!(out, "{} \u{251C} {:?}: ", indent, c)?;
                child.debug(&child_indent, out)?;
            }

            write!(out, "{} \u{2514} {:?}: ", indent, last_char)?;
            let child_indent = format!("{}  ", indent);
            last.debug(&child_indent, out)?;
        }
        Ok(())
    }
}
