//! Unbalanced binary search tree, the shape most callers want to look at.

use super::Node;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTree<K> {
    root: Option<Box<Node<K>>>,
    len: usize,
}

impl<K> Default for SearchTree<K> {
    fn default() -> Self {
        Self { root: None, len: 0 }
    }
}

impl<K: Ord> SearchTree<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `key`. Returns false if it was already present.
    pub fn insert(&mut self, key: K) -> bool {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match key.cmp(&node.value) {
                std::cmp::Ordering::Less => &mut node.left,
                std::cmp::Ordering::Greater => &mut node.right,
                std::cmp::Ordering::Equal => return false,
            };
        }
        *slot = Some(Box::new(Node::leaf(key)));
        self.len += 1;
        true
    }

    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<K: Ord> FromIterator<K> for SearchTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        for key in iter {
            tree.insert(key);
        }
        tree
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
