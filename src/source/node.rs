//! Owned binary node for callers without a tree type of their own.

use std::fmt;

use super::BinaryTree;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    pub value: T,
    pub left: Option<Box<Node<T>>>,
    pub right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    pub fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn with_left(mut self, child: Node<T>) -> Self {
        self.left = Some(Box::new(child));
        self
    }

    pub fn with_right(mut self, child: Node<T>) -> Self {
        self.right = Some(Box::new(child));
        self
    }
}

impl<'a, T: fmt::Display> BinaryTree for &'a Node<T> {
    type Value = T;

    fn value(&self) -> &T {
        &self.value
    }

    fn left(&self) -> Option<Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<Self> {
        self.right.as_deref()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
