//! Shadow tree — a private mirror of the caller's tree carrying only what
//! the layout needs.

use std::fmt::Write;

use unicode_width::UnicodeWidthStr;

use crate::error::Result;
use crate::source::BinaryTree;

/// Which side of its parent a shadow node hangs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParentDir {
    Left,
    #[default]
    Root,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadowNode {
    pub label: String,
    /// Display width of `label` in terminal columns.
    pub label_width: i64,
    pub left: Option<Box<ShadowNode>>,
    pub right: Option<Box<ShadowNode>>,
    pub parent_dir: ParentDir,
    /// Branch rows drawn under the label before the children start.
    pub edge_length: usize,
    /// Rows occupied by this subtree.
    pub height: usize,
}

impl ShadowNode {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        let label_width = UnicodeWidthStr::width(label.as_str()) as i64;
        Self {
            label,
            label_width,
            left: None,
            right: None,
            parent_dir: ParentDir::Root,
            edge_length: 0,
            height: 0,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Horizontal and vertical distance from this node to either child.
    pub fn child_offset(&self) -> i64 {
        self.edge_length as i64 + 1
    }
}

/// Mirrors a source tree, refusing to descend past `max_depth` levels.
#[derive(Debug)]
pub struct ShadowBuilder {
    max_depth: usize,
    truncated: bool,
}

impl ShadowBuilder {
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            truncated: false,
        }
    }

    /// True once a source node was dropped for being too deep.
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    pub fn build<T: BinaryTree>(&mut self, source: Option<T>) -> Result<Option<Box<ShadowNode>>> {
        self.build_at(source, 0)
    }

    fn build_at<T: BinaryTree>(
        &mut self,
        source: Option<T>,
        depth: usize,
    ) -> Result<Option<Box<ShadowNode>>> {
        let Some(source) = source else {
            return Ok(None);
        };
        if depth >= self.max_depth {
            self.truncated = true;
            return Ok(None);
        }

        let mut label = String::new();
        write!(label, "{}", source.value())?;
        let mut node = ShadowNode::new(label);
        node.left = self.build_at(source.left(), depth + 1)?;
        node.right = self.build_at(source.right(), depth + 1)?;

        if let Some(left) = node.left.as_deref_mut() {
            left.parent_dir = ParentDir::Left;
        }
        if let Some(right) = node.right.as_deref_mut() {
            right.parent_dir = ParentDir::Right;
        }
        Ok(Some(Box::new(node)))
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
