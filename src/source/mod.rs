//! Tree sources — the read-only view the layout pipeline consumes.
//!
//! Anything binary-tree shaped can be drawn once it implements
//! [`BinaryTree`]: a value with a `Display` form and two optional children.
//! Handles are cheap to produce (a reference or an index cursor), so the
//! child accessors return owned handles.

pub mod graph;
pub mod keys;
pub mod node;
pub mod search;

pub use graph::{GraphNode, GraphTree, Side};
pub use keys::KeyTree;
pub use node::Node;
pub use search::SearchTree;

use std::fmt;

/// Read-only capability interface over a caller's tree.
pub trait BinaryTree: Sized {
    type Value: fmt::Display + ?Sized;

    fn value(&self) -> &Self::Value;
    fn left(&self) -> Option<Self>;
    fn right(&self) -> Option<Self>;
}
