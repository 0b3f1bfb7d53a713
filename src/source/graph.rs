//! petgraph adapter — draw a binary tree stored as a directed graph.
//!
//! Nodes carry their label, edges point from parent to child and are tagged
//! with the [`Side`] the child hangs on. [`GraphTree::new`] checks that the
//! graph really is a binary tree below the chosen root before handing out
//! [`GraphNode`] cursors.

use petgraph::Direction;
use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use super::BinaryTree;
use crate::error::{RenderError, Result};

/// Which side of its parent a child edge attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// A validated binary tree view over a petgraph `DiGraph`.
#[derive(Debug, Clone)]
pub struct GraphTree {
    digraph: DiGraph<String, Side>,
    root: NodeIndex,
}

impl GraphTree {
    pub fn new(digraph: DiGraph<String, Side>, root: NodeIndex) -> Result<Self> {
        if digraph.node_weight(root).is_none() {
            return Err(RenderError::NotATree(format!(
                "root index {} is not in the graph",
                root.index()
            )));
        }
        if is_cyclic_directed(&digraph) {
            return Err(RenderError::NotATree("graph contains a cycle".to_string()));
        }
        for idx in digraph.node_indices() {
            let parents = digraph.edges_directed(idx, Direction::Incoming).count();
            if idx == root && parents > 0 {
                return Err(RenderError::NotATree(format!(
                    "root '{}' has a parent",
                    digraph[idx]
                )));
            }
            if parents > 1 {
                return Err(RenderError::NotATree(format!(
                    "node '{}' has {} parents",
                    digraph[idx], parents
                )));
            }
            for side in [Side::Left, Side::Right] {
                let count = digraph
                    .edges_directed(idx, Direction::Outgoing)
                    .filter(|e| *e.weight() == side)
                    .count();
                if count > 1 {
                    return Err(RenderError::NotATree(format!(
                        "node '{}' has {} {:?} children",
                        digraph[idx], count, side
                    )));
                }
            }
        }
        Ok(Self { digraph, root })
    }

    pub fn root(&self) -> GraphNode<'_> {
        GraphNode {
            digraph: &self.digraph,
            index: self.root,
        }
    }

    pub fn digraph(&self) -> &DiGraph<String, Side> {
        &self.digraph
    }
}

/// Cursor over one node of a [`GraphTree`].
#[derive(Debug, Clone, Copy)]
pub struct GraphNode<'a> {
    digraph: &'a DiGraph<String, Side>,
    index: NodeIndex,
}

impl<'a> GraphNode<'a> {
    pub fn index(&self) -> NodeIndex {
        self.index
    }

    fn child(&self, side: Side) -> Option<Self> {
        self.digraph
            .edges_directed(self.index, Direction::Outgoing)
            .find(|e| *e.weight() == side)
            .map(|e| GraphNode {
                digraph: self.digraph,
                index: e.target(),
            })
    }
}

impl<'a> BinaryTree for GraphNode<'a> {
    type Value = str;

    fn value(&self) -> &str {
        &self.digraph[self.index]
    }

    fn left(&self) -> Option<Self> {
        self.child(Side::Left)
    }

    fn right(&self) -> Option<Self> {
        self.child(Side::Right)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
