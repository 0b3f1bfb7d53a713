//! Edge-length resolution.
//!
//! Post-order pass: once both children of a node have their own geometry,
//! trace the right silhouette of the left child and the left silhouette of
//! the right child and push the children apart until they are at least
//! `gap` blank columns apart on every row they share.

use tracing::trace;

use super::profile::{Profile, ProfileSide, compute_left_profile, compute_right_profile};
use super::shadow::ShadowNode;
use crate::config::RenderConfig;

/// Owns the scratch profile buffers reused for every node of one layout.
#[derive(Debug)]
pub struct Resolver {
    gap: i64,
    min_delta: i64,
    left: Profile,
    right: Profile,
}

impl Resolver {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            gap: i64::try_from(config.gap).unwrap_or(i64::MAX),
            min_delta: config.min_delta,
            left: Profile::new(ProfileSide::Left, config.max_height),
            right: Profile::new(ProfileSide::Right, config.max_height),
        }
    }

    /// Assign `edge_length` and `height` to every node under `node`.
    pub fn resolve(&mut self, node: &mut ShadowNode) {
        if let Some(left) = node.left.as_deref_mut() {
            self.resolve(left);
        }
        if let Some(right) = node.right.as_deref_mut() {
            self.resolve(right);
        }

        node.edge_length = self.edge_length_for(node);
        let left_height = node.left.as_ref().map_or(0, |c| c.height);
        let right_height = node.right.as_ref().map_or(0, |c| c.height);
        node.height = left_height.max(right_height) + node.edge_length + 1;

        if !node.is_leaf() {
            trace!(
                label = %node.label,
                edge_length = node.edge_length,
                height = node.height,
                "resolved node"
            );
        }
    }

    fn edge_length_for(&mut self, node: &ShadowNode) -> usize {
        if node.is_leaf() {
            return 0;
        }

        self.left.reset();
        self.right.reset();
        if let Some(left) = node.left.as_deref() {
            compute_right_profile(left, 0, 0, &mut self.right);
        }
        if let Some(right) = node.right.as_deref() {
            compute_left_profile(right, 0, 0, &mut self.left);
        }

        let shared = match (node.left.as_deref(), node.right.as_deref()) {
            (Some(l), Some(r)) => l.height.min(r.height),
            _ => 0,
        };

        let mut delta = self.min_delta;
        for level in 0..shared.min(self.left.capacity()) {
            if let (Some(r), Some(l)) = (self.right.get(level), self.left.get(level)) {
                delta = delta.max(self.gap.saturating_add(1 + r - l));
            }
        }
        // Both children move out by edge_length + 1, so the split is halved.
        usize::try_from(delta.saturating_add(1) / 2 - 1).unwrap_or(0)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
