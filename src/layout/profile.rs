//! Subtree silhouettes.
//!
//! A profile records, per row below a subtree's root, the leftmost (left
//! profile) or rightmost (right profile) column the drawn subtree reaches.
//! Rows are relative to the subtree root, columns relative to the origin the
//! caller passes in. Levels past the buffer capacity are dropped.

use super::shadow::{ParentDir, ShadowNode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileSide {
    Left,
    Right,
}

impl ProfileSide {
    fn sentinel(self) -> i64 {
        match self {
            ProfileSide::Left => i64::MAX,
            ProfileSide::Right => i64::MIN,
        }
    }
}

/// Fixed-capacity per-level extent buffer.
#[derive(Debug, Clone)]
pub struct Profile {
    side: ProfileSide,
    levels: Vec<i64>,
}

impl Profile {
    pub fn new(side: ProfileSide, capacity: usize) -> Self {
        Self {
            side,
            levels: vec![side.sentinel(); capacity],
        }
    }

    pub fn side(&self) -> ProfileSide {
        self.side
    }

    pub fn capacity(&self) -> usize {
        self.levels.len()
    }

    /// Mark every level unreached.
    pub fn reset(&mut self) {
        self.levels.fill(self.side.sentinel());
    }

    /// Extent at `level`, or `None` if nothing reached it.
    pub fn get(&self, level: usize) -> Option<i64> {
        self.levels
            .get(level)
            .copied()
            .filter(|&x| x != self.side.sentinel())
    }

    /// Push the extent at `level` outward to include column `x`.
    pub fn tighten(&mut self, level: usize, x: i64) {
        let Some(slot) = self.levels.get_mut(level) else {
            return;
        };
        *slot = match self.side {
            ProfileSide::Left => (*slot).min(x),
            ProfileSide::Right => (*slot).max(x),
        };
    }

    /// Trace `node`'s subtree into this buffer with its root at `(x, level)`.
    pub fn trace(&mut self, node: &ShadowNode, x: i64, level: usize) {
        match self.side {
            ProfileSide::Left => compute_left_profile(node, x, level, self),
            ProfileSide::Right => compute_right_profile(node, x, level, self),
        }
    }
}

/// Fold the leftmost columns of `node`'s subtree into `profile`.
///
/// A left child's label is measured from its left edge, so its half-width
/// rounds one column tighter.
pub fn compute_left_profile(node: &ShadowNode, x: i64, level: usize, profile: &mut Profile) {
    if level >= profile.capacity() {
        return;
    }
    let is_left = i64::from(node.parent_dir == ParentDir::Left);
    profile.tighten(level, x - (node.label_width - is_left).div_euclid(2));

    if node.left.is_some() {
        let rows = node.edge_length.min(profile.capacity() - level - 1);
        for i in 1..=rows {
            profile.tighten(level + i, x - i as i64);
        }
    }

    let offset = node.child_offset();
    let next = level.saturating_add(node.edge_length).saturating_add(1);
    if let Some(left) = node.left.as_deref() {
        compute_left_profile(left, x - offset, next, profile);
    }
    if let Some(right) = node.right.as_deref() {
        compute_left_profile(right, x + offset, next, profile);
    }
}

/// Fold the rightmost columns of `node`'s subtree into `profile`.
pub fn compute_right_profile(node: &ShadowNode, x: i64, level: usize, profile: &mut Profile) {
    if level >= profile.capacity() {
        return;
    }
    let not_left = i64::from(node.parent_dir != ParentDir::Left);
    profile.tighten(level, x + (node.label_width - not_left).div_euclid(2));

    if node.right.is_some() {
        let rows = node.edge_length.min(profile.capacity() - level - 1);
        for i in 1..=rows {
            profile.tighten(level + i, x + i as i64);
        }
    }

    let offset = node.child_offset();
    let next = level.saturating_add(node.edge_length).saturating_add(1);
    if let Some(left) = node.left.as_deref() {
        compute_right_profile(left, x - offset, next, profile);
    }
    if let Some(right) = node.right.as_deref() {
        compute_right_profile(right, x + offset, next, profile);
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
