//! Configuration for the rendering pipeline.

use crate::error::{RenderError, Result};

/// Default number of blank columns kept between sibling subtrees.
pub const DEFAULT_GAP: usize = 3;

/// Floor for the horizontal correction computed per internal node.
///
/// Keeps at least one branch row under every node that has children,
/// including single-child nodes where no collision check applies.
pub const MIN_DELTA: i64 = 4;

/// Tallest tree the profile buffers can describe.
pub const MAX_HEIGHT: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Minimum blank columns between sibling silhouettes at any shared depth.
    pub gap: usize,
    /// Floor of the per-node correction; edge length is `(delta + 1) / 2 - 1`.
    pub min_delta: i64,
    /// Capacity of the profile buffers and the cap on emitted rows.
    pub max_height: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            gap: DEFAULT_GAP,
            min_delta: MIN_DELTA,
            max_height: MAX_HEIGHT,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gap(mut self, gap: usize) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_min_delta(mut self, min_delta: i64) -> Self {
        self.min_delta = min_delta;
        self
    }

    pub fn with_max_height(mut self, max_height: usize) -> Self {
        self.max_height = max_height;
        self
    }

    /// Largest `gap` or `min_delta` whose edges still fit in `max_height` rows.
    pub fn max_spread(&self) -> usize {
        self.max_height.saturating_mul(2)
    }

    /// Reject settings the layout cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.min_delta < 3 {
            return Err(RenderError::InvalidConfig(format!(
                "min_delta must be at least 3, got {}",
                self.min_delta
            )));
        }
        if self.max_height == 0 {
            return Err(RenderError::InvalidConfig(
                "max_height must be positive".to_string(),
            ));
        }
        // Edge length grows by one per two columns of spread; past twice
        // max_height every branch would run off the bottom of the drawing.
        let spread = self.max_spread();
        if self.gap > spread {
            return Err(RenderError::InvalidConfig(format!(
                "gap must be at most {spread} (twice max_height), got {}",
                self.gap
            )));
        }
        if i64::try_from(spread).is_ok_and(|limit| self.min_delta > limit) {
            return Err(RenderError::InvalidConfig(format!(
                "min_delta must be at most {spread} (twice max_height), got {}",
                self.min_delta
            )));
        }
        Ok(())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
