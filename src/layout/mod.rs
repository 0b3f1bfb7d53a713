//! Layout engine — shadow tree construction plus geometry.
//!
//! `TreeLayout::compute` builds the shadow tree, resolves every node's edge
//! length bottom-up, and measures how far the drawing reaches left of the
//! root so the printer can shift everything into non-negative columns.

pub mod profile;
pub mod resolve;
pub mod shadow;

pub use profile::{Profile, ProfileSide, compute_left_profile, compute_right_profile};
pub use resolve::Resolver;
pub use shadow::{ParentDir, ShadowBuilder, ShadowNode};

use tracing::{debug, warn};

use crate::config::RenderConfig;
use crate::error::Result;
use crate::source::BinaryTree;

/// Fully resolved geometry for one render.
#[derive(Debug, Clone)]
pub struct TreeLayout {
    root: Option<Box<ShadowNode>>,
    height: usize,
    xmin: i64,
    truncated: bool,
    max_height: usize,
}

impl TreeLayout {
    pub fn compute<T: BinaryTree>(source: Option<T>, config: &RenderConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = ShadowBuilder::new(config.max_height);
        let mut root = builder.build(source)?;
        let truncated = builder.truncated();

        let Some(node) = root.as_deref_mut() else {
            return Ok(Self {
                root: None,
                height: 0,
                xmin: 0,
                truncated,
                max_height: config.max_height,
            });
        };

        Resolver::new(config).resolve(node);

        let mut profile = Profile::new(ProfileSide::Left, config.max_height);
        compute_left_profile(node, 0, 0, &mut profile);
        let xmin = (0..node.height.min(config.max_height))
            .filter_map(|level| profile.get(level))
            .min()
            .unwrap_or(0);
        let height = node.height;

        let layout = Self {
            root,
            height,
            xmin,
            truncated,
            max_height: config.max_height,
        };
        debug!(height, xmin, truncated, "tree layout resolved");
        if layout.overflowed() {
            warn!(
                height,
                max_height = config.max_height,
                "tree is taller than the supported height; rows past the limit are not drawn"
            );
        }
        Ok(layout)
    }

    pub fn root(&self) -> Option<&ShadowNode> {
        self.root.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Rows the whole tree occupies, including rows past `max_height`.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Leftmost column reached relative to the root's column (never positive).
    pub fn xmin(&self) -> i64 {
        self.xmin
    }

    /// True when source nodes below the depth limit were left out.
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    pub fn max_height(&self) -> usize {
        self.max_height
    }

    /// The tree does not fit the profiled window and may be drawn incorrectly.
    pub fn overflowed(&self) -> bool {
        self.truncated || self.height >= self.max_height
    }

    /// Rows the printer emits.
    pub fn row_count(&self) -> usize {
        self.height.min(self.max_height)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
