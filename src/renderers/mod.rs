//! Renderer trait and the text renderers built on it.

pub mod ascii;
pub mod canvas;
pub mod sink;

pub use ascii::{AsciiRenderer, LinePrinter, Placement, overflow_notice};
pub use canvas::Canvas;
pub use sink::{TextSink, WriterSink};

use crate::layout::TreeLayout;

/// Trait for tree renderers.
pub trait Renderer {
    /// Render a laid-out tree to a string.
    fn render(&self, layout: &TreeLayout) -> String;
}
