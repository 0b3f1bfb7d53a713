//! ascii-tree — draw binary trees as ASCII art.
//!
//! ```text
//!       3
//!      / \
//!     /   \
//!    /     \
//!   1       6
//!  / \     / \
//! 0   2   4   9
//!          \
//!           5
//! ```
//!
//! Pipeline: source tree → shadow tree → edge-length resolution → row
//! printer. Any type implementing [`BinaryTree`] can be drawn.
//!
//! ```
//! use ascii_tree::{RenderConfig, SearchTree, render_tree};
//!
//! let tree: SearchTree<i64> = [2, 1, 3].into_iter().collect();
//! let art = render_tree(tree.root(), &RenderConfig::default()).unwrap();
//! assert_eq!(art, "  2\n / \\\n1   3\n");
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod renderers;
pub mod source;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::{DEFAULT_GAP, MAX_HEIGHT, MIN_DELTA, RenderConfig};
pub use error::{RenderError, Result};
pub use layout::TreeLayout;
pub use renderers::{AsciiRenderer, Renderer, TextSink, WriterSink};
pub use source::{BinaryTree, GraphTree, KeyTree, Node, SearchTree, Side};

use std::io::{self, Write};

/// Lays out and draws trees with one configuration.
#[derive(Debug, Clone, Default)]
pub struct TreePrinter {
    config: RenderConfig,
}

impl TreePrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn layout<T: BinaryTree>(&self, root: Option<T>) -> Result<TreeLayout> {
        TreeLayout::compute(root, &self.config)
    }

    /// Draw the tree into a string, one `\n`-terminated line per row.
    pub fn render<T: BinaryTree>(&self, root: Option<T>) -> Result<String> {
        let layout = self.layout(root)?;
        Ok(AsciiRenderer::new().render(&layout))
    }

    /// Draw the tree into any sink.
    pub fn render_into<T: BinaryTree, S: TextSink + ?Sized>(
        &self,
        root: Option<T>,
        sink: &mut S,
    ) -> Result<()> {
        let layout = self.layout(root)?;
        AsciiRenderer::new().emit(&layout, sink)
    }

    /// Draw the tree to a writer.
    pub fn render_to<T: BinaryTree, W: Write>(&self, root: Option<T>, writer: W) -> Result<()> {
        self.render_into(root, &mut WriterSink::new(writer))
    }

    /// Draw the tree to stdout.
    pub fn print<T: BinaryTree>(&self, root: Option<T>) -> Result<()> {
        self.render_to(root, io::stdout().lock())
    }
}

/// Draw `root` with `config`.
pub fn render_tree<T: BinaryTree>(root: Option<T>, config: &RenderConfig) -> Result<String> {
    TreePrinter::with_config(config.clone()).render(root)
}

/// Draw `root` to stdout with the default configuration.
pub fn print_tree<T: BinaryTree>(root: Option<T>) -> Result<()> {
    TreePrinter::new().print(root)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use petgraph::graph::DiGraph;
    use tracing_test::traced_test;

    use super::*;

    #[test]
    fn test_absent_tree_renders_nothing() {
        let out = render_tree::<&Node<i32>>(None, &RenderConfig::default()).unwrap();
        assert_eq!(out, "");
    }

    #[test]
    fn test_single_leaf() {
        let tree = Node::leaf("X");
        let out = TreePrinter::new().render(Some(&tree)).unwrap();
        assert_eq!(out, "X\n");
    }

    #[test]
    fn test_three_node_scenario() {
        // 1(left=2(left=4), right=3)
        let tree = Node::leaf(1)
            .with_left(Node::leaf(2).with_left(Node::leaf(4)))
            .with_right(Node::leaf(3));
        let out = TreePrinter::new().render(Some(&tree)).unwrap();
        assert_eq!(out, "    1\n   / \\\n  2   3\n /\n4\n");

        let lines: Vec<&str> = out.lines().collect();
        let root_col = lines[0].find('1').unwrap();
        assert!(lines[1].find('/').unwrap() < root_col);
        assert!(lines[1].find('\\').unwrap() > root_col);
        let four = lines[4].find('4').unwrap();
        let three = lines[2].find('3').unwrap();
        assert!(four < three);
    }

    #[test]
    fn test_render_is_repeatable() {
        let tree: SearchTree<i64> = [50, 20, 80, 10, 30, 70, 90, 100, 1000, 5]
            .into_iter()
            .collect();
        let printer = TreePrinter::new();
        let first = printer.render(tree.root()).unwrap();
        let second = printer.render(tree.root()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_to_writer() {
        let tree: SearchTree<&str> = ["m", "c", "x", "a", "e"].into_iter().collect();
        let mut buf = Vec::new();
        TreePrinter::new().render_to(tree.root(), &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "    m\n   / \\\n  c   x\n / \\\na   e\n"
        );
    }

    #[test]
    fn test_render_graph_tree() {
        let mut g = DiGraph::new();
        let root = g.add_node("2".to_string());
        let one = g.add_node("1".to_string());
        let three = g.add_node("3".to_string());
        g.add_edge(root, three, Side::Right);
        g.add_edge(root, one, Side::Left);
        let tree = GraphTree::new(g, root).unwrap();
        let out = TreePrinter::new().render(Some(tree.root())).unwrap();
        assert_eq!(out, "  2\n / \\\n1   3\n");
    }

    #[test]
    fn test_deep_chain_degrades_with_single_notice() {
        let tree: SearchTree<i64> = (0..2000).rev().collect();
        let out = TreePrinter::new().render(tree.root()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), MAX_HEIGHT + 1);
        let notices = lines.iter().filter(|l| l.contains("is taller than")).count();
        assert_eq!(notices, 1);
        assert_eq!(
            lines.last().copied(),
            Some("(This tree is taller than 1000, and may be drawn incorrectly.)")
        );
    }

    #[traced_test]
    #[test]
    fn test_overflow_logs_warning() {
        let tree: SearchTree<i64> = (0..20).collect();
        let printer = TreePrinter::with_config(RenderConfig::new().with_max_height(8));
        printer.render(tree.root()).unwrap();
        assert!(logs_contain("tree is taller than the supported height"));
    }

    #[test]
    fn test_invalid_config_surfaces_error() {
        let tree = Node::leaf(1);
        let cfg = RenderConfig::new().with_max_height(0);
        let err = render_tree(Some(&tree), &cfg).unwrap_err();
        assert!(matches!(err, RenderError::InvalidConfig(_)));
    }

    #[test]
    fn test_oversized_spacing_rejected_before_layout() {
        let tree: SearchTree<i64> = [2, 1, 3].into_iter().collect();
        for cfg in [
            RenderConfig::new().with_gap(usize::MAX),
            RenderConfig::new().with_min_delta(i64::MAX),
        ] {
            let err = render_tree(tree.root(), &cfg).unwrap_err();
            assert!(matches!(err, RenderError::InvalidConfig(_)), "{cfg:?}");
        }
    }
}
