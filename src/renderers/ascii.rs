//! ASCII renderer — the row-by-row line printer.
//!
//! Each output row is one walk over the shadow tree that only emits what
//! lands on that row: a label, or the `/` and `\` characters of a branch.
//! Emission goes left to right through a single cursor, so a row is built
//! without ever looking back at what was already written.

use super::Renderer;
use super::canvas::{Canvas, row_text};
use super::sink::TextSink;
use crate::error::Result;
use crate::layout::{ShadowNode, TreeLayout};

const LEFT_BRANCH: &str = "/";
const RIGHT_BRANCH: &str = "\\";

/// Appended once when the tree does not fit the profiled window.
pub fn overflow_notice(max_height: usize) -> String {
    format!("(This tree is taller than {max_height}, and may be drawn incorrectly.)")
}

// ─── Placement ───────────────────────────────────────────────────────────────

/// A piece of text anchored at a row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement<'a> {
    pub row: usize,
    pub column: usize,
    pub text: &'a str,
    /// Display width of `text` in columns.
    pub width: usize,
}

impl Placement<'_> {
    /// First column after this placement.
    pub fn end(&self) -> usize {
        self.column + self.width
    }
}

// ─── LinePrinter ─────────────────────────────────────────────────────────────

/// Collects the placements of one row.
#[derive(Debug)]
pub struct LinePrinter<'a> {
    row: usize,
    cursor: i64,
    placements: Vec<Placement<'a>>,
}

impl<'a> LinePrinter<'a> {
    pub fn new(row: usize) -> Self {
        Self {
            row,
            cursor: 0,
            placements: Vec::new(),
        }
    }

    /// Emit everything at `level` rows below `node`, whose label is centred
    /// on column `x`.
    pub fn print_row(&mut self, node: &'a ShadowNode, x: i64, level: usize) {
        if level == 0 {
            self.emit(x - node.label_width / 2, &node.label, node.label_width);
        } else if level <= node.edge_length {
            let reach = level as i64;
            if node.left.is_some() {
                self.emit(x - reach, LEFT_BRANCH, 1);
            }
            if node.right.is_some() {
                self.emit(x + reach, RIGHT_BRANCH, 1);
            }
        } else {
            let offset = node.child_offset();
            let next = level - node.edge_length - 1;
            if let Some(left) = node.left.as_deref() {
                self.print_row(left, x - offset, next);
            }
            if let Some(right) = node.right.as_deref() {
                self.print_row(right, x + offset, next);
            }
        }
    }

    fn emit(&mut self, column: i64, text: &'a str, width: i64) {
        // Never write left of the cursor, even if the geometry asks for it.
        let start = column.max(self.cursor);
        self.placements.push(Placement {
            row: self.row,
            column: start as usize,
            text,
            width: width as usize,
        });
        self.cursor = start + width;
    }

    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    pub fn finish(self) -> Vec<Placement<'a>> {
        self.placements
    }
}

// ─── AsciiRenderer ───────────────────────────────────────────────────────────

/// Renders a resolved [`TreeLayout`] as `/` `\` ASCII art.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiRenderer;

impl AsciiRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Placement directives for every emitted row, top to bottom.
    pub fn placements<'a>(&self, layout: &'a TreeLayout) -> Vec<Vec<Placement<'a>>> {
        (0..layout.row_count())
            .filter_map(|row| row_placements(layout, row))
            .collect()
    }

    /// Paint every row, plus the overflow notice, onto a fresh canvas.
    pub fn paint(&self, layout: &TreeLayout) -> Canvas {
        let mut canvas = Canvas::new();
        for row in self.placements(layout) {
            canvas.paint_row(&row);
        }
        if layout.overflowed() {
            canvas.push_line(overflow_notice(layout.max_height()));
        }
        canvas
    }

    /// Stream the drawing into `sink`, one row at a time.
    pub fn emit<S: TextSink + ?Sized>(&self, layout: &TreeLayout, sink: &mut S) -> Result<()> {
        for row in 0..layout.row_count() {
            if let Some(placements) = row_placements(layout, row) {
                sink.write_row(&row_text(&placements))?;
            }
        }
        if layout.overflowed() {
            sink.write_row(&overflow_notice(layout.max_height()))?;
        }
        sink.finish()
    }
}

/// Run the line printer over one row; `None` for an empty layout.
fn row_placements(layout: &TreeLayout, row: usize) -> Option<Vec<Placement<'_>>> {
    let root = layout.root()?;
    let mut printer = LinePrinter::new(row);
    printer.print_row(root, -layout.xmin(), row);
    Some(printer.finish())
}

impl Renderer for AsciiRenderer {
    fn render(&self, layout: &TreeLayout) -> String {
        self.paint(layout).render_to_string()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
