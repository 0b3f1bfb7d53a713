//! Canvas — row buffer that turns placement directives into text lines.

use super::ascii::Placement;

/// Lay out one row of placements as text.
///
/// Placements are expected in increasing column order; one that starts
/// inside already written text is appended right after it.
pub fn row_text(placements: &[Placement<'_>]) -> String {
    let mut line = String::new();
    let mut written = 0;
    for p in placements {
        if p.column > written {
            line.extend(std::iter::repeat_n(' ', p.column - written));
            written = p.column;
        }
        line.push_str(p.text);
        written += p.width;
    }
    line
}

/// Finished text rows, top to bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Canvas {
    rows: Vec<String>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one row built from left-to-right placements.
    pub fn paint_row(&mut self, placements: &[Placement<'_>]) {
        self.rows.push(row_text(placements));
    }

    /// Append a row verbatim.
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.rows.push(line.into());
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Every row followed by a newline; empty canvas renders as "".
    pub fn render_to_string(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            out.push_str(row);
            out.push('\n');
        }
        out
    }
}

impl std::fmt::Display for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render_to_string())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
