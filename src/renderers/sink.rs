//! Output targets for rendered rows.

use std::io::Write;

use crate::error::Result;

/// Receives finished rows in order.
pub trait TextSink {
    fn write_row(&mut self, row: &str) -> Result<()>;

    /// Called once after the last row.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

impl TextSink for String {
    fn write_row(&mut self, row: &str) -> Result<()> {
        self.push_str(row);
        self.push('\n');
        Ok(())
    }
}

impl TextSink for Vec<String> {
    fn write_row(&mut self, row: &str) -> Result<()> {
        self.push(row.to_string());
        Ok(())
    }
}

/// Writes rows as newline-terminated lines to any `io::Write`.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    inner: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> TextSink for WriterSink<W> {
    fn write_row(&mut self, row: &str) -> Result<()> {
        writeln!(self.inner, "{row}")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
