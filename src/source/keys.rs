//! Search trees built from whitespace-separated key lists.
//!
//! Keys are ordered numerically when every one of them is an integer and
//! as plain strings otherwise.

use std::io::Write;

use super::SearchTree;
use crate::TreePrinter;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyTree {
    Numeric(SearchTree<i64>),
    Text(SearchTree<String>),
}

impl KeyTree {
    pub fn parse(input: &str) -> Self {
        Self::from_tokens(input.split_whitespace())
    }

    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens: Vec<S> = tokens.into_iter().collect();
        let numbers: Option<Vec<i64>> = tokens
            .iter()
            .map(|t| t.as_ref().parse::<i64>().ok())
            .collect();
        match numbers {
            Some(numbers) => KeyTree::Numeric(numbers.into_iter().collect()),
            None => KeyTree::Text(tokens.iter().map(|t| t.as_ref().to_string()).collect()),
        }
    }

    /// Distinct keys in the tree.
    pub fn len(&self) -> usize {
        match self {
            KeyTree::Numeric(t) => t.len(),
            KeyTree::Text(t) => t.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn render(&self, printer: &TreePrinter) -> Result<String> {
        match self {
            KeyTree::Numeric(t) => printer.render(t.root()),
            KeyTree::Text(t) => printer.render(t.root()),
        }
    }

    pub fn render_to<W: Write>(&self, printer: &TreePrinter, writer: W) -> Result<()> {
        match self {
            KeyTree::Numeric(t) => printer.render_to(t.root(), writer),
            KeyTree::Text(t) => printer.render_to(t.root(), writer),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
