//! Error type shared by the layout pipeline, the graph adapter and the sinks.

use std::fmt;
use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// A node value's `Display` impl reported an error.
    #[error("failed to format node label: {0}")]
    Label(#[from] fmt::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("not a binary tree: {0}")]
    NotATree(String),
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;
