//! CLI output: what a command prints and how errors surface.

use crate::error::{ApiError, DagError};
use std::io::Write;

/// Result of a command, written to stdout by the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    Text(String),
    Bytes(Vec<u8>),
}

impl CommandOutput {
    pub fn write_to(&self, mut out: impl Write) -> std::io::Result<()> {
        match self {
            CommandOutput::Text(text) => writeln!(out, "{}", text),
            CommandOutput::Bytes(bytes) => out.write_all(bytes),
        }
    }
}

/// Map domain errors to a message for CLI output.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::Dag(DagError::EmptyDirectory { name }) => format!(
            "Directory {:?} is empty; nothing to hash. Remove it or set walker.skip_empty_dirs = true.",
            name
        ),
        other => other.to_string(),
    }
}
