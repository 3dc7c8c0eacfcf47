//! Command modules for the blaim CLI
//!
//! Each module implements one top-level command:
//! - `generate` - correlate a unified diff with the accept log into `.blaim` records
//! - `annotate` - render attributed source lines from a `.blaim` stream
//!
//! Command handlers take their `Args` struct from `cli.rs` (when they have
//! arguments) and a shared `CommandContext`, and write their output stream
//! themselves.

pub mod annotate;
pub mod generate;

pub use annotate::{annotate, annotate_lines, read_blaim_stream, run_annotate};
pub use generate::{generate, run_generate};

use std::path::PathBuf;

/// Shared context passed to command handlers
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Root of the git checkout; annotated file paths resolve against it
    pub root: PathBuf,
    /// Show verbose output
    pub verbose: bool,
}

impl Default for CommandContext {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            verbose: false,
        }
    }
}
