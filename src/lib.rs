//! blaim: attribution of machine-generated code changes
//!
//! Correlates two independent, loosely-coupled logs into a durable mapping
//! from source-file line ranges to the AI suggestion that produced them:
//!
//! - the **accept log** written by an editor extension each time the user
//!   accepts a generated suggestion (text, file, model and inference
//!   parameters), and
//! - the **unified diff** of the commit the user eventually made.
//!
//! The correlation is best-effort by design: accepted text often survives
//! only partially after manual editing, so exact substring search falls
//! back to a longest-common-substring heuristic (see [`matching`]). The
//! result is a stream of [`BlaimLine`] records, one JSON array per file,
//! which a second pass turns into a line-annotated rendering of the file
//! (see [`commands::annotate`]).
//!
//! # Example
//!
//! ```ignore
//! use blaim::commands::{generate, CommandContext};
//!
//! let diff = std::fs::read_to_string("changes.diff")?;
//! let log = std::fs::File::open("accepted.suggestions.log")?;
//! let mut out = Vec::new();
//! generate(&diff, log, &mut out, &CommandContext::default())?;
//! ```

pub mod acceptlog;
pub mod cli;
pub mod commands;
pub mod error;
pub mod hunk;
pub mod matching;
pub mod position;
pub mod rangeset;
pub mod schema;

// Re-export commonly used types
pub use cli::{Cli, Commands};
pub use error::{BlaimError, Result};
pub use rangeset::BlaimRangeSet;
pub use schema::{AcceptLogLine, BlaimLine, GitCommit, InferenceConfig, Position, Range};
