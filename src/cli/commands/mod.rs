//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments and loads config
//! 2. Calls the report layer
//! 3. Writes markdown to stdout
//!
//! # Async Commands
//!
//! The changelog and notes commands are async because tracker lookups
//! involve network I/O. The handlers are synchronous wrappers that run the
//! async implementation on a tokio runtime.

mod changelog;
mod completion;
mod notes;

pub use changelog::changelog;
pub use completion::completion;
pub use notes::notes;

use anyhow::Result;

use super::Context;
use crate::cli::args::Command;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Changelog { tag, no_fetch } => changelog(ctx, tag.as_deref(), no_fetch),
        Command::Notes {
            tag,
            build_version,
            no_fetch,
        } => notes(ctx, tag.as_deref(), build_version.as_deref(), no_fetch),
        Command::Completion { shell } => completion(shell),
    }
}
