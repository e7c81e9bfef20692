//! git
//!
//! Single interface for all git invocations.
//!
//! # Architecture
//!
//! This module is the **only doorway** to the version-control tool. Relog
//! shells out to the `git` CLI and parses its output; no other module spawns
//! processes or reads `.git` internals.
//!
//! # Responsibilities
//!
//! - Locating the most recent `v*` release tag
//! - Producing the commit log window consumed by [`crate::core::parser`]
//!
//! # Example
//!
//! ```ignore
//! use relog::git::Git;
//!
//! let git = Git::new();
//! let tag = git.latest_version_tag()?;
//! let report = git.log_since(&tag)?;
//! ```

mod interface;

pub use interface::{Git, GitError, LOG_FORMAT};
