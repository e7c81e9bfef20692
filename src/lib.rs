//! Relog - release changelogs and notes from git history and tracker tickets
//!
//! Relog is a single-binary tool that turns a window of git history into a
//! markdown changelog: commits are parsed for ticket references, ticket
//! metadata is fetched from the issue tracker, and changes are grouped under
//! the subsystem labels carried by their tickets. The `notes` command
//! prepends download links for the release's installer artifacts.
//!
//! # Architecture
//!
//! The codebase follows a layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to report)
//! - [`core`] - Domain types: changes, aspects, the log parser, configuration
//! - [`git`] - Single interface for all git invocations
//! - [`tracker`] - Abstraction for issue trackers (GitHub v1)
//! - [`report`] - Markdown changelog and release-notes writers
//! - [`ui`] - Output utilities
//!
//! # Invariants
//!
//! Relog maintains the following invariants:
//!
//! 1. Changes without a ticket reference never appear in a grouped report
//! 2. Subsystem groups are keyed by label name, in first-seen order
//! 3. Report output is a pure function of the log window and ticket metadata

pub mod cli;
pub mod core;
pub mod git;
pub mod report;
pub mod tracker;
pub mod ui;
