//! tracker
//!
//! Abstraction for issue trackers (GitHub v1).
//!
//! # Architecture
//!
//! The `Tracker` trait defines the interface for fetching ticket metadata.
//! The report layer receives a `&dyn Tracker` and never imports a concrete
//! implementation; commands construct [`github::GitHubTracker`] from
//! configuration and tests substitute [`mock::MockTracker`].
//!
//! # Modules
//!
//! - `traits`: Core `Tracker` trait and metadata types
//! - [`github`]: GitHub implementation using the Issues REST API
//! - [`mock`]: Mock implementation for deterministic testing
//!
//! # Example
//!
//! ```ignore
//! use relog::tracker::{github::GitHubTracker, Tracker};
//!
//! let tracker = GitHubTracker::new(None, "acme", "widget");
//! let ticket = tracker.ticket("42").await?;
//! println!("#{}: {}", 42, ticket.title);
//! ```

pub mod github;
pub mod mock;
mod traits;

pub use traits::{LabelInfo, TicketMetadata, Tracker, TrackerError};
