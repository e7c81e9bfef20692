//! tracker::traits
//!
//! Tracker trait definition for issue-tracker lookups.
//!
//! # Design
//!
//! The `Tracker` trait is async because lookups involve network I/O. All
//! methods return `Result` so API failures surface to the caller; relog does
//! one point lookup per ticket with no caching or retries.
//!
//! # Example
//!
//! ```ignore
//! use relog::tracker::{Tracker, TrackerError};
//!
//! async fn title_of(tracker: &dyn Tracker, number: &str) -> Result<String, TrackerError> {
//!     let ticket = tracker.ticket(number).await?;
//!     Ok(ticket.title)
//! }
//! ```

use async_trait::async_trait;
use thiserror::Error;

/// Errors from tracker operations.
///
/// These error types map to common failure modes when interacting with
/// remote issue trackers like GitHub.
#[derive(Debug, Clone, Error)]
pub enum TrackerError {
    /// Authentication failed (invalid token, expired, insufficient permissions).
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// The requested ticket was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Rate limit exceeded.
    #[error("rate limited")]
    RateLimited,

    /// API returned an error.
    #[error("API error: {status} - {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Network or connection error.
    #[error("network error: {0}")]
    NetworkError(String),
}

/// A label attached to a ticket.
///
/// The free-text description carries the bracketed aspect directives parsed
/// by [`crate::core::Aspect`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelInfo {
    /// Label name (e.g. "Subsystem: Core", "Highlight")
    pub name: String,
    /// Free-text label description
    pub description: String,
}

/// Ticket metadata returned from the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketMetadata {
    /// Ticket title
    pub title: String,
    /// Web URL for viewing the ticket
    pub url: String,
    /// Labels attached to the ticket
    pub labels: Vec<LabelInfo>,
}

/// The Tracker trait for issue-tracker lookups.
///
/// v1 implements GitHub Issues only; the trait keeps the report layer
/// independent of the tracker and lets tests substitute
/// [`crate::tracker::mock::MockTracker`].
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow use across async tasks.
#[async_trait]
pub trait Tracker: Send + Sync {
    /// Get the tracker name (e.g., "github").
    fn name(&self) -> &'static str;

    /// Fetch metadata for a ticket by number.
    ///
    /// # Arguments
    ///
    /// * `number` - The ticket number as extracted from a commit subject
    ///
    /// # Errors
    ///
    /// - `NotFound` if the ticket doesn't exist
    /// - `AuthFailed` if the token is invalid or lacks permissions
    /// - `RateLimited` when the API limit is hit
    /// - `NetworkError` on connection failures
    async fn ticket(&self, number: &str) -> Result<TicketMetadata, TrackerError>;
}
