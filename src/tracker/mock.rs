//! tracker::mock
//!
//! Mock tracker implementation for deterministic testing.
//!
//! # Design
//!
//! The mock tracker provides a deterministic implementation of the `Tracker`
//! trait for use in tests. It stores ticket metadata in memory, records
//! every lookup, and allows configuring a failure to exercise error paths.
//!
//! # Example
//!
//! ```
//! use relog::tracker::mock::MockTracker;
//! use relog::tracker::{TicketMetadata, Tracker};
//!
//! # tokio_test::block_on(async {
//! let tracker = MockTracker::new();
//! tracker.insert(
//!     "42",
//!     TicketMetadata {
//!         title: "Fix the frobnicator".to_string(),
//!         url: "https://example.com/42".to_string(),
//!         labels: vec![],
//!     },
//! );
//!
//! let ticket = tracker.ticket("42").await.unwrap();
//! assert_eq!(ticket.title, "Fix the frobnicator");
//! assert_eq!(tracker.lookups(), vec!["42".to_string()]);
//! # });
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::traits::{TicketMetadata, Tracker, TrackerError};

/// Mock tracker for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping.
#[derive(Debug, Clone, Default)]
pub struct MockTracker {
    /// Internal state shared across clones.
    inner: Arc<Mutex<MockTrackerInner>>,
}

/// Internal mutable state.
#[derive(Debug, Default)]
struct MockTrackerInner {
    /// Stored tickets by number.
    tickets: HashMap<String, TicketMetadata>,
    /// Error returned by every lookup when set.
    fail_with: Option<TrackerError>,
    /// Recorded lookups for verification.
    lookups: Vec<String>,
}

impl MockTracker {
    /// Create an empty mock tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store metadata for a ticket number.
    pub fn insert(&self, number: impl Into<String>, metadata: TicketMetadata) {
        let mut inner = self.inner.lock().unwrap();
        inner.tickets.insert(number.into(), metadata);
    }

    /// Make every subsequent lookup fail with the given error.
    pub fn fail_with(&self, error: TrackerError) {
        let mut inner = self.inner.lock().unwrap();
        inner.fail_with = Some(error);
    }

    /// Ticket numbers looked up so far, in call order.
    pub fn lookups(&self) -> Vec<String> {
        self.inner.lock().unwrap().lookups.clone()
    }
}

#[async_trait]
impl Tracker for MockTracker {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn ticket(&self, number: &str) -> Result<TicketMetadata, TrackerError> {
        let mut inner = self.inner.lock().unwrap();
        inner.lookups.push(number.to_string());

        if let Some(ref error) = inner.fail_with {
            return Err(error.clone());
        }

        inner
            .tickets
            .get(number)
            .cloned()
            .ok_or_else(|| TrackerError::NotFound(format!("ticket #{number}")))
    }
}
