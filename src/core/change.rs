//! core::change
//!
//! One commit in the log window and its ticket linkage.
//!
//! # Design
//!
//! Construction extracts the ticket reference and todo items from the commit
//! text. Ticket metadata is fetched separately via [`Change::fetch_ticket`],
//! keeping parsing free of network access; tests inject metadata with
//! [`Change::set_ticket`].

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::core::aspect::{Aspect, DEFAULT_PATTERN};
use crate::tracker::{TicketMetadata, Tracker, TrackerError};

/// Ticket reference in a commit subject: `#123`. First match wins.
static TICKET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#(\d+)").expect("invalid ticket regex"));

/// Unchecked checkbox in the commit body: `- [ ] text`.
static TODO_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-\s*\[\s*\]\s+(.+)").expect("invalid todo regex"));

/// One commit from the log window.
#[derive(Debug, Clone)]
pub struct Change {
    commit_hash: String,
    ticket_id: Option<String>,
    todos: Vec<String>,
    ticket: Option<TicketMetadata>,
}

impl Change {
    /// Create a change from one parsed commit block.
    pub fn new(commit_hash: impl Into<String>, subject: &str, comments: &str) -> Self {
        Self {
            commit_hash: commit_hash.into(),
            ticket_id: Self::find_ticket(subject),
            todos: Self::find_todos(comments),
            ticket: None,
        }
    }

    /// Find the ticket number in a commit subject.
    pub fn find_ticket(subject: &str) -> Option<String> {
        TICKET_REGEX.captures(subject).map(|c| c[1].to_string())
    }

    /// Find todo items in the commit comments, one per line, in order.
    ///
    /// Only empty checkboxes count; `- [x]` is already done.
    pub fn find_todos(comments: &str) -> Vec<String> {
        comments
            .split('\n')
            .filter_map(|line| TODO_REGEX.captures(line).map(|c| c[1].to_string()))
            .collect()
    }

    /// Fetch ticket metadata from the tracker.
    ///
    /// No-op for changes without a ticket reference. Tracker errors
    /// propagate; there is no retry.
    pub async fn fetch_ticket(&mut self, tracker: &dyn Tracker) -> Result<(), TrackerError> {
        if let Some(ref number) = self.ticket_id {
            self.ticket = Some(tracker.ticket(number).await?);
        }
        Ok(())
    }

    /// Inject ticket metadata directly (tests, pre-fetched data).
    pub fn set_ticket(&mut self, ticket: TicketMetadata) {
        self.ticket = Some(ticket);
    }

    /// Commit hash of the change.
    pub fn commit_hash(&self) -> &str {
        &self.commit_hash
    }

    /// Whether the commit subject referenced a ticket.
    pub fn has_ticket(&self) -> bool {
        self.ticket_id.is_some()
    }

    /// Ticket number, if the subject referenced one.
    pub fn ticket_id(&self) -> Option<&str> {
        self.ticket_id.as_deref()
    }

    /// Ticket display form: `#123`, or empty without a ticket.
    pub fn ticket(&self) -> String {
        match self.ticket_id {
            Some(ref id) => format!("#{id}"),
            None => String::new(),
        }
    }

    /// Ticket url, or empty before a successful fetch.
    pub fn url(&self) -> &str {
        self.ticket.as_ref().map(|t| t.url.as_str()).unwrap_or("")
    }

    /// Ticket title, or empty before a successful fetch.
    pub fn title(&self) -> &str {
        self.ticket.as_ref().map(|t| t.title.as_str()).unwrap_or("")
    }

    /// Todo items found in the commit comments.
    pub fn todos(&self) -> &[String] {
        &self.todos
    }

    /// Subsystem aspects from the ticket labels.
    pub fn subsystems(&self) -> Vec<Aspect> {
        self.aspects_matching("[subsystem")
    }

    /// Class aspects from the ticket labels.
    pub fn classes(&self) -> Vec<Aspect> {
        self.aspects_matching("[class")
    }

    /// Whether the ticket carries the `Highlight` label.
    pub fn is_highlighted(&self) -> bool {
        self.has_label("Highlight")
    }

    /// Whether the ticket carries the `Prioritize` label.
    pub fn is_priority(&self) -> bool {
        self.has_label("Prioritize")
    }

    fn aspects_matching(&self, marker: &str) -> Vec<Aspect> {
        match self.ticket {
            Some(ref ticket) => ticket
                .labels
                .iter()
                .filter(|label| label.description.contains(marker))
                .map(Aspect::from_label)
                .collect(),
            None => Vec::new(),
        }
    }

    fn has_label(&self, name: &str) -> bool {
        self.ticket
            .as_ref()
            .is_some_and(|t| t.labels.iter().any(|label| label.name == name))
    }
}

impl fmt::Display for Change {
    /// Render using the first class aspect's pattern, else the default.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let classes = self.classes();
        let pattern = classes
            .first()
            .map(|class| class.pattern())
            .unwrap_or(DEFAULT_PATTERN);
        let line = pattern
            .replace("{ticket}", &self.ticket())
            .replace("{url}", self.url())
            .replace("{title}", self.title());
        f.write_str(&line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::LabelInfo;

    fn label(name: &str, description: &str) -> LabelInfo {
        LabelInfo {
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    fn metadata(title: &str, labels: Vec<LabelInfo>) -> TicketMetadata {
        TicketMetadata {
            title: title.to_string(),
            url: format!("https://example.com/{title}"),
            labels,
        }
    }

    #[test]
    fn finds_first_ticket_in_subject() {
        assert_eq!(Change::find_ticket("fix #42 thing"), Some("42".to_string()));
        assert_eq!(
            Change::find_ticket("merge #10 into #11"),
            Some("10".to_string())
        );
    }

    #[test]
    fn subject_without_ticket_yields_none() {
        assert_eq!(Change::find_ticket("chore: bump deps"), None);
        assert_eq!(Change::find_ticket("refs issue # 42"), None);
    }

    #[test]
    fn finds_only_unchecked_todos() {
        let todos = Change::find_todos("- [ ] do X\n- [x] done Y");
        assert_eq!(todos, vec!["do X".to_string()]);
    }

    #[test]
    fn todos_keep_line_order() {
        let todos = Change::find_todos("intro\n- [ ] first\ntext\n- [] second");
        assert_eq!(todos, vec!["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn ticket_display_form() {
        let with = Change::new("abc", "fix #7", "");
        let without = Change::new("abc", "fix things", "");
        assert_eq!(with.ticket(), "#7");
        assert_eq!(without.ticket(), "");
    }

    #[test]
    fn unfetched_change_has_empty_title_and_url() {
        let change = Change::new("abc123", "fix #7", "some text");
        assert_eq!(change.title(), "");
        assert_eq!(change.url(), "");
        assert!(change.subsystems().is_empty());
        assert!(!change.is_highlighted());
    }

    #[test]
    fn renders_default_pattern_without_classes() {
        let mut change = Change::new("abc", "fix #7", "");
        change.set_ticket(metadata("Widget overflow", vec![]));
        assert_eq!(change.to_string(), "- Resolved #7: Widget overflow");
    }

    #[test]
    fn renders_first_class_pattern() {
        let mut change = Change::new("abc", "fix #7", "");
        change.set_ticket(metadata(
            "Widget overflow",
            vec![
                label("Bug", "[class->Fixed {ticket}: {title}]"),
                label("Feature", "[class->Added {title}]"),
            ],
        ));
        assert_eq!(change.to_string(), "- Fixed #7: Widget overflow");
    }

    #[test]
    fn subsystems_and_classes_filter_on_directive_marker() {
        let mut change = Change::new("abc", "fix #7", "");
        change.set_ticket(metadata(
            "Widget overflow",
            vec![
                label("Subsystem: Core", "[subsystem]"),
                label("Bug", "[class]"),
                label("Highlight", ""),
            ],
        ));

        let subsystems = change.subsystems();
        assert_eq!(subsystems.len(), 1);
        assert_eq!(subsystems[0].name(), "Subsystem: Core");

        let classes = change.classes();
        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].name(), "Bug");
    }

    #[test]
    fn highlight_and_priority_flags_match_exact_label_names() {
        let mut change = Change::new("abc", "fix #7", "");
        change.set_ticket(metadata(
            "Widget overflow",
            vec![label("Highlight", ""), label("Prioritize", "")],
        ));
        assert!(change.is_highlighted());
        assert!(change.is_priority());

        let mut other = Change::new("def", "fix #8", "");
        other.set_ticket(metadata("Other", vec![label("Highlighted", "")]));
        assert!(!other.is_highlighted());
    }

    #[tokio::test]
    async fn fetch_is_noop_without_ticket() {
        use crate::tracker::mock::MockTracker;

        let tracker = MockTracker::new();
        let mut change = Change::new("abc", "chore: tidy", "");
        change.fetch_ticket(&tracker).await.unwrap();

        assert!(tracker.lookups().is_empty());
        assert_eq!(change.title(), "");
    }

    #[tokio::test]
    async fn fetch_fills_metadata() {
        use crate::tracker::mock::MockTracker;

        let tracker = MockTracker::new();
        tracker.insert("7", metadata("Widget overflow", vec![]));

        let mut change = Change::new("abc", "fix #7", "");
        change.fetch_ticket(&tracker).await.unwrap();

        assert_eq!(change.title(), "Widget overflow");
        assert_eq!(tracker.lookups(), vec!["7"]);
    }
}
