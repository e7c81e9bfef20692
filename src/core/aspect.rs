//! core::aspect
//!
//! Label-derived classification of a change.
//!
//! # Design
//!
//! Tracker labels classify tickets along two aspects: the *subsystem* a
//! change touched and the *class* of change it was. A label opts into an
//! aspect through a bracketed directive in its description:
//!
//! ```text
//! [subsystem]                  plain subsystem label
//! [class->Fixed {ticket}]      class label with a custom message pattern
//! ```
//!
//! A custom pattern replaces the default changelog line for changes carrying
//! the label. Patterns may reference `{ticket}`, `{url}` and `{title}`.

use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use regex::Regex;

use crate::tracker::LabelInfo;

/// Default message pattern for rendering a change.
pub const DEFAULT_PATTERN: &str = "- Resolved {ticket}: {title}";

/// Bracketed aspect directive: `[tag]` or `[tag->custom pattern]`.
static DIRECTIVE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.+?)(?:->(.+?))?\]").expect("invalid directive regex"));

/// One aspect of a change (subsystem or class), derived from a label.
///
/// Equality and hashing are keyed on the label name only, so aspects built
/// from different tickets compare equal when they refer to the same label.
#[derive(Debug, Clone)]
pub struct Aspect {
    name: String,
    pattern: String,
}

impl Aspect {
    /// Derive an aspect from a tracker label.
    pub fn from_label(label: &LabelInfo) -> Self {
        let mut pattern = DEFAULT_PATTERN.to_string();
        if let Some(captures) = DIRECTIVE_REGEX.captures(&label.description) {
            if let Some(custom) = captures.get(2) {
                pattern = format!("- {}", custom.as_str());
            }
        }
        Self {
            name: label.name.clone(),
            pattern,
        }
    }

    /// Group header.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Message formatting pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl PartialEq for Aspect {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Aspect {}

impl Hash for Aspect {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(name: &str, description: &str) -> LabelInfo {
        LabelInfo {
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn custom_pattern_from_directive() {
        let aspect = Aspect::from_label(&label("Bug", "[class->Fixed {ticket}]"));
        assert_eq!(aspect.pattern(), "- Fixed {ticket}");
    }

    #[test]
    fn plain_directive_keeps_default_pattern() {
        let aspect = Aspect::from_label(&label("Subsystem: Core", "[subsystem]"));
        assert_eq!(aspect.pattern(), DEFAULT_PATTERN);
    }

    #[test]
    fn directive_found_inside_surrounding_text() {
        let aspect = Aspect::from_label(&label(
            "Enhancement",
            "marks new features [class->Added {title} ({url})] on tickets",
        ));
        assert_eq!(aspect.pattern(), "- Added {title} ({url})");
    }

    #[test]
    fn no_directive_keeps_default_pattern() {
        let aspect = Aspect::from_label(&label("Wontfix", "not planned"));
        assert_eq!(aspect.pattern(), DEFAULT_PATTERN);
    }

    #[test]
    fn name_comes_from_label() {
        let aspect = Aspect::from_label(&label("Subsystem: CLI", "[subsystem]"));
        assert_eq!(aspect.name(), "Subsystem: CLI");
    }

    #[test]
    fn equality_keyed_on_name_only() {
        let a = Aspect::from_label(&label("Bug", "[class->Fixed {ticket}]"));
        let b = Aspect::from_label(&label("Bug", "[class]"));
        let c = Aspect::from_label(&label("Feature", "[class]"));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
