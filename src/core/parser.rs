//! core::parser
//!
//! Parses `git log` output into changes.
//!
//! # Input Format
//!
//! The parser consumes the output of [`crate::git::LOG_FORMAT`]
//! (`git log --pretty=format:%h %s%n%b%n/`):
//!
//! ```text
//! 1a2b3c4 fix #42 widget frobnication
//! body line
//! - [ ] follow up on the frobnicator
//! /
//! 5d6e7f8 chore: bump deps
//! /
//! ```
//!
//! Each commit is `<hash> <subject>`, zero or more body lines, then a line
//! holding only `/`. Lines that do not split into `<hash> <subject>` are
//! skipped as noise. A trailing block whose delimiter never arrives is
//! terminated at end-of-input.

use crate::core::change::Change;

/// Commit delimiter line emitted by the log format.
const DELIMITER: &str = "/";

/// Parse a git log report into changes, in input (newest-first) order.
pub fn parse_changes(report: &str) -> Vec<Change> {
    let lines: Vec<&str> = report.lines().collect();
    let mut changes = Vec::new();
    let mut idx = 0;

    while idx < lines.len() {
        // A commit starts at `<hash> <subject>`; anything else is noise.
        let Some((hash, subject)) = lines[idx].split_once(' ') else {
            idx += 1;
            continue;
        };
        idx += 1;

        // Body lines are concatenated without separator until the delimiter.
        let mut comments = String::new();
        while idx < lines.len() && lines[idx] != DELIMITER {
            comments.push_str(lines[idx]);
            idx += 1;
        }
        idx += 1; // past the delimiter (or end of input)

        changes.push(Change::new(hash, subject, &comments));
    }

    changes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_no_changes() {
        assert!(parse_changes("").is_empty());
    }

    #[test]
    fn one_change_per_delimited_block_in_input_order() {
        let report = "aaa111 fix #1 one\nbody\n/\nbbb222 fix #2 two\n/\nccc333 fix #3 three\n/";
        let changes = parse_changes(report);

        assert_eq!(changes.len(), 3);
        assert_eq!(changes[0].commit_hash(), "aaa111");
        assert_eq!(changes[1].commit_hash(), "bbb222");
        assert_eq!(changes[2].commit_hash(), "ccc333");
        assert_eq!(changes[0].ticket(), "#1");
        assert_eq!(changes[2].ticket(), "#3");
    }

    #[test]
    fn single_block_scenario() {
        let changes = parse_changes("abc123 fix #7\nsome text\n/");

        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].commit_hash(), "abc123");
        assert_eq!(changes[0].ticket(), "#7");
        assert_eq!(changes[0].title(), "");
        assert_eq!(changes[0].url(), "");
    }

    #[test]
    fn noise_lines_are_skipped() {
        let report = "noise\naaa111 fix #1 one\n/\n\nbbb222 fix #2 two\n/";
        let changes = parse_changes(report);

        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0].commit_hash(), "aaa111");
        assert_eq!(changes[1].commit_hash(), "bbb222");
    }

    #[test]
    fn trailing_block_without_delimiter_ends_at_input_end() {
        let report = "aaa111 fix #1 one\n/\nbbb222 fix #2 two\ndangling body";
        let changes = parse_changes(report);

        assert_eq!(changes.len(), 2);
        assert_eq!(changes[1].commit_hash(), "bbb222");
    }

    #[test]
    fn body_lines_concatenate_without_separator() {
        // Two body lines collapse into one comment string; checkbox matching
        // happens against that collapsed text.
        let report = "aaa111 fix #1 one\nfirst\nsecond\n/";
        let changes = parse_changes(report);

        assert_eq!(changes.len(), 1);
        assert!(changes[0].todos().is_empty());
    }

    #[test]
    fn todos_extracted_from_body() {
        let report = "aaa111 fix #1 one\n- [ ] follow up\n/";
        let changes = parse_changes(report);

        assert_eq!(changes[0].todos(), ["follow up".to_string()]);
    }

    #[test]
    fn empty_body_from_log_format() {
        // A commit with no body renders as `<hash> <subject>`, an empty
        // line, then the delimiter.
        let report = "aaa111 chore: bump deps\n\n/";
        let changes = parse_changes(report);

        assert_eq!(changes.len(), 1);
        assert!(!changes[0].has_ticket());
    }
}
