//! report::changelog
//!
//! Groups changes by subsystem and writes the markdown changelog.
//!
//! # Algorithm
//!
//! 1. Resolve the target tag (most recent `v*` tag when unspecified)
//! 2. Pull the `<tag>..HEAD` log window and parse it into changes
//! 3. Fetch ticket metadata for ticketed changes when a tracker is provided
//! 4. Skip ticketless changes; group the rest by subsystem label name,
//!    groups in first-seen order
//! 5. Write `# Highlights`, then `# Changes` with one `### <subsystem>`
//!    section per group
//!
//! A change with two subsystem labels is written once per group; there is
//! no deduplication beyond the grouping itself.

use std::io;

use anyhow::Result;

use super::write_header;
use crate::core::change::Change;
use crate::core::parser::parse_changes;
use crate::git::Git;
use crate::tracker::Tracker;

/// Changes grouped under one subsystem label.
struct SubsystemGroup<'a> {
    name: String,
    changes: Vec<&'a Change>,
}

/// Resolve the target tag, defaulting to the most recent `v*` tag.
pub fn resolve_tag(git: &Git, tag: Option<&str>) -> Result<String> {
    match tag {
        Some(tag) => Ok(tag.to_string()),
        None => Ok(git.latest_version_tag()?),
    }
}

/// Pull the log window for `tag..HEAD` and parse it, fetching ticket
/// metadata when a tracker is provided.
///
/// Lookups run one at a time, one per ticketed change, with no
/// deduplication; tracker errors propagate.
pub async fn assemble_changes(
    git: &Git,
    tracker: Option<&dyn Tracker>,
    tag: &str,
) -> Result<Vec<Change>> {
    let report = git.log_since(tag)?;
    let mut changes = parse_changes(&report);

    if let Some(tracker) = tracker {
        for change in &mut changes {
            change.fetch_ticket(tracker).await?;
        }
    }

    Ok(changes)
}

/// Write the changelog report for already assembled changes.
pub fn write_changelog<W: io::Write>(out: &mut W, changes: &[Change]) -> io::Result<()> {
    let groups = group_by_subsystem(changes);

    write_header(out, "Highlights", 1)?;
    for change in changes {
        if change.is_highlighted() {
            writeln!(out, "{change}")?;
        }
    }

    write_header(out, "Changes", 1)?;
    for group in groups {
        write_header(out, &group.name, 3)?;
        for change in group.changes {
            writeln!(out, "{change}")?;
        }
    }

    Ok(())
}

/// Assemble and write the full changelog for a tag window.
pub async fn report_changelog<W: io::Write>(
    out: &mut W,
    git: &Git,
    tracker: Option<&dyn Tracker>,
    tag: &str,
) -> Result<()> {
    let changes = assemble_changes(git, tracker, tag).await?;
    write_changelog(out, &changes)?;
    Ok(())
}

/// Group ticketed changes by subsystem label name, first-seen order.
fn group_by_subsystem(changes: &[Change]) -> Vec<SubsystemGroup<'_>> {
    let mut groups: Vec<SubsystemGroup<'_>> = Vec::new();

    for change in changes {
        if !change.has_ticket() {
            continue;
        }
        for subsystem in change.subsystems() {
            match groups.iter_mut().find(|g| g.name == subsystem.name()) {
                Some(group) => group.changes.push(change),
                None => groups.push(SubsystemGroup {
                    name: subsystem.name().to_string(),
                    changes: vec![change],
                }),
            }
        }
    }

    groups
}
