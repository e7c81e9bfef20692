//! report
//!
//! Markdown changelog and release-notes writers.
//!
//! # Design
//!
//! The writers are pure over their inputs: [`changelog::write_changelog`]
//! takes already assembled changes and any `io::Write`, so tests drive it
//! with injected ticket metadata and a byte buffer. Subprocess and network
//! access happen in the assemble step, which the commands call with a real
//! [`crate::git::Git`] and tracker.

pub mod changelog;
pub mod notes;

use std::io;

/// Write a markdown header at the given level.
fn write_header<W: io::Write>(out: &mut W, text: &str, level: usize) -> io::Result<()> {
    writeln!(out, "{} {}", "#".repeat(level), text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_levels() {
        let mut out = Vec::new();
        write_header(&mut out, "Highlights", 1).unwrap();
        write_header(&mut out, "Subsystem: Core", 3).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "# Highlights\n### Subsystem: Core\n"
        );
    }
}
