//! cli::commands::notes
//!
//! Release notes: download links for installer artifacts, then the
//! changelog for the same tag window.
//!
//! # Example
//!
//! ```bash
//! # Release notes since the most recent v* tag
//! relog notes
//!
//! # Pin the build version used in download links
//! relog notes --build-version 4.8.12+2024
//! ```

use anyhow::Result;

use super::changelog::{build_tracker, git_for};
use crate::cli::Context;
use crate::core::config::Config;
use crate::report::changelog::{report_changelog, resolve_tag};
use crate::report::notes::{build_version, write_downloads};
use crate::ui::output;

/// Generate release notes from `tag` (or the most recent v* tag) to HEAD.
///
/// This is a synchronous wrapper that uses tokio to run the async
/// implementation.
pub fn notes(
    ctx: &Context,
    tag: Option<&str>,
    build_version_override: Option<&str>,
    no_fetch: bool,
) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(notes_async(ctx, tag, build_version_override, no_fetch))
}

async fn notes_async(
    ctx: &Context,
    tag: Option<&str>,
    build_version_override: Option<&str>,
    no_fetch: bool,
) -> Result<()> {
    let git = git_for(ctx);
    let config = Config::load(&ctx.workdir())?;
    config.validate_release()?;

    let tracker = if no_fetch {
        None
    } else {
        Some(build_tracker(ctx, &config)?)
    };

    let tag = resolve_tag(&git, tag)?;
    let version = build_version(&config.release, build_version_override, &tag);
    output::debug(
        format!("target tag is {tag}, build version {version}"),
        ctx.verbosity(),
    );

    let mut stdout = std::io::stdout();
    write_downloads(&mut stdout, &config.release, &version)?;
    report_changelog(&mut stdout, &git, tracker.as_deref(), &tag).await
}
