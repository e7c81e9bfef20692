//! cli::commands::changelog
//!
//! Report changes from a tag to HEAD.
//!
//! # Example
//!
//! ```bash
//! # Changelog since the most recent v* tag
//! relog changelog
//!
//! # Changelog since a specific tag
//! relog changelog v4.8.12
//!
//! # Offline run
//! relog changelog --no-fetch
//! ```

use anyhow::Result;

use crate::cli::Context;
use crate::core::config::Config;
use crate::git::Git;
use crate::report::changelog::{report_changelog, resolve_tag};
use crate::tracker::github::GitHubTracker;
use crate::tracker::Tracker;
use crate::ui::output;

/// Environment variable holding the tracker token.
const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Report changes from `tag` (or the most recent v* tag) to HEAD.
///
/// This is a synchronous wrapper that uses tokio to run the async
/// implementation.
pub fn changelog(ctx: &Context, tag: Option<&str>, no_fetch: bool) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(changelog_async(ctx, tag, no_fetch))
}

async fn changelog_async(ctx: &Context, tag: Option<&str>, no_fetch: bool) -> Result<()> {
    let git = git_for(ctx);
    let config = Config::load(&ctx.workdir())?;

    let tracker = if no_fetch {
        None
    } else {
        Some(build_tracker(ctx, &config)?)
    };

    let tag = resolve_tag(&git, tag)?;
    output::debug(format!("target tag is {tag}"), ctx.verbosity());

    let mut stdout = std::io::stdout();
    report_changelog(&mut stdout, &git, tracker.as_deref(), &tag).await
}

/// Git doorway honoring `--cwd`.
pub(super) fn git_for(ctx: &Context) -> Git {
    match ctx.cwd {
        Some(ref path) => Git::with_repo_path(path.clone()),
        None => Git::new(),
    }
}

/// Construct the GitHub tracker from config and environment.
pub(super) fn build_tracker(ctx: &Context, config: &Config) -> Result<Box<dyn Tracker>> {
    config.validate_tracker()?;

    let token = std::env::var(TOKEN_ENV).ok();
    if token.is_none() {
        output::warn(
            format!("{TOKEN_ENV} is not set; unauthenticated tracker lookups are rate limited"),
            ctx.verbosity(),
        );
    }

    let tracker = match config.tracker.api_base {
        Some(ref api_base) => GitHubTracker::with_api_base(
            token,
            &config.tracker.owner,
            &config.tracker.repo,
            api_base,
        ),
        None => GitHubTracker::new(token, &config.tracker.owner, &config.tracker.repo),
    };

    Ok(Box::new(tracker))
}
