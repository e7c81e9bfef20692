//! git::interface
//!
//! Git interface implementation over the `git` command-line tool.
//!
//! # Design
//!
//! Every git interaction is a subprocess invocation with captured output.
//! Failures are normalized into typed [`GitError`] variants so higher layers
//! can report them without inspecting stderr text.
//!
//! The log window uses a fixed pretty format, [`LOG_FORMAT`], that renders
//! each commit as `<hash> <subject>`, its body lines, and a `/` delimiter
//! line. [`crate::core::parser`] consumes exactly this shape.

use std::path::PathBuf;
use std::process::Command;

use thiserror::Error;

/// Log format consumed by the change parser: `<hash> <subject>`, the body
/// lines, then a line holding only `/` as the commit delimiter.
pub const LOG_FORMAT: &str = "--pretty=format:%h %s%n%b%n/";

/// Errors from git invocations.
#[derive(Debug, Error)]
pub enum GitError {
    /// The `git` executable was not found on PATH.
    #[error("git executable not found")]
    GitNotFound,

    /// The command ran but exited with a failure status.
    #[error("git command failed (exit code {exit_code}): {stderr}")]
    CommandFailed {
        /// Captured stderr from the failed command
        stderr: String,
        /// Process exit code (-1 when terminated by signal)
        exit_code: i32,
    },

    /// No `v*` tags exist in the repository.
    #[error("no version tags found (expected at least one tag matching v*)")]
    NoVersionTags,

    /// Failed to spawn or talk to the subprocess.
    #[error("io error running git: {0}")]
    Io(#[from] std::io::Error),
}

/// Doorway to the `git` CLI.
#[derive(Debug, Clone, Default)]
pub struct Git {
    /// Path to the repository (None = current directory)
    repo_path: Option<PathBuf>,
}

impl Git {
    /// Create a git interface for the current directory.
    pub fn new() -> Self {
        Self { repo_path: None }
    }

    /// Create a git interface for a specific repository path.
    pub fn with_repo_path(path: PathBuf) -> Self {
        Self {
            repo_path: Some(path),
        }
    }

    /// Run a git command and capture stdout.
    fn run(&self, args: &[&str]) -> Result<String, GitError> {
        let mut cmd = Command::new("git");

        if let Some(ref path) = self.repo_path {
            cmd.arg("-C").arg(path);
        }

        cmd.args(args);

        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GitError::GitNotFound
            } else {
                GitError::Io(e)
            }
        })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            Err(GitError::CommandFailed {
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                exit_code: output.status.code().unwrap_or(-1),
            })
        }
    }

    /// Most recent `v*` tag by creation date.
    pub fn latest_version_tag(&self) -> Result<String, GitError> {
        let refname = self.run(&[
            "for-each-ref",
            "refs/tags/v*",
            "--sort=-creatordate",
            "--format=%(refname)",
            "--count=1",
        ])?;

        let trimmed = refname.trim();
        let tag = trimmed.strip_prefix("refs/tags/").unwrap_or(trimmed);
        if tag.is_empty() {
            return Err(GitError::NoVersionTags);
        }
        Ok(tag.to_string())
    }

    /// Commit log window from `tag` (exclusive) to HEAD, newest first, in
    /// the [`LOG_FORMAT`] shape.
    pub fn log_since(&self, tag: &str) -> Result<String, GitError> {
        let range = format!("{tag}..HEAD");
        self.run(&["log", LOG_FORMAT, &range])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn git_error_display() {
        assert_eq!(
            format!("{}", GitError::GitNotFound),
            "git executable not found"
        );
        assert_eq!(
            format!(
                "{}",
                GitError::CommandFailed {
                    stderr: "fatal: bad revision".into(),
                    exit_code: 128,
                }
            ),
            "git command failed (exit code 128): fatal: bad revision"
        );
        assert_eq!(
            format!("{}", GitError::NoVersionTags),
            "no version tags found (expected at least one tag matching v*)"
        );
    }

    #[test]
    fn log_format_delimits_commits() {
        // The format must end each commit with a lone `/` line; the parser
        // depends on it.
        assert!(LOG_FORMAT.ends_with("%n/"));
        assert!(LOG_FORMAT.contains("%h %s"));
    }
}
