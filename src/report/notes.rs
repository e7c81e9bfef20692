//! report::notes
//!
//! Release notes: download links for installer artifacts, then the
//! changelog for the same tag window.
//!
//! # Downloads Section
//!
//! One markdown bullet per installer artifact (standard, admin, CLI, CLI
//! admin). Each bullet links to the release-asset base URL joined with the
//! installer file name; both come from [`ReleaseConfig`] templates. The
//! `+` in build versions is percent-encoded in the base URL path, while
//! file names keep the raw version.

use std::io;

use super::write_header;
use crate::core::config::ReleaseConfig;

/// Substitute `{product}` and `{version}` placeholders in a template.
fn fill(template: &str, product: &str, version: &str) -> String {
    template
        .replace("{product}", product)
        .replace("{version}", version)
}

/// Resolve the build version string.
///
/// Precedence: explicit override, then the config value, then the target
/// tag stripped of its leading `v`.
pub fn build_version(release: &ReleaseConfig, override_version: Option<&str>, tag: &str) -> String {
    if let Some(version) = override_version {
        return version.to_string();
    }
    if let Some(ref version) = release.version {
        return version.clone();
    }
    tag.strip_prefix('v').unwrap_or(tag).to_string()
}

/// Write the downloads section: one bullet per installer artifact.
pub fn write_downloads<W: io::Write>(
    out: &mut W,
    release: &ReleaseConfig,
    version: &str,
) -> io::Result<()> {
    // `+` must be percent-encoded in the asset path.
    let url_version = version.replace('+', "%2B");
    let base = release.asset_base.replace("{version}", &url_version);
    let product = &release.product;

    let artifacts = [
        (format!("{product} {version} Installer"), &release.installer),
        (
            format!("{product} {version} Installer - Admin / All Users / %PROGRAMDATA%"),
            &release.admin_installer,
        ),
        (
            format!("{product} CLI {version} Installer"),
            &release.cli_installer,
        ),
        (
            format!("{product} CLI {version} Installer - Admin / All Users / %PROGRAMDATA%"),
            &release.cli_admin_installer,
        ),
    ];

    write_header(out, "Downloads", 1)?;
    for (label, template) in artifacts {
        let file = fill(template, product, version);
        writeln!(out, "- [{label}]({base}{file})")?;
    }

    Ok(())
}
