//! Release filters applied between fetching and printing.

use log::debug;

use crate::platform::Platform;
use crate::release::Release;

/// Keep only the files built for `platform` in every release.
///
/// Releases themselves are never dropped, even when no file matches.
pub fn filter_local(mut releases: Vec<Release>, platform: &Platform) -> Vec<Release> {
    for release in &mut releases {
        release
            .files
            .retain(|f| f.matches(&platform.os, &platform.arch));
    }

    debug!(
        "Kept {} file(s) for {} across {} release(s)",
        releases.iter().map(|r| r.files.len()).sum::<usize>(),
        platform,
        releases.len()
    );

    releases
}

/// Reduce the list to the single newest stable release, or nothing.
///
/// Versions are compared as plain strings, newest first.
pub fn filter_latest(releases: Vec<Release>) -> Vec<Release> {
    let mut stable: Vec<Release> = releases.into_iter().filter(|r| r.stable).collect();
    stable.sort_by(|a, b| b.version.cmp(&a.version));
    stable.truncate(1);

    match stable.first() {
        Some(latest) => debug!("Latest stable release is {}", latest.version),
        None => debug!("No stable release found"),
    }

    stable
}
