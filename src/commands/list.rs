use std::io::Write;

use anyhow::Result;
use log::{debug, info};

use crate::{
    filter::{filter_latest, filter_local},
    output::print_releases,
    platform::{DefaultPlatformDetector, PlatformDetector},
    source::ReleaseSource,
};

use super::config::{Config, ListOptions};
use super::services::build_source;

/// List Go releases from the official feed on stdout
#[tracing::instrument]
pub async fn list(options: ListOptions) -> Result<()> {
    let config = Config::new(options);
    let source = build_source(&config)?;
    let mut out = std::io::stdout();
    run(&source, &DefaultPlatformDetector, &config.options, &mut out).await
}

/// Fetch, filter and print releases.
///
/// The platform is only consulted when `options.local` is set.
#[tracing::instrument(skip(source, detector, out))]
pub async fn run<S, P, W>(source: &S, detector: &P, options: &ListOptions, out: &mut W) -> Result<()>
where
    S: ReleaseSource,
    P: PlatformDetector,
    W: Write,
{
    let mut releases = source.get_releases().await?;
    info!("Fetched {} release(s)", releases.len());

    if options.local {
        let platform = detector.detect();
        debug!("Filtering files for {}", platform);
        releases = filter_local(releases, &platform);
    }

    if options.latest {
        releases = filter_latest(releases);
    }

    print_releases(out, &releases, options.output_mode())?;
    out.flush()?;
    Ok(())
}
