//! Source abstraction for the release feed.
//!
//! The command layer talks to a [`ReleaseSource`] instead of the network
//! directly, so the pipeline can be driven by a mock in tests.

mod godev;

use anyhow::Result;
use async_trait::async_trait;

use crate::release::Release;

pub use godev::{GO_DOWNLOADS_URL, GoDevSource};

/// Trait for release feeds.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Fetch all published releases, in feed order.
    async fn get_releases(&self) -> Result<Vec<Release>>;
}
