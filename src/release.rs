use serde::{Deserialize, Serialize};

/// A downloadable file belonging to a release.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ReleaseFile {
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub os: String,
    #[serde(default)]
    pub arch: String,
    /// Artifact type ("archive", "installer" or "source")
    #[serde(default)]
    pub kind: String,
    /// Size in bytes
    #[serde(default)]
    pub size: u64,
}

impl ReleaseFile {
    /// Returns true if this file targets exactly the given OS/arch pair.
    pub fn matches(&self, os: &str, arch: &str) -> bool {
        self.os == os && self.arch == arch
    }
}

/// A published Go release as listed by the downloads feed.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Release {
    /// Version string (e.g., "go1.21.0")
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub stable: bool,
    #[serde(default)]
    pub files: Vec<ReleaseFile>,
}
