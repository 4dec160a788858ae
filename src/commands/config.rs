use crate::output::OutputMode;
use crate::source::GO_DOWNLOADS_URL;

/// Flags selecting which releases are shown and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListOptions {
    /// Show only the newest stable release
    pub latest: bool,
    /// Show only files built for this machine
    pub local: bool,
    /// Print bare version numbers
    pub simple: bool,
}

impl ListOptions {
    pub fn output_mode(&self) -> OutputMode {
        if self.simple {
            OutputMode::Simple
        } else {
            OutputMode::Detailed
        }
    }
}

/// Resolved settings for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Feed URL; always the official feed outside of tests
    pub url: String,
    pub options: ListOptions,
}

impl Config {
    pub fn new(options: ListOptions) -> Self {
        Self {
            url: GO_DOWNLOADS_URL.to_string(),
            options,
        }
    }
}
