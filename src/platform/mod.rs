//! Platform detection module
//!
//! This module detects the current platform (OS and architecture) and
//! reports it in the identifiers used by the Go downloads feed, so that
//! release files can be matched against the running machine.

mod detection;

pub use detection::{DefaultPlatformDetector, Platform, PlatformDetector, go_arch, go_os};

#[cfg(test)]
pub use detection::MockPlatformDetector;
