//! Text rendering of release lists.

use std::io::Write;

use anyhow::Result;

use crate::release::{Release, ReleaseFile};

/// Prefix carried by every version string in the feed.
pub const VERSION_PREFIX: &str = "go";

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// How releases are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Header line per release followed by one line per file
    #[default]
    Detailed,
    /// Bare version numbers only
    Simple,
}

/// Strips the leading `go` from a version string, if present.
pub fn bare_version(version: &str) -> &str {
    version.strip_prefix(VERSION_PREFIX).unwrap_or(version)
}

/// Formats a byte count as mebibytes with one decimal place.
pub fn format_size(bytes: u64) -> String {
    format!("{:.1} MB", bytes as f64 / BYTES_PER_MB)
}

fn format_file(file: &ReleaseFile) -> String {
    format!(
        "  {} ({}/{}, {}, {})",
        file.filename,
        file.os,
        file.arch,
        file.kind,
        format_size(file.size)
    )
}

/// Writes every release to `out`, in order.
pub fn print_releases<W: Write>(out: &mut W, releases: &[Release], mode: OutputMode) -> Result<()> {
    for release in releases {
        if mode == OutputMode::Simple {
            writeln!(out, "{}", bare_version(&release.version))?;
            continue;
        }

        writeln!(out, "{} (stable: {})", release.version, release.stable)?;
        for file in &release.files {
            writeln!(out, "{}", format_file(file))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(releases: &[Release], mode: OutputMode) -> String {
        let mut buf = Vec::new();
        print_releases(&mut buf, releases, mode).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn sample_release() -> Release {
        Release {
            version: "go1.21.0".into(),
            stable: true,
            files: vec![
                ReleaseFile {
                    filename: "go1.21.0.linux-amd64.tar.gz".into(),
                    os: "linux".into(),
                    arch: "amd64".into(),
                    kind: "archive".into(),
                    size: 104857600,
                },
                ReleaseFile {
                    filename: "go1.21.0.windows-amd64.msi".into(),
                    os: "windows".into(),
                    arch: "amd64".into(),
                    kind: "installer".into(),
                    size: 1572864,
                },
            ],
        }
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(1572864), "1.5 MB");
        assert_eq!(format_size(1048576), "1.0 MB");
        assert_eq!(format_size(0), "0.0 MB");
        assert_eq!(format_size(104857600), "100.0 MB");
    }

    #[test]
    fn test_bare_version() {
        assert_eq!(bare_version("go1.21.0"), "1.21.0");
        assert_eq!(bare_version("1.21.0"), "1.21.0");
        assert_eq!(bare_version("gogo1"), "go1");
        assert_eq!(bare_version(""), "");
    }

    #[test]
    fn test_print_detailed() {
        let output = render(&[sample_release()], OutputMode::Detailed);

        assert_eq!(
            output,
            "go1.21.0 (stable: true)\n\
             \x20 go1.21.0.linux-amd64.tar.gz (linux/amd64, archive, 100.0 MB)\n\
             \x20 go1.21.0.windows-amd64.msi (windows/amd64, installer, 1.5 MB)\n"
        );
    }

    #[test]
    fn test_print_detailed_without_files() {
        let release = Release {
            version: "go1.22rc1".into(),
            stable: false,
            files: vec![],
        };

        let output = render(&[release], OutputMode::Detailed);

        assert_eq!(output, "go1.22rc1 (stable: false)\n");
    }

    #[test]
    fn test_print_simple() {
        let releases = vec![
            sample_release(),
            Release {
                version: "devel".into(),
                ..Default::default()
            },
        ];

        let output = render(&releases, OutputMode::Simple);

        assert_eq!(output, "1.21.0\ndevel\n");
    }

    #[test]
    fn test_print_empty_list() {
        assert_eq!(render(&[], OutputMode::Detailed), "");
        assert_eq!(render(&[], OutputMode::Simple), "");
    }
}
