//! Host runtime probing.

use std::{path::PathBuf, process::Command};

use tracing::debug;

use crate::version::{Version, VersionError};

/// Oldest runtime release able to load the generated registry module.
pub const MIN_RUNTIME_VERSION: Version = Version::new(1, 31, 0);

/// The resolved runtime executable and the version it reports.
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub path: PathBuf,
    pub version: Version,
}

/// Resolve `executable` on `PATH` and ask it for its version.
pub fn probe_runtime(executable: &str) -> Result<RuntimeInfo, VersionError> {
    let path = which::which(executable).map_err(|source| VersionError::NotFound {
        executable: executable.to_string(),
        source,
    })?;

    let output = Command::new(&path)
        .arg("--version")
        .output()
        .map_err(|source| VersionError::Probe {
            path: path.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(VersionError::VersionCommand {
            path,
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let version = parse_version_output(&stdout).ok_or_else(|| VersionError::Unrecognized {
        path: path.clone(),
        output: stdout.trim().to_string(),
    })?;

    debug!(path = %path.display(), %version, "resolved runtime version");
    Ok(RuntimeInfo { path, version })
}

/// Extract the version from output like `deno 1.46.3 (stable, release, x86_64)`.
fn parse_version_output(output: &str) -> Option<Version> {
    let first = output.lines().next()?;
    let token = first.split_whitespace().nth(1)?;
    // drop pre-release and build metadata
    let core = token.split(['-', '+']).next()?;
    core.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version_output() {
        let out = concat!(
            "deno 1.46.3 (stable, release, x86_64-unknown-linux-gnu)\n",
            "v8 12.9.202.5\n",
            "typescript 5.5.2\n",
        );
        assert_eq!(parse_version_output(out), Some(Version::new(1, 46, 3)));
    }

    #[test]
    fn test_parse_version_output_prerelease() {
        assert_eq!(
            parse_version_output("deno 2.0.0-rc.4 (release candidate)"),
            Some(Version::new(2, 0, 0))
        );
    }

    #[test]
    fn test_parse_version_output_garbage() {
        assert_eq!(parse_version_output(""), None);
        assert_eq!(parse_version_output("deno"), None);
        assert_eq!(parse_version_output("deno unknown"), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_version_command() {
        // `false` exits with 1 even for --version.
        let err = probe_runtime("false").unwrap_err();

        match err {
            VersionError::VersionCommand { status, .. } => assert!(!status.success()),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
