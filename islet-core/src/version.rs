use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use miette::Diagnostic;
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// A `major.minor.patch` version, ordered numerically component by component.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Version {
    major: u32,
    minor: u32,
    patch: u32,
}

impl TryFrom<String> for Version {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl Version {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 3 {
            return Err(format!("invalid version '{}', expected 'X.Y.Z'", s));
        }
        Ok(Self {
            major: parts[0].parse().map_err(|_| "invalid major")?,
            minor: parts[1].parse().map_err(|_| "invalid minor")?,
            patch: parts[2].parse().map_err(|_| "invalid patch")?,
        })
    }
}

/// Errors raised while checking the host runtime version.
#[derive(Debug, Error, Diagnostic)]
pub enum VersionError {
    #[error("runtime version {found} is too old, {required} or higher is required")]
    #[diagnostic(code(islet::runtime_too_old), help("{hint}"))]
    TooOld {
        found: Version,
        required: Version,
        hint: String,
    },

    #[error("could not locate runtime executable '{executable}'")]
    #[diagnostic(
        code(islet::runtime_missing),
        help("install the runtime or set [runtime] executable in islet.toml")
    )]
    NotFound {
        executable: String,
        #[source]
        source: which::Error,
    },

    #[error("failed to run '{}'", .path.display())]
    Probe {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{} --version' failed with {status}", .path.display())]
    #[diagnostic(code(islet::runtime_version_failed), help("{stderr}"))]
    VersionCommand {
        path: PathBuf,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("unrecognized version output from '{}': {output}", .path.display())]
    Unrecognized { path: PathBuf, output: String },
}

/// Fail with [`VersionError::TooOld`] when `found` is below `required`.
///
/// The remediation hint depends on how the runtime was installed, which is
/// guessed from the resolved executable path.
pub fn ensure_min_version(
    found: &Version,
    required: &Version,
    executable: &Path,
) -> Result<(), VersionError> {
    if found >= required {
        return Ok(());
    }

    let hint = if executable.to_string_lossy().contains("homebrew") {
        "the runtime was installed through Homebrew, to update run `brew upgrade deno`"
    } else {
        "to update, run `deno upgrade`"
    };

    Err(VersionError::TooOld {
        found: found.clone(),
        required: required.clone(),
        hint: hint.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Version::new(1, 2, 3).to_string(), "1.2.3");
        assert_eq!(Version::default().to_string(), "0.0.0");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("1.2.3".parse::<Version>().unwrap(), Version::new(1, 2, 3));
        assert_eq!(
            "10.20.30".parse::<Version>().unwrap(),
            Version::new(10, 20, 30)
        );
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("1.2".parse::<Version>().is_err());
        assert!("1.2.3.4".parse::<Version>().is_err());
        assert!("a.b.c".parse::<Version>().is_err());
        assert!("".parse::<Version>().is_err());
    }

    #[test]
    fn test_ordering_is_numeric() {
        assert!(Version::new(1, 10, 0) > Version::new(1, 9, 9));
        assert!(Version::new(2, 0, 0) > Version::new(1, 99, 99));
        assert!(Version::new(1, 31, 1) > Version::new(1, 31, 0));
        assert_eq!(
            Version::new(1, 31, 0).cmp(&Version::new(1, 31, 0)),
            std::cmp::Ordering::Equal
        );
    }

    #[test]
    fn test_deserialize() {
        #[derive(Deserialize)]
        struct Config {
            version: Version,
        }
        let config: Config = toml::from_str(r#"version = "1.31.0""#).unwrap();
        assert_eq!(config.version, Version::new(1, 31, 0));
    }

    #[test]
    fn test_ensure_min_version_accepts_equal_and_newer() {
        let required = Version::new(1, 31, 0);
        let exe = Path::new("/usr/local/bin/deno");
        assert!(ensure_min_version(&Version::new(1, 31, 0), &required, exe).is_ok());
        assert!(ensure_min_version(&Version::new(2, 0, 0), &required, exe).is_ok());
    }

    #[test]
    fn test_ensure_min_version_hint_default_channel() {
        let err = ensure_min_version(
            &Version::new(1, 30, 3),
            &Version::new(1, 31, 0),
            Path::new("/home/user/.deno/bin/deno"),
        )
        .unwrap_err();

        match err {
            VersionError::TooOld {
                found,
                required,
                hint,
            } => {
                assert_eq!(found, Version::new(1, 30, 3));
                assert_eq!(required, Version::new(1, 31, 0));
                assert!(hint.contains("deno upgrade"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_ensure_min_version_hint_homebrew() {
        let err = ensure_min_version(
            &Version::new(1, 0, 0),
            &Version::new(1, 31, 0),
            Path::new("/opt/homebrew/bin/deno"),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            VersionError::TooOld { ref hint, .. } if hint.contains("brew upgrade deno")
        ));
    }
}
