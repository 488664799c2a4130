use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for islet-manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to access '{}'", .path.display())]
    #[diagnostic(code(islet::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("multiple files in '{}' resolve to the module name '{name}'", .dir.display())]
    #[diagnostic(
        code(islet::conflict),
        help("'{first}' and '{second}' only differ by extension, rename one of them")
    )]
    LogicalNameConflict {
        dir: PathBuf,
        name: String,
        first: String,
        second: String,
    },

    #[error("'{}' is not valid UTF-8", .path.display())]
    #[diagnostic(
        code(islet::file_name),
        help("module paths are written into the registry as strings, rename the file")
    )]
    InvalidFileName { path: PathBuf },

    #[error("invalid manifest snapshot in ${key}")]
    #[diagnostic(
        code(islet::snapshot),
        help("unset {key} to start from an empty manifest")
    )]
    Snapshot {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse islet.toml")]
    #[diagnostic(code(islet::config_parse))]
    Config {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(islet::config_invalid))]
    InvalidConfig {
        #[source_code]
        src: NamedSource<String>,
        message: String,
    },
}

impl Error {
    /// Create an I/O error for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    /// Create a config parse error from a toml error with source context
    pub fn config(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Config {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a config validation error with source context
    pub fn invalid_config(message: impl Into<String>, src: &str, filename: &str) -> Box<Self> {
        Box::new(Error::InvalidConfig {
            src: NamedSource::new(filename, src.to_string()),
            message: message.into(),
        })
    }
}
