//! Route and island discovery for islet projects.
//!
//! This crate scans a project's `routes/` and `islands/` directories into a
//! [`Manifest`], remembers the previous manifest across dev restarts through a
//! [`SnapshotStore`], and parses the optional `islet.toml` configuration.
//!
//! # Example
//!
//! ```ignore
//! use islet_manifest::collect;
//!
//! let manifest = collect(std::path::Path::new("."))?;
//! for route in &manifest.routes {
//!     println!("{} -> {}", route.path(), route.logical_name());
//! }
//! ```

mod collect;
mod config;
mod error;
mod manifest;
mod scan;
mod snapshot;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use collect::{ISLANDS_DIR, ROUTES_DIR, collect};
pub use config::{
    BuildConfig, CONFIG_FILENAME, Config, ConfigFile, DevConfig, FormatterConfig, RuntimeConfig,
};
pub use error::{Error, Result};
pub use manifest::{DiscoveredFile, Manifest};
pub use scan::{SOURCE_EXTENSIONS, ScanRoot};
pub use snapshot::{EnvSnapshot, SNAPSHOT_ENV_KEY, SnapshotStore};
