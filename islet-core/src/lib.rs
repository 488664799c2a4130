//! Core utilities and types for the islet manifest builder.
//!
//! This crate provides fundamental types shared across the islet
//! workspace: generated file handling, path normalization, and the
//! host runtime version gate.

mod file;
mod paths;
mod runtime;
mod version;

// File operations
pub use file::{File, GeneratedFile};
// Path utilities
pub use paths::{to_forward_slashes, to_import_specifier};
// Runtime version gate
pub use runtime::{MIN_RUNTIME_VERSION, RuntimeInfo, probe_runtime};
pub use version::{Version, VersionError, ensure_min_version};
