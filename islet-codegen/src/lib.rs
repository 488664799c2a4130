//! Shared code generation utilities for islet.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`canonicalize`] - Canonical formatting of generated source text

pub mod builder;
pub mod canonicalize;

pub use builder::{CodeBuilder, CodeFragment, Renderable};
pub use canonicalize::{ExternalFormatter, FormatError, Identity, TextCanonicalizer};
