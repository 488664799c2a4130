//! Core operations.
//!
//! This module contains the business logic for islet commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod dev;
pub mod generate;
pub mod handoff;
pub mod runtime;
pub mod watch;

pub use check::check;
pub use dev::{Coordinator, Mode, Prepared};
pub use generate::{GenerateOptions, generate};
pub use handoff::{BuildOptions, CommandBuild, RuntimeEntrypoint, resolve_entrypoint};
pub use runtime::ensure_runtime;
pub use watch::{ChangeSource, DirWatcher};
