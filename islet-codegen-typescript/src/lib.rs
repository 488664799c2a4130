//! TypeScript registry generator for islet.
//!
//! Renders a [`Manifest`](islet_manifest::Manifest) into `islet.gen.ts`, the
//! module a server imports to find every route handler and island component.
//!
//! ```ignore
//! use islet_codegen::Identity;
//! use islet_codegen_typescript::persist;
//! use islet_manifest::collect;
//!
//! let root = std::path::Path::new(".");
//! let manifest = collect(root)?;
//! let path = persist(root, &manifest, &Identity)?;
//! ```

mod code_file;
mod naming;
mod registry;

pub mod ast;

pub use code_file::CodeFile;
pub use naming::{ISLAND_BINDING_PREFIX, ROUTE_BINDING_PREFIX};
pub use registry::{
    GENERATED_HEADER, REGISTRY_FILENAME, RegistryEntry, RegistryTs, island_entries, persist,
    route_entries,
};
