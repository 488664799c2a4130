//! Check operation - collect without generating.

use std::path::Path;

use islet_codegen_typescript::RegistryTs;
use islet_core::GeneratedFile;
use islet_manifest::{ConfigFile, Result, collect};

use crate::reports::CheckReport;

/// Collect the project's manifest and look for the registry.
///
/// A naming conflict or unreadable directory is returned as the error; the
/// report only describes a project that collected cleanly.
pub fn check(project_root: &Path, config: &ConfigFile) -> Result<CheckReport> {
    let manifest = collect(project_root)?;
    let registry = RegistryTs::new(&manifest).path(project_root);

    Ok(CheckReport {
        config_path: config.exists().then(|| config.path().to_path_buf()),
        routes: manifest.routes.len(),
        islands: manifest.islands.len(),
        empty: manifest.is_empty(),
        registry_present: registry.is_file(),
        registry,
    })
}
