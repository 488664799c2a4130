//! Generate operation - unconditional registry regeneration.

use std::path::Path;

use eyre::{Result, WrapErr};
use islet_codegen::TextCanonicalizer;
use islet_codegen_typescript::{RegistryTs, persist};
use islet_core::GeneratedFile;
use islet_manifest::collect;

use crate::reports::{GenerateReport, GenerationResult};

/// Options for the generate operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Render and format without writing.
    pub dry_run: bool,
}

/// Collect and write the registry, ignoring any manifest snapshot.
pub fn generate(
    project_root: &Path,
    canonicalizer: &dyn TextCanonicalizer,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let manifest = collect(project_root)?;
    let registry = RegistryTs::new(&manifest);
    let path = registry.path(project_root);

    let result = if opts.dry_run {
        let content = canonicalizer
            .canonicalize(&registry.render())
            .wrap_err("failed to format the generated registry")?;
        GenerationResult::Preview { path, content }
    } else {
        GenerationResult::Written(persist(project_root, &manifest, canonicalizer)?)
    };

    Ok(GenerateReport {
        routes: manifest.routes.len(),
        islands: manifest.islands.len(),
        result,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use islet_codegen::Identity;
    use tempfile::TempDir;

    use super::*;

    fn project() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("routes")).unwrap();
        fs::write(temp.path().join("routes/index.tsx"), "").unwrap();
        temp
    }

    #[test]
    fn test_generate_writes_registry() {
        let temp = project();

        let report = generate(temp.path(), &Identity, GenerateOptions::default()).unwrap();

        let path = temp.path().join("islet.gen.ts");
        assert!(matches!(&report.result, GenerationResult::Written(p) if *p == path));
        assert!(
            fs::read_to_string(path)
                .unwrap()
                .contains("import * as $0 from \"./routes/index.tsx\";")
        );
        assert_eq!(report.routes, 1);
    }

    #[test]
    fn test_generate_overwrites_existing_registry() {
        let temp = project();
        fs::write(temp.path().join("islet.gen.ts"), "stale").unwrap();

        generate(temp.path(), &Identity, GenerateOptions::default()).unwrap();

        let content = fs::read_to_string(temp.path().join("islet.gen.ts")).unwrap();
        assert!(content.starts_with("// DO NOT EDIT."));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = project();

        let report = generate(temp.path(), &Identity, GenerateOptions { dry_run: true }).unwrap();

        assert!(!temp.path().join("islet.gen.ts").exists());
        match report.result {
            GenerationResult::Preview { content, .. } => {
                assert!(content.contains("export default manifest;"))
            }
            GenerationResult::Written(_) => panic!("dry run wrote the registry"),
        }
    }
}
