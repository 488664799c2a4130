//! The `islet.gen.ts` registry module.

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use islet_codegen::TextCanonicalizer;
use islet_core::{File, GeneratedFile, to_import_specifier};
use islet_manifest::{DiscoveredFile, ISLANDS_DIR, Manifest, ROUTES_DIR};
use tracing::info;

use crate::{
    CodeFile,
    ast::{Const, Export, Import, JsObject},
    naming::{ISLAND_BINDING_PREFIX, ROUTE_BINDING_PREFIX, binding},
};

/// Name of the generated registry, relative to the project root.
pub const REGISTRY_FILENAME: &str = "islet.gen.ts";

/// Comment block opening every generated registry.
pub const GENERATED_HEADER: [&str; 3] = [
    "// DO NOT EDIT. This file is generated by islet.",
    "// This file SHOULD be checked into source version control.",
    "// This file is automatically updated during development when running `islet dev`.",
];

/// One imported module of the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    /// Local binding, e.g. `$0` or `$$0`.
    pub binding: String,
    /// Import specifier relative to the registry, e.g. `./routes/index.tsx`.
    pub specifier: String,
}

/// Entries for every route, in manifest order.
pub fn route_entries(manifest: &Manifest) -> Vec<RegistryEntry> {
    entries(ROUTES_DIR, ROUTE_BINDING_PREFIX, &manifest.routes)
}

/// Entries for every island, in manifest order.
pub fn island_entries(manifest: &Manifest) -> Vec<RegistryEntry> {
    entries(ISLANDS_DIR, ISLAND_BINDING_PREFIX, &manifest.islands)
}

fn entries(dir: &str, prefix: &str, files: &[DiscoveredFile]) -> Vec<RegistryEntry> {
    files
        .iter()
        .enumerate()
        .map(|(i, file)| RegistryEntry {
            binding: binding(prefix, i),
            specifier: to_import_specifier(&format!("{}/{}", dir, file.path())),
        })
        .collect()
}

/// Registry module for a manifest.
pub struct RegistryTs<'a> {
    manifest: &'a Manifest,
}

impl<'a> RegistryTs<'a> {
    pub fn new(manifest: &'a Manifest) -> Self {
        Self { manifest }
    }

    fn registry_object(entries: &[RegistryEntry]) -> JsObject {
        entries.iter().fold(JsObject::new(), |obj, entry| {
            obj.quoted_key(&entry.specifier, entry.binding.as_str())
        })
    }
}

impl GeneratedFile for RegistryTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(REGISTRY_FILENAME)
    }

    /// Render the registry before canonical formatting.
    fn render(&self) -> String {
        let routes = route_entries(self.manifest);
        let islands = island_entries(self.manifest);

        let imports = routes
            .iter()
            .chain(&islands)
            .map(|entry| Import::new(&entry.specifier).namespace(&entry.binding));

        let manifest = JsObject::new()
            .object("routes", Self::registry_object(&routes))
            .object("islands", Self::registry_object(&islands))
            .raw("baseUrl", "import.meta.url");

        CodeFile::new()
            .header(GENERATED_HEADER)
            .imports(imports)
            .add(Const::new("manifest", manifest))
            .export(Export::new().default("manifest"))
            .render()
    }
}

/// Render, canonicalize and write the registry for `manifest` into `project_root`.
///
/// Nothing is written when the canonicalizer fails.
pub fn persist(
    project_root: &Path,
    manifest: &Manifest,
    canonicalizer: &dyn TextCanonicalizer,
) -> Result<PathBuf> {
    let registry = RegistryTs::new(manifest);
    let path = registry.path(project_root);

    let canonical = canonicalizer
        .canonicalize(&registry.render())
        .wrap_err("failed to format the generated registry")?;

    File::new(&path, canonical).write()?;

    info!(
        path = %path.display(),
        routes = manifest.routes.len(),
        islands = manifest.islands.len(),
        "registry generated"
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(routes: &[&str], islands: &[&str]) -> Manifest {
        Manifest {
            routes: routes.iter().map(|p| DiscoveredFile::new(*p)).collect(),
            islands: islands.iter().map(|p| DiscoveredFile::new(*p)).collect(),
        }
    }

    #[test]
    fn test_entries() {
        let m = manifest(&["about.tsx", "index.tsx"], &["Counter.tsx"]);

        assert_eq!(
            route_entries(&m),
            vec![
                RegistryEntry {
                    binding: "$0".into(),
                    specifier: "./routes/about.tsx".into(),
                },
                RegistryEntry {
                    binding: "$1".into(),
                    specifier: "./routes/index.tsx".into(),
                },
            ]
        );
        assert_eq!(
            island_entries(&m),
            vec![RegistryEntry {
                binding: "$$0".into(),
                specifier: "./islands/Counter.tsx".into(),
            }]
        );
    }

    #[test]
    fn test_host_separators_are_normalized() {
        let m = manifest(&["api\\v1\\joke.ts"], &["nested\\deep\\Widget.tsx"]);

        assert_eq!(route_entries(&m)[0].specifier, "./routes/api/v1/joke.ts");
        assert_eq!(
            island_entries(&m)[0].specifier,
            "./islands/nested/deep/Widget.tsx"
        );
        assert!(!RegistryTs::new(&m).render().contains('\\'));
    }

    #[test]
    fn test_path() {
        let m = Manifest::empty();
        assert_eq!(
            RegistryTs::new(&m).path(Path::new("/project")),
            PathBuf::from("/project/islet.gen.ts")
        );
    }
}
