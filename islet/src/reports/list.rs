//! List command report data structures.

use islet_codegen_typescript::{RegistryEntry, island_entries, route_entries};
use islet_manifest::{DiscoveredFile, Manifest};

use super::output::{Output, Report};

/// One listed module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    /// Path relative to `routes/` or `islands/` without its extension.
    pub logical_name: String,
    /// Binding used in the registry module.
    pub binding: String,
    /// Import specifier relative to the registry.
    pub specifier: String,
}

/// Every route and island as the registry would import them.
#[derive(Debug, Default)]
pub struct ListReport {
    pub routes: Vec<ListEntry>,
    pub islands: Vec<ListEntry>,
}

impl ListReport {
    pub fn new(manifest: &Manifest) -> Self {
        Self {
            routes: entries(&manifest.routes, route_entries(manifest)),
            islands: entries(&manifest.islands, island_entries(manifest)),
        }
    }

    fn render_section(out: &mut dyn Output, name: &str, entries: &[ListEntry]) {
        if entries.is_empty() {
            out.preformatted(&format!("No {} found", name.to_lowercase()));
            return;
        }

        out.section(name);
        for entry in entries {
            out.list_item(&format!(
                "{} ({} as {})",
                entry.logical_name, entry.specifier, entry.binding
            ));
        }
    }
}

fn entries(files: &[DiscoveredFile], registry: Vec<RegistryEntry>) -> Vec<ListEntry> {
    files
        .iter()
        .zip(registry)
        .map(|(file, entry)| ListEntry {
            logical_name: file.logical_name().to_string(),
            binding: entry.binding,
            specifier: entry.specifier,
        })
        .collect()
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        Self::render_section(out, "Routes", &self.routes);
        out.newline();
        Self::render_section(out, "Islands", &self.islands);
    }
}
