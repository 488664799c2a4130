//! Check command report data structures.

use std::path::PathBuf;

use super::{
    output::{Output, Report},
    plural,
};

/// Report data from a collect-only run.
#[derive(Debug)]
pub struct CheckReport {
    /// `islet.toml`, when the project has one.
    pub config_path: Option<PathBuf>,
    pub routes: usize,
    pub islands: usize,
    /// Neither `routes/` nor `islands/` contributed a module.
    pub empty: bool,
    /// Where the registry is expected.
    pub registry: PathBuf,
    pub registry_present: bool,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        if !self.registry_present {
            out.warning(&format!(
                "{} does not exist yet, run `islet manifest` to create it",
                self.registry.display()
            ));
            out.newline();
        }
        if self.empty {
            out.warning("no routes or islands found, the registry will be empty");
            out.newline();
        }

        out.preformatted("✓ no conflicting module names");
        out.newline();
        if let Some(config) = &self.config_path {
            out.key_value("  config", &config.display().to_string());
        }
        out.key_value("  routes", &plural(self.routes, "module", "modules"));
        out.key_value("  islands", &plural(self.islands, "module", "modules"));
    }
}
