//! Dev and build cycle report.

use std::path::PathBuf;

use super::{
    output::{Output, Report},
    plural,
};
use crate::ops::Prepared;

/// What a regeneration cycle did before handing off.
#[derive(Debug)]
pub struct DevReport {
    pub routes: usize,
    pub islands: usize,
    pub regenerated: bool,
    pub registry: PathBuf,
}

impl From<&Prepared> for DevReport {
    fn from(prepared: &Prepared) -> Self {
        Self {
            routes: prepared.manifest.routes.len(),
            islands: prepared.manifest.islands.len(),
            regenerated: prepared.regenerated,
            registry: prepared.registry.clone(),
        }
    }
}

impl Report for DevReport {
    fn render(&self, out: &mut dyn Output) {
        if self.regenerated {
            out.preformatted(&format!(
                "The manifest has been generated for {} and {}.",
                plural(self.routes, "route", "routes"),
                plural(self.islands, "island", "islands"),
            ));
        } else {
            out.preformatted(&format!(
                "The manifest is up to date ({}).",
                self.registry.display()
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::render_to_lines;

    #[test]
    fn test_regenerated_message() {
        let report = DevReport {
            routes: 2,
            islands: 1,
            regenerated: true,
            registry: PathBuf::from("/app/islet.gen.ts"),
        };

        assert_eq!(
            render_to_lines(&report),
            vec!["The manifest has been generated for 2 routes and 1 island."]
        );
    }

    #[test]
    fn test_unchanged_message() {
        let report = DevReport {
            routes: 0,
            islands: 0,
            regenerated: false,
            registry: PathBuf::from("/app/islet.gen.ts"),
        };

        assert_eq!(
            render_to_lines(&report),
            vec!["The manifest is up to date (/app/islet.gen.ts)."]
        );
    }
}
