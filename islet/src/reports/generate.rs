//! Manifest command report data structures.

use std::path::PathBuf;

use super::{
    output::{Output, Report},
    plural,
};

/// Report data from an unconditional regeneration.
#[derive(Debug)]
pub struct GenerateReport {
    pub routes: usize,
    pub islands: usize,
    pub result: GenerationResult,
}

/// Where the registry went.
#[derive(Debug)]
pub enum GenerationResult {
    /// Written to disk at this path.
    Written(PathBuf),
    /// Dry-run preview of the formatted registry.
    Preview { path: PathBuf, content: String },
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        let counts = format!(
            "{} and {}",
            plural(self.routes, "route", "routes"),
            plural(self.islands, "island", "islands"),
        );

        match &self.result {
            GenerationResult::Written(path) => {
                out.preformatted(&format!("The manifest has been generated for {}.", counts));
                out.key_value("Generated", &path.display().to_string());
            }
            GenerationResult::Preview { path, content } => {
                out.divider(&path.display().to_string());
                out.preformatted(content.trim_end());
                out.divider("Summary");
                out.preformatted(&format!("The manifest would be generated for {}.", counts));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::render_to_lines;

    #[test]
    fn test_render_preview() {
        let report = GenerateReport {
            routes: 1,
            islands: 2,
            result: GenerationResult::Preview {
                path: PathBuf::from("islet.gen.ts"),
                content: "export default manifest;\n".to_string(),
            },
        };

        assert_eq!(
            render_to_lines(&report),
            vec![
                "── islet.gen.ts ──",
                "export default manifest;",
                "── Summary ──",
                "The manifest would be generated for 1 route and 2 islands.",
            ]
        );
    }
}
