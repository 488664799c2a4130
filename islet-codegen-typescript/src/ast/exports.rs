//! TypeScript export builder.

use islet_codegen::{CodeFragment, Renderable};

/// An `export default` statement; renders nothing without a name.
#[derive(Debug, Clone, Default)]
pub struct Export {
    default: Option<String>,
}

impl Export {
    pub fn new() -> Self {
        Self { default: None }
    }

    /// Export as default.
    pub fn default(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }
}

impl Renderable for Export {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.default
            .iter()
            .map(|def| CodeFragment::Line(format!("export default {};", def)))
            .collect()
    }
}
