//! TypeScript import builder.

use islet_codegen::{CodeFragment, Renderable};

use crate::naming::string_literal;

/// An `import` statement, either side-effect only or binding the whole module.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    namespace: Option<String>,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            namespace: None,
        }
    }

    /// Import the whole module under one binding (`import * as name`).
    pub fn namespace(mut self, name: impl Into<String>) -> Self {
        self.namespace = Some(name.into());
        self
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let from = string_literal(&self.from);
        let statement = match &self.namespace {
            Some(ns) => format!("import * as {} from {};", ns, from),
            None => format!("import {};", from),
        };
        vec![CodeFragment::Line(statement)]
    }
}
