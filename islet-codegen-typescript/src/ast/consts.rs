//! TypeScript const declaration builder.

use islet_codegen::{CodeFragment, Renderable};

use super::JsObject;

/// A `const` declaration initialized with an object literal.
#[derive(Debug, Clone)]
pub struct Const {
    name: String,
    value: JsObject,
}

impl Const {
    pub fn new(name: impl Into<String>, value: JsObject) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl Renderable for Const {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.value.is_empty() {
            return vec![CodeFragment::Line(format!("const {} = {{}};", self.name))];
        }

        vec![CodeFragment::Block {
            header: format!("const {} = {{", self.name),
            body: self.value.property_fragments(),
            close: Some("};".to_string()),
        }]
    }
}
