//! CodeFile abstraction for structured TypeScript file generation.
//!
//! Provides a high-level API for generating TypeScript files with
//! a header comment, organized imports, body content, and exports.

use islet_codegen::{CodeBuilder, CodeFragment, Renderable};

use crate::ast::{Export, Import};

/// A structured representation of a TypeScript file.
///
/// Sections are rendered in order (header, imports, body, exports) with
/// one blank line between non-empty sections.
///
/// # Example
///
/// ```ignore
/// let file = CodeFile::new()
///     .header(["// generated"])
///     .imports([Import::new("./routes/index.tsx").namespace("$0")])
///     .add(Const::new("manifest", object))
///     .export(Export::new().default("manifest"))
///     .render();
/// ```
#[derive(Default)]
pub struct CodeFile {
    header: Vec<String>,
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
    exports: Vec<Export>,
}

impl CodeFile {
    /// Create a new empty CodeFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the comment lines placed at the very top of the file.
    pub fn header(mut self, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.header = lines.into_iter().map(Into::into).collect();
        self
    }

    /// Add imports from an iterator.
    pub fn imports(mut self, imports: impl IntoIterator<Item = Import>) -> Self {
        self.imports.extend(imports);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add an export statement.
    pub fn export(mut self, export: Export) -> Self {
        self.exports.push(export);
        self
    }

    /// Render the file with TypeScript indentation (2 spaces).
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        let mut section_open = false;

        let mut start_section = |builder: &mut CodeBuilder| {
            if section_open {
                builder.push_blank();
            }
            section_open = true;
        };

        if !self.header.is_empty() {
            start_section(&mut builder);
            for line in &self.header {
                builder.push_line(line);
            }
        }

        if !self.imports.is_empty() {
            start_section(&mut builder);
            for import in &self.imports {
                builder.emit(import);
            }
        }

        // Body elements are separated by blank lines
        for fragments in &self.body {
            start_section(&mut builder);
            for fragment in fragments {
                builder.write_fragment(fragment);
            }
        }

        if !self.exports.is_empty() {
            start_section(&mut builder);
            for export in &self.exports {
                builder.emit(export);
            }
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Const, JsObject};

    #[test]
    fn test_empty_file() {
        assert_eq!(CodeFile::new().render(), "");
    }

    #[test]
    fn test_imports_only() {
        let file = CodeFile::new().imports([Import::new("./routes/index.tsx").namespace("$0")]);
        assert_eq!(file.render(), "import * as $0 from \"./routes/index.tsx\";\n");
    }

    #[test]
    fn test_full_file() {
        let file = CodeFile::new()
            .header(["// header"])
            .imports([Import::new("./a.ts").namespace("$0")])
            .add(Const::new("manifest", JsObject::new().raw("a", "$0")))
            .export(Export::new().default("manifest"));

        assert_eq!(
            file.render(),
            concat!(
                "// header\n\n",
                "import * as $0 from \"./a.ts\";\n\n",
                "const manifest = {\n  a: $0,\n};\n\n",
                "export default manifest;\n",
            )
        );
    }

    #[test]
    fn test_blank_lines_between_body() {
        let file = CodeFile::new()
            .add(Const::new("a", JsObject::new()))
            .add(Const::new("b", JsObject::new()));

        assert_eq!(file.render(), "const a = {};\n\nconst b = {};\n");
    }
}
