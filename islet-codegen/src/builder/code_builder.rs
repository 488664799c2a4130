//! Indentation-aware text buffer.

use super::{CodeFragment, Renderable};

/// One indentation level, what `deno fmt` and prettier produce.
const INDENT: &str = "  ";

/// Accumulates generated code, tracking the current indentation depth.
///
/// ```
/// use islet_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::typescript();
/// builder
///     .push_line("const manifest = {")
///     .push_indent()
///     .push_line("baseUrl: import.meta.url,")
///     .push_dedent()
///     .push_line("};");
///
/// assert_eq!(builder.build(), "const manifest = {\n  baseUrl: import.meta.url,\n};\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    depth: usize,
    out: String,
}

impl CodeBuilder {
    pub fn typescript() -> Self {
        Self::default()
    }

    pub fn push_line(&mut self, s: &str) -> &mut Self {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
        self.out.push_str(s);
        self.out.push('\n');
        self
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.out.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    /// Dedenting at depth zero is a no-op.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    /// Write every fragment of `node`.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.write_fragment(&fragment);
        }
        self
    }

    pub fn write_fragment(&mut self, fragment: &CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(s);
            }
            CodeFragment::Raw(s) => self.out.push_str(s),
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(header).push_indent();
                for inner in body {
                    self.write_fragment(inner);
                }
                self.push_dedent();
                if let Some(close) = close {
                    self.push_line(close);
                }
            }
        }
    }

    pub fn build(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Routes;

    impl Renderable for Routes {
        fn to_fragments(&self) -> Vec<CodeFragment> {
            vec![CodeFragment::Block {
                header: "routes: {".to_string(),
                body: vec![CodeFragment::Line("\"./routes/a.ts\": $0,".to_string())],
                close: Some("},".to_string()),
            }]
        }
    }

    #[test]
    fn test_nested_indentation() {
        let mut builder = CodeBuilder::typescript();
        builder
            .push_line("if (ok) {")
            .push_indent()
            .push_line("run();")
            .push_dedent()
            .push_line("}");

        assert_eq!(builder.build(), "if (ok) {\n  run();\n}\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::typescript();
        builder.push_dedent().push_line("x;");
        assert_eq!(builder.build(), "x;\n");
    }

    #[test]
    fn test_blank_line_has_no_indent() {
        let mut builder = CodeBuilder::typescript();
        builder
            .push_indent()
            .push_line("a;")
            .push_blank()
            .push_line("b;");

        assert_eq!(builder.build(), "  a;\n\n  b;\n");
    }

    #[test]
    fn test_emit_block() {
        let mut builder = CodeBuilder::typescript();
        builder.emit(&Routes);
        assert_eq!(builder.build(), "routes: {\n  \"./routes/a.ts\": $0,\n},\n");
    }

    #[test]
    fn test_block_without_close() {
        let mut builder = CodeBuilder::typescript();
        builder.write_fragment(&CodeFragment::Block {
            header: "// section".to_string(),
            body: vec![CodeFragment::Raw("x".to_string())],
            close: None,
        });
        assert_eq!(builder.build(), "// section\nx");
    }
}
