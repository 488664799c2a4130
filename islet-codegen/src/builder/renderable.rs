//! Renderable nodes and the fragments they lower to.

/// A piece of generated code, before indentation is applied.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A line, indented and newline-terminated.
    Line(String),
    /// Text written as-is.
    Raw(String),
    /// `header`, then `body` one level deeper, then `close` if any.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
}

/// An AST node that knows which fragments it produces.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (**self).to_fragments()
    }
}
