//! TypeScript AST builders for the statements found in generated modules.
//!
//! Each builder implements [`Renderable`](islet_codegen::Renderable) so it can
//! be emitted through a [`CodeBuilder`](islet_codegen::CodeBuilder).

mod consts;
mod exports;
mod imports;
mod objects;

pub use consts::Const;
pub use exports::Export;
pub use imports::Import;
pub use objects::JsObject;
