//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - indentation-aware buffer
//! - [`CodeFragment`] - intermediate representation for code pieces
//! - [`Renderable`] - trait for AST nodes that lower to fragments

mod code_builder;
mod renderable;

pub use code_builder::CodeBuilder;
pub use renderable::{CodeFragment, Renderable};
