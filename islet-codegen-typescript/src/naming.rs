//! Binding names used in the generated registry.

/// Route modules are bound as `$0`, `$1`, ...
pub const ROUTE_BINDING_PREFIX: &str = "$";

/// Island modules are bound as `$$0`, `$$1`, ...
pub const ISLAND_BINDING_PREFIX: &str = "$$";

/// Binding for the module at `index` within its directory.
pub(crate) fn binding(prefix: &str, index: usize) -> String {
    format!("{}{}", prefix, index)
}

/// Quote a string as a JavaScript string literal.
pub(crate) fn string_literal(s: &str) -> String {
    // JSON string syntax is valid JS string syntax.
    serde_json::Value::from(s).to_string()
}
