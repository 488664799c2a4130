//! Path normalization for generated import specifiers.

/// Replace host path separators with forward slashes.
pub fn to_forward_slashes(path: &str) -> String {
    path.replace('\\', "/")
}

/// Turn a project-relative path into a relative import specifier.
///
/// Separators are normalized to `/` and `./` is prepended unless the
/// path already starts with `./` or `../`.
pub fn to_import_specifier(path: &str) -> String {
    let normalized = to_forward_slashes(path);
    if normalized.starts_with("./") || normalized.starts_with("../") {
        normalized
    } else {
        format!("./{}", normalized.trim_start_matches('/'))
    }
}
