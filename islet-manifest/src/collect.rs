//! Manifest collection over a project's `routes/` and `islands/` directories.

use std::{path::Path, thread};

use tracing::info_span;

use crate::{Manifest, Result, SOURCE_EXTENSIONS, ScanRoot};

/// Directory holding URL-addressable route modules.
pub const ROUTES_DIR: &str = "routes";

/// Directory holding client-hydratable island components.
pub const ISLANDS_DIR: &str = "islands";

/// Scan `routes/` and `islands/` under `project_root` into a [`Manifest`].
///
/// Both directories are scanned concurrently. Module names only have to be
/// unique within one directory; a route and an island may share a name.
pub fn collect(project_root: &Path) -> Result<Manifest> {
    let _span = info_span!("collect", root = %project_root.display()).entered();

    let routes_root = ScanRoot::new(project_root.join(ROUTES_DIR), SOURCE_EXTENSIONS);
    let islands_root = ScanRoot::new(project_root.join(ISLANDS_DIR), SOURCE_EXTENSIONS);

    let (routes, islands) = thread::scope(|s| {
        let routes = s.spawn(|| routes_root.scan());
        let islands = s.spawn(|| islands_root.scan());
        (join(routes), join(islands))
    });

    Ok(Manifest {
        routes: routes?,
        islands: islands?,
    })
}

fn join<T>(handle: thread::ScopedJoinHandle<'_, T>) -> T {
    handle
        .join()
        .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::Error;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_collect_empty_project() {
        let temp = TempDir::new().unwrap();
        let manifest = collect(temp.path()).unwrap();
        assert!(manifest.is_empty());
    }

    #[test]
    fn test_collect_routes_and_islands() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "routes/index.tsx");
        touch(temp.path(), "routes/about.tsx");
        touch(temp.path(), "islands/Counter.tsx");
        touch(temp.path(), "static/logo.svg");

        let manifest = collect(temp.path()).unwrap();

        let routes: Vec<_> = manifest.routes.iter().map(|f| f.path()).collect();
        let islands: Vec<_> = manifest.islands.iter().map(|f| f.path()).collect();
        assert_eq!(routes, vec!["about.tsx", "index.tsx"]);
        assert_eq!(islands, vec!["Counter.tsx"]);
    }

    #[test]
    fn test_cross_directory_names_are_independent() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "routes/Counter.tsx");
        touch(temp.path(), "islands/Counter.ts");

        let manifest = collect(temp.path()).unwrap();

        assert_eq!(manifest.routes.len(), 1);
        assert_eq!(manifest.islands.len(), 1);
    }

    #[test]
    fn test_conflict_in_islands_propagates() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "routes/index.tsx");
        touch(temp.path(), "islands/Counter.ts");
        touch(temp.path(), "islands/Counter.tsx");

        let err = collect(temp.path()).unwrap_err();

        match *err {
            Error::LogicalNameConflict { dir, name, .. } => {
                assert_eq!(dir, temp.path().join(ISLANDS_DIR));
                assert_eq!(name, "Counter");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
