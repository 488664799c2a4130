//! Recursive source file discovery with module name conflict detection.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::{DiscoveredFile, Error, Result};

/// Extensions of the source files picked up under `routes/` and `islands/`.
pub const SOURCE_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx"];

/// A directory to scan and the file extensions accepted inside it.
#[derive(Debug, Clone)]
pub struct ScanRoot<'a> {
    dir: PathBuf,
    extensions: &'a [&'a str],
}

impl<'a> ScanRoot<'a> {
    pub fn new(dir: impl Into<PathBuf>, extensions: &'a [&'a str]) -> Self {
        Self {
            dir: dir.into(),
            extensions,
        }
    }

    /// List every accepted file below the root, sorted by relative path.
    ///
    /// A missing root, or a root that is not a directory, yields no files.
    /// Two files sharing a logical name fail the scan with
    /// [`Error::LogicalNameConflict`].
    pub fn scan(&self) -> Result<Vec<DiscoveredFile>> {
        match fs::metadata(&self.dir) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => {
                debug!(dir = %self.dir.display(), "scan root is not a directory, skipping");
                return Ok(Vec::new());
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(dir = %self.dir.display(), "scan root does not exist, skipping");
                return Ok(Vec::new());
            }
            Err(e) => return Err(Error::io(&self.dir, e)),
        }

        let mut state = ScanState::default();
        self.walk(&self.dir, Path::new(""), &mut state)?;

        let mut files = state.files;
        files.sort();
        debug!(dir = %self.dir.display(), count = files.len(), "scanned");
        Ok(files)
    }

    fn walk(&self, dir: &Path, prefix: &Path, state: &mut ScanState) -> Result<()> {
        let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

        for entry in entries {
            let entry = entry.map_err(|e| Error::io(dir, e))?;
            let path = entry.path();
            let file_type = entry.file_type().map_err(|e| Error::io(&path, e))?;
            let relative = prefix.join(entry.file_name());

            if file_type.is_dir() {
                self.walk(&path, &relative, state)?;
                continue;
            }

            // Symlinked directories are not followed, dangling links are ignored.
            if file_type.is_symlink() {
                match fs::metadata(&path) {
                    Ok(meta) if meta.is_dir() => continue,
                    Ok(_) => {}
                    Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                    Err(e) => return Err(Error::io(&path, e)),
                }
            }

            if !self.accepts(&path) {
                continue;
            }

            let relative = module_path(&relative).ok_or_else(|| {
                Box::new(Error::InvalidFileName {
                    path: path.clone(),
                })
            })?;
            trace!(file = %relative, "discovered");
            state.insert(&self.dir, DiscoveredFile::new(relative))?;
        }

        Ok(())
    }

    fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.contains(&ext))
    }
}

/// Forward-slash form of a relative path, `None` if any component is not UTF-8.
fn module_path(relative: &Path) -> Option<String> {
    let parts = relative
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()?;
    Some(parts.join("/"))
}

#[derive(Default)]
struct ScanState {
    /// Logical name to the path that first claimed it.
    names: IndexMap<String, String>,
    files: Vec<DiscoveredFile>,
}

impl ScanState {
    fn insert(&mut self, root: &Path, file: DiscoveredFile) -> Result<()> {
        let name = file.logical_name().to_string();
        if let Some(existing) = self.names.get(&name) {
            let (first, second) = if existing.as_str() <= file.path() {
                (existing.clone(), file.path().to_string())
            } else {
                (file.path().to_string(), existing.clone())
            };
            return Err(Box::new(Error::LogicalNameConflict {
                dir: root.to_path_buf(),
                name,
                first,
                second,
            }));
        }

        self.names.insert(name, file.path().to_string());
        self.files.push(file);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "export default {};\n").unwrap();
    }

    fn paths(files: &[DiscoveredFile]) -> Vec<&str> {
        files.iter().map(|f| f.path()).collect()
    }

    #[test]
    fn test_missing_root_is_empty() {
        let temp = TempDir::new().unwrap();
        let root = ScanRoot::new(temp.path().join("routes"), SOURCE_EXTENSIONS);
        assert!(root.scan().unwrap().is_empty());
    }

    #[test]
    fn test_file_root_is_empty() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("routes"), "not a dir").unwrap();
        let root = ScanRoot::new(temp.path().join("routes"), SOURCE_EXTENSIONS);
        assert!(root.scan().unwrap().is_empty());
    }

    #[test]
    fn test_scan_sorted_and_filtered() {
        let temp = TempDir::new().unwrap();
        for file in [
            "index.tsx",
            "about.tsx",
            "api/joke.ts",
            "_app.tsx",
            "blog/[slug].jsx",
            "legacy.js",
            "README.md",
            "styles.css",
            "api/data.json",
        ] {
            touch(temp.path(), file);
        }

        let files = ScanRoot::new(temp.path(), SOURCE_EXTENSIONS).scan().unwrap();

        assert_eq!(
            paths(&files),
            vec![
                "_app.tsx",
                "about.tsx",
                "api/joke.ts",
                "blog/[slug].jsx",
                "index.tsx",
                "legacy.js",
            ]
        );
    }

    #[test]
    fn test_scan_is_byte_ordered() {
        let temp = TempDir::new().unwrap();
        for file in ["b.ts", "B.ts", "a.ts", "Z.ts"] {
            touch(temp.path(), file);
        }

        let files = ScanRoot::new(temp.path(), SOURCE_EXTENSIONS).scan().unwrap();

        assert_eq!(paths(&files), vec!["B.ts", "Z.ts", "a.ts", "b.ts"]);
    }

    #[test]
    fn test_scan_is_deterministic() {
        let temp = TempDir::new().unwrap();
        for file in ["z.ts", "m/n.tsx", "a.js", "m/a.ts", "k/l/m.jsx"] {
            touch(temp.path(), file);
        }

        let root = ScanRoot::new(temp.path(), SOURCE_EXTENSIONS);
        assert_eq!(root.scan().unwrap(), root.scan().unwrap());
    }

    #[test]
    fn test_directories_are_not_yielded() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("folder.ts")).unwrap();
        touch(temp.path(), "folder.ts/inner.ts");

        let files = ScanRoot::new(temp.path(), SOURCE_EXTENSIONS).scan().unwrap();

        assert_eq!(paths(&files), vec!["folder.ts/inner.ts"]);
    }

    #[test]
    fn test_conflict_detected() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "a/foo.ts");
        touch(temp.path(), "a/foo.tsx");

        let err = ScanRoot::new(temp.path(), SOURCE_EXTENSIONS)
            .scan()
            .unwrap_err();

        match *err {
            Error::LogicalNameConflict {
                dir,
                name,
                first,
                second,
            } => {
                assert_eq!(dir, temp.path());
                assert_eq!(name, "a/foo");
                assert_eq!(first, "a/foo.ts");
                assert_eq!(second, "a/foo.tsx");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_conflict_message_names_directory_and_module() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "a/foo.ts");
        touch(temp.path(), "a/foo.tsx");

        let err = ScanRoot::new(temp.path(), SOURCE_EXTENSIONS)
            .scan()
            .unwrap_err();
        let message = err.to_string();

        assert!(message.contains(&temp.path().display().to_string()));
        assert!(message.contains("'a/foo'"));
    }

    #[test]
    fn test_same_stem_in_different_directories_is_fine() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "index.tsx");
        touch(temp.path(), "blog/index.tsx");

        let files = ScanRoot::new(temp.path(), SOURCE_EXTENSIONS).scan().unwrap();

        assert_eq!(paths(&files), vec!["blog/index.tsx", "index.tsx"]);
    }

    #[test]
    fn test_custom_extensions() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "a.ts");
        touch(temp.path(), "b.mts");

        let files = ScanRoot::new(temp.path(), &["mts"]).scan().unwrap();

        assert_eq!(paths(&files), vec!["b.mts"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directories_are_not_followed() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "real/page.tsx");
        std::os::unix::fs::symlink(temp.path().join("real"), temp.path().join("link")).unwrap();

        let files = ScanRoot::new(temp.path(), SOURCE_EXTENSIONS).scan().unwrap();

        assert_eq!(paths(&files), vec!["real/page.tsx"]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_file_name_is_rejected() {
        use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

        let temp = TempDir::new().unwrap();
        touch(temp.path(), "caf\u{e9}.tsx");
        let latin1 = temp.path().join(OsStr::from_bytes(b"caf\xe9.tsx"));
        fs::write(&latin1, "").unwrap();

        let err = ScanRoot::new(temp.path(), SOURCE_EXTENSIONS)
            .scan()
            .unwrap_err();

        match *err {
            Error::InvalidFileName { path } => assert_eq!(path, latin1),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_names_outside_sources_are_ignored() {
        use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

        let temp = TempDir::new().unwrap();
        touch(temp.path(), "index.tsx");
        fs::write(temp.path().join(OsStr::from_bytes(b"notes\xff.md")), "").unwrap();

        let files = ScanRoot::new(temp.path(), SOURCE_EXTENSIONS).scan().unwrap();

        assert_eq!(paths(&files), vec!["index.tsx"]);
    }
}
