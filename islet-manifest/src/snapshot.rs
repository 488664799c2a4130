//! Last-known manifest storage across dev restarts.

use tracing::debug;

use crate::{Manifest, Result};

/// Environment key holding the JSON manifest of the previous dev cycle.
pub const SNAPSHOT_ENV_KEY: &str = "ISLET_DEV_PREVIOUS_MANIFEST";

/// Where the coordinator remembers the manifest it generated last.
///
/// Read once at the start of a cycle and written once after collection.
pub trait SnapshotStore {
    /// The previous manifest, if any cycle has stored one.
    fn load(&self) -> Result<Option<Manifest>>;

    /// Replace the stored manifest.
    fn store(&mut self, manifest: &Manifest) -> Result<()>;

    /// Environment variables that carry the snapshot into child processes.
    fn child_env(&self) -> Vec<(String, String)> {
        Vec::new()
    }
}

/// Snapshot kept in the `ISLET_DEV_PREVIOUS_MANIFEST` environment slot.
///
/// The slot is seeded from the process environment once. `islet dev` keeps a
/// single store for its whole session, so every cycle reads what the
/// previous one stored. The process environment itself is never written;
/// children receive the slot through [`SnapshotStore::child_env`].
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    value: Option<String>,
}

impl EnvSnapshot {
    /// Read the slot from the current process environment.
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(SNAPSHOT_ENV_KEY).ok())
    }

    /// Build a store from an explicit slot value. Empty values count as absent.
    pub fn from_value(value: Option<String>) -> Self {
        Self {
            value: value.filter(|v| !v.is_empty()),
        }
    }

}

impl SnapshotStore for EnvSnapshot {
    fn load(&self) -> Result<Option<Manifest>> {
        self.value
            .as_deref()
            .map(|json| Manifest::from_json(json, SNAPSHOT_ENV_KEY))
            .transpose()
    }

    fn store(&mut self, manifest: &Manifest) -> Result<()> {
        debug!(
            routes = manifest.routes.len(),
            islands = manifest.islands.len(),
            "storing manifest snapshot"
        );
        self.value = Some(manifest.to_json());
        Ok(())
    }

    fn child_env(&self) -> Vec<(String, String)> {
        self.value
            .iter()
            .map(|v| (SNAPSHOT_ENV_KEY.to_string(), v.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DiscoveredFile, Error};

    fn sample() -> Manifest {
        Manifest {
            routes: vec![DiscoveredFile::new("index.tsx")],
            islands: vec![DiscoveredFile::new("Counter.tsx")],
        }
    }

    #[test]
    fn test_env_snapshot_absent() {
        let store = EnvSnapshot::from_value(None);
        assert!(store.load().unwrap().is_none());
        assert!(store.child_env().is_empty());
    }

    #[test]
    fn test_env_snapshot_empty_value_is_absent() {
        let store = EnvSnapshot::from_value(Some(String::new()));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_env_snapshot_store_then_load() {
        let mut store = EnvSnapshot::default();
        store.store(&sample()).unwrap();

        assert_eq!(store.load().unwrap(), Some(sample()));
        assert_eq!(
            store.child_env(),
            vec![(
                SNAPSHOT_ENV_KEY.to_string(),
                r#"{"routes":["index.tsx"],"islands":["Counter.tsx"]}"#.to_string()
            )]
        );
    }

    #[test]
    fn test_env_snapshot_invalid_json() {
        let store = EnvSnapshot::from_value(Some("[1, 2".to_string()));
        let err = store.load().unwrap_err();
        assert!(matches!(*err, Error::Snapshot { .. }));
    }
}
