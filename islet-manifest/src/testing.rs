//! Test doubles for crates built on islet-manifest.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use crate::{Manifest, Result, SnapshotStore};

/// In-process snapshot that counts its writes.
#[derive(Debug, Clone, Default)]
pub struct MemorySnapshot {
    manifest: Option<Manifest>,
    writes: usize,
}

impl MemorySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already known manifest.
    pub fn with_manifest(manifest: Manifest) -> Self {
        Self {
            manifest: Some(manifest),
            writes: 0,
        }
    }

    /// Number of times [`SnapshotStore::store`] was called.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl SnapshotStore for MemorySnapshot {
    fn load(&self) -> Result<Option<Manifest>> {
        Ok(self.manifest.clone())
    }

    fn store(&mut self, manifest: &Manifest) -> Result<()> {
        self.manifest = Some(manifest.clone());
        self.writes += 1;
        Ok(())
    }
}
