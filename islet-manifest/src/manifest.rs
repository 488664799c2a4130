//! The in-memory route and island inventory.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A source file found under a scan root.
///
/// The path is relative to the root, uses forward slashes and has no leading
/// separator (`blog/[slug].tsx`). Serializes as the bare path string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct DiscoveredFile {
    path: String,
}

impl DiscoveredFile {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Path relative to the scan root.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The path with its final extension removed (`blog/[slug].tsx` -> `blog/[slug]`).
    pub fn logical_name(&self) -> &str {
        match self.path.rfind('.') {
            Some(dot) => &self.path[..dot],
            None => &self.path,
        }
    }
}

impl From<String> for DiscoveredFile {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl From<DiscoveredFile> for String {
    fn from(file: DiscoveredFile) -> Self {
        file.path
    }
}

/// Routes and islands of a project, each sorted by path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// URL-addressable handlers found under `routes/`.
    pub routes: Vec<DiscoveredFile>,
    /// Client-hydratable components found under `islands/`.
    pub islands: Vec<DiscoveredFile>,
}

impl Manifest {
    /// The manifest of a project with no routes and no islands.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the project has neither routes nor islands.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty() && self.islands.is_empty()
    }

    /// Whether regeneration is needed relative to `previous`.
    ///
    /// Compares both sequences element by element, so added, removed,
    /// renamed and reordered entries all count as a change.
    pub fn differs_from(&self, previous: &Manifest) -> bool {
        self.routes != previous.routes || self.islands != previous.islands
    }

    /// Serialize to the JSON form kept in the snapshot slot.
    pub fn to_json(&self) -> String {
        // Only strings and sequences, serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Parse a snapshot previously produced by [`Manifest::to_json`].
    pub fn from_json(json: &str, key: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|source| {
            Box::new(Error::Snapshot {
                key: key.to_string(),
                source,
            })
        })
    }
}
