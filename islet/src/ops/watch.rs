//! Change notifications for `islet dev`.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::mpsc::{self, Receiver},
    time::Duration,
};

use eyre::{Result, WrapErr};
use islet_manifest::{ISLANDS_DIR, ROUTES_DIR};
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{debug, trace};

/// Quiet period that ends a burst of events.
const DEBOUNCE: Duration = Duration::from_millis(100);

/// Tells the dev supervisor when to run the next cycle.
pub trait ChangeSource {
    /// Block until something relevant changed. `Ok(false)` ends the session.
    fn wait(&mut self) -> Result<bool>;
}

/// Watches `routes/` and `islands/` below a project root.
///
/// The root itself is watched non-recursively so that either directory can
/// be created or removed while the session runs.
pub struct DirWatcher {
    watcher: RecommendedWatcher,
    events: Receiver<notify::Result<Event>>,
    dirs: [PathBuf; 2],
}

impl DirWatcher {
    pub fn new(project_root: &Path) -> Result<Self> {
        let root = fs::canonicalize(project_root)
            .wrap_err_with(|| format!("failed to resolve '{}'", project_root.display()))?;
        let (tx, events) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(tx).wrap_err("failed to start watcher")?;

        watcher
            .watch(&root, RecursiveMode::NonRecursive)
            .wrap_err_with(|| format!("failed to watch '{}'", root.display()))?;

        let mut this = Self {
            watcher,
            events,
            dirs: [root.join(ROUTES_DIR), root.join(ISLANDS_DIR)],
        };
        for dir in this.dirs.clone() {
            this.watch_dir(&dir)?;
        }
        Ok(this)
    }

    fn watch_dir(&mut self, dir: &Path) -> Result<()> {
        if !dir.is_dir() {
            return Ok(());
        }
        debug!(dir = %dir.display(), "watching");
        self.watcher
            .watch(dir, RecursiveMode::Recursive)
            .wrap_err_with(|| format!("failed to watch '{}'", dir.display()))
    }

    fn is_relevant(&self, event: &Event) -> bool {
        !event.kind.is_access()
            && event
                .paths
                .iter()
                .any(|path| self.dirs.iter().any(|dir| path.starts_with(dir)))
    }

    /// Pick up a scan root that was created after the session started.
    fn rewatch(&mut self, event: &Event) -> Result<()> {
        for dir in self.dirs.clone() {
            if event.paths.contains(&dir) {
                self.watch_dir(&dir)?;
            }
        }
        Ok(())
    }
}

impl ChangeSource for DirWatcher {
    fn wait(&mut self) -> Result<bool> {
        loop {
            let Ok(event) = self.events.recv() else {
                return Ok(false);
            };
            let event = event.wrap_err("file watcher failed")?;
            if !self.is_relevant(&event) {
                continue;
            }
            trace!(paths = ?event.paths, kind = ?event.kind, "change");
            self.rewatch(&event)?;

            while let Ok(next) = self.events.recv_timeout(DEBOUNCE) {
                if let Ok(next) = next {
                    self.rewatch(&next)?;
                }
            }
            return Ok(true);
        }
    }
}
