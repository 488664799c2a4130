//! Dev cycle - regenerate the registry when routes or islands changed, then hand off.

use std::path::{Path, PathBuf};

use eyre::Result;
use islet_codegen::TextCanonicalizer;
use islet_codegen_typescript::{RegistryTs, persist};
use islet_core::GeneratedFile;
use islet_manifest::{Manifest, SnapshotStore, collect};
use tracing::{debug, info, warn};
use url::Url;

use super::{
    handoff::{BuildOptions, BuildStep, Entrypoint, Server},
    watch::ChangeSource,
};

/// What happens once the registry is settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Start the entrypoint module and keep serving.
    Serve,
    /// Run the one-shot production build.
    Build,
}

/// Outcome of the regeneration half of a cycle.
#[derive(Debug, Clone)]
pub struct Prepared {
    /// Manifest collected in this cycle.
    pub manifest: Manifest,
    /// Whether the registry was rewritten.
    pub regenerated: bool,
    /// Absolute path of the registry module.
    pub registry: PathBuf,
}

/// Runs regeneration cycles against injected collaborators.
///
/// A cycle loads the last-known manifest, collects the current one, stores
/// it, rewrites the registry only if the two differ, and dispatches to the
/// build step or the entrypoint. The server started by the last dispatch is
/// stopped before the next one starts, and when the coordinator is dropped.
pub struct Coordinator<'a> {
    canonicalizer: &'a dyn TextCanonicalizer,
    snapshot: &'a mut dyn SnapshotStore,
    build: &'a dyn BuildStep,
    entrypoint: &'a dyn Entrypoint,
    build_options: BuildOptions,
    server: Option<Box<dyn Server>>,
}

impl<'a> Coordinator<'a> {
    pub fn new(
        canonicalizer: &'a dyn TextCanonicalizer,
        snapshot: &'a mut dyn SnapshotStore,
        build: &'a dyn BuildStep,
        entrypoint: &'a dyn Entrypoint,
    ) -> Self {
        Self {
            canonicalizer,
            snapshot,
            build,
            entrypoint,
            build_options: BuildOptions::default(),
            server: None,
        }
    }

    /// Options passed to the build step in [`Mode::Build`].
    pub fn with_build_options(mut self, options: BuildOptions) -> Self {
        self.build_options = options;
        self
    }

    /// Run a full cycle: [`Coordinator::prepare`] then [`Coordinator::dispatch`].
    pub fn run(&mut self, entrypoint: &Url, project_root: &Path, mode: Mode) -> Result<Prepared> {
        let prepared = self.prepare(project_root)?;
        self.dispatch(&prepared, entrypoint, mode)?;
        Ok(prepared)
    }

    /// Collect, remember and, when changed, regenerate.
    ///
    /// Collection and snapshot failures abort before the registry is touched.
    pub fn prepare(&mut self, project_root: &Path) -> Result<Prepared> {
        let previous = self.snapshot.load()?.unwrap_or_else(Manifest::empty);
        let manifest = collect(project_root)?;
        self.snapshot.store(&manifest)?;

        let registry = RegistryTs::new(&manifest).path(project_root);
        let regenerated = manifest.differs_from(&previous);

        if regenerated {
            persist(project_root, &manifest, self.canonicalizer)?;
        } else {
            debug!("manifest unchanged, keeping {}", registry.display());
        }

        Ok(Prepared {
            manifest,
            regenerated,
            registry,
        })
    }

    /// Hand off to the build step or the entrypoint.
    ///
    /// In [`Mode::Serve`] a server from an earlier dispatch is stopped first.
    pub fn dispatch(&mut self, prepared: &Prepared, entrypoint: &Url, mode: Mode) -> Result<()> {
        let env = self.snapshot.child_env();

        match mode {
            Mode::Build => {
                let options = self.build_options.clone().without_snapshot_loader();
                let registry = std::path::absolute(&prepared.registry)?;
                info!(registry = %registry.display(), "dispatching build");
                self.build.build(&registry, &options, &env)
            }
            Mode::Serve => {
                self.stop_server()?;
                info!(%entrypoint, "dispatching entrypoint");
                self.server = Some(self.entrypoint.start(entrypoint, &env)?);
                Ok(())
            }
        }
    }

    /// Serve the project until `changes` runs out.
    ///
    /// Every cycle prepares, reports through `on_cycle`, restarts the server
    /// and waits for the next change. The snapshot store is shared by all
    /// cycles, so an unchanged tree is never regenerated twice. The server is
    /// stopped when the loop ends, whether or not a cycle failed.
    pub fn supervise(
        &mut self,
        entrypoint: &Url,
        project_root: &Path,
        changes: &mut dyn ChangeSource,
        mut on_cycle: impl FnMut(&Prepared),
    ) -> Result<()> {
        let result = self.serve_cycles(entrypoint, project_root, changes, &mut on_cycle);
        let stopped = self.stop_server();
        result.and(stopped)
    }

    fn serve_cycles(
        &mut self,
        entrypoint: &Url,
        project_root: &Path,
        changes: &mut dyn ChangeSource,
        on_cycle: &mut dyn FnMut(&Prepared),
    ) -> Result<()> {
        loop {
            let prepared = self.prepare(project_root)?;
            on_cycle(&prepared);
            self.dispatch(&prepared, entrypoint, Mode::Serve)?;

            if !changes.wait()? {
                debug!("change source closed, ending session");
                return Ok(());
            }
            info!("routes or islands changed, restarting");
        }
    }

    /// Stop the running server, if any.
    pub fn stop_server(&mut self) -> Result<()> {
        match self.server.take() {
            Some(server) => server.stop(),
            None => Ok(()),
        }
    }
}

impl Drop for Coordinator<'_> {
    fn drop(&mut self) {
        if let Err(e) = self.stop_server() {
            warn!("failed to stop server: {e:#}");
        }
    }
}
