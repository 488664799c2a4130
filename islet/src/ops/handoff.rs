//! Collaborators that take over once the registry is settled.

use std::{
    path::{Path, PathBuf},
    process::{Child, Command},
};

use eyre::{Result, WrapErr, bail, eyre};
use islet_manifest::BuildConfig;
use serde::Serialize;
use tracing::{debug, info, warn};
use url::Url;

/// Environment variable carrying [`BuildOptions`] as JSON to the build command.
pub const BUILD_OPTIONS_ENV_KEY: &str = "ISLET_BUILD_OPTIONS";

/// Options handed to the production build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildOptions {
    /// Directory receiving built assets.
    pub out_dir: PathBuf,
    /// Browser targets for the bundler.
    pub target: Vec<String>,
    /// Override for loading a pre-built snapshot instead of bundling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_snapshot: Option<bool>,
}

impl BuildOptions {
    /// Options from `[build]`, with `out_dir` resolved against the project root.
    pub fn from_config(config: &BuildConfig, project_root: &Path) -> Self {
        Self {
            out_dir: project_root.join(&config.out_dir),
            target: config.target.clone(),
            load_snapshot: None,
        }
    }

    /// Drop the snapshot loader override; a build always bundles from source.
    pub fn without_snapshot_loader(mut self) -> Self {
        self.load_snapshot = None;
        self
    }
}

/// One-shot production build.
pub trait BuildStep {
    /// Build from the registry at `registry`. Returns once the build finished.
    fn build(
        &self,
        registry: &Path,
        options: &BuildOptions,
        env: &[(String, String)],
    ) -> Result<()>;
}

/// Starts the long-running server module.
pub trait Entrypoint {
    /// Load the module at `location` and return once it is running.
    fn start(&self, location: &Url, env: &[(String, String)]) -> Result<Box<dyn Server>>;
}

/// A server started by an [`Entrypoint`].
pub trait Server {
    /// Stop the server and wait for it to exit.
    fn stop(self: Box<Self>) -> Result<()>;
}

/// Resolve `entry` against the project root directory as a `file://` URL.
///
/// Absolute URLs are returned unchanged.
pub fn resolve_entrypoint(project_root: &Path, entry: &str) -> Result<Url> {
    let root = std::path::absolute(project_root)
        .wrap_err_with(|| format!("failed to resolve '{}'", project_root.display()))?;
    let base = Url::from_directory_path(&root)
        .map_err(|()| eyre!("'{}' cannot be expressed as a file URL", root.display()))?;

    base.join(entry)
        .wrap_err_with(|| format!("invalid entrypoint '{}'", entry))
}

/// Runs the `[build]` command with the registry path appended.
pub struct CommandBuild {
    command: Vec<String>,
    project_root: PathBuf,
}

impl CommandBuild {
    pub fn new(command: Vec<String>, project_root: impl Into<PathBuf>) -> Self {
        Self {
            command,
            project_root: project_root.into(),
        }
    }
}

impl BuildStep for CommandBuild {
    fn build(
        &self,
        registry: &Path,
        options: &BuildOptions,
        env: &[(String, String)],
    ) -> Result<()> {
        let Some((program, args)) = self.command.split_first() else {
            bail!("[build] command is empty");
        };

        info!(%program, registry = %registry.display(), "starting build");
        let status = Command::new(program)
            .args(args)
            .arg(registry)
            .current_dir(&self.project_root)
            .env(BUILD_OPTIONS_ENV_KEY, serde_json::to_string(options)?)
            .envs(env.iter().map(|(k, v)| (k, v)))
            .status()
            .wrap_err_with(|| format!("failed to run '{}'", program))?;

        if !status.success() {
            bail!("build failed with {}", status);
        }
        Ok(())
    }
}

/// Runs the entrypoint module with the host runtime (`deno run -A <url>`).
pub struct RuntimeEntrypoint {
    executable: String,
    project_root: PathBuf,
}

impl RuntimeEntrypoint {
    pub fn new(executable: impl Into<String>, project_root: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            project_root: project_root.into(),
        }
    }
}

impl Entrypoint for RuntimeEntrypoint {
    fn start(&self, location: &Url, env: &[(String, String)]) -> Result<Box<dyn Server>> {
        info!(entrypoint = %location, "starting server");
        let child = Command::new(&self.executable)
            .args(["run", "-A", location.as_str()])
            .current_dir(&self.project_root)
            .envs(env.iter().map(|(k, v)| (k, v)))
            .spawn()
            .wrap_err_with(|| format!("failed to run '{}'", self.executable))?;

        Ok(Box::new(ChildServer {
            child,
            location: location.clone(),
        }))
    }
}

/// Server running as a child process.
struct ChildServer {
    child: Child,
    location: Url,
}

impl Server for ChildServer {
    fn stop(mut self: Box<Self>) -> Result<()> {
        if let Some(status) = self.child.try_wait()? {
            if !status.success() {
                warn!(entrypoint = %self.location, %status, "server had already exited");
            }
            return Ok(());
        }

        debug!(entrypoint = %self.location, pid = self.child.id(), "stopping server");
        self.child
            .kill()
            .wrap_err_with(|| format!("failed to stop '{}'", self.location))?;
        self.child.wait()?;
        Ok(())
    }
}
