use clap::Args;
use eyre::Result;
use islet_manifest::{ConfigFile, EnvSnapshot};

use super::{ExitOnDiagnostic, ProjectArgs, UnwrapOrExit, canonicalizer};
use crate::{
    ops::{
        BuildOptions, CommandBuild, Coordinator, DirWatcher, Mode, RuntimeEntrypoint,
        ensure_runtime, resolve_entrypoint,
    },
    reports::{DevReport, Report, TerminalOutput},
};

/// Flags shared by `dev` and `build`.
#[derive(Args)]
pub(crate) struct CycleArgs {
    /// Write the registry without running the formatter
    #[arg(long)]
    pub no_fmt: bool,

    /// Do not check the runtime version before starting
    #[arg(long)]
    pub skip_version_check: bool,
}

#[derive(Args)]
pub struct DevCommand {
    #[command(flatten)]
    project: ProjectArgs,

    /// Server entrypoint relative to the root (defaults to [dev] entrypoint)
    #[arg(short, long)]
    entrypoint: Option<String>,

    #[command(flatten)]
    cycle: CycleArgs,
}

impl DevCommand {
    pub fn run(&self) -> Result<()> {
        run_cycle(
            &self.project,
            &self.cycle,
            self.entrypoint.as_deref(),
            Mode::Serve,
        )
    }
}

/// Regenerate when the manifest changed since the last cycle, report, hand off.
///
/// In [`Mode::Serve`] this keeps running: `routes/` and `islands/` are watched
/// and every change starts a new cycle against the same snapshot store.
pub(crate) fn run_cycle(
    project: &ProjectArgs,
    cycle: &CycleArgs,
    entrypoint: Option<&str>,
    mode: Mode,
) -> Result<()> {
    let root = &project.root;
    let config_file = ConfigFile::open(root).unwrap_or_exit();
    let config = config_file.config();

    if !cycle.skip_version_check {
        ensure_runtime(&config.runtime).unwrap_or_exit();
    }

    let entry = resolve_entrypoint(root, entrypoint.unwrap_or(&config.dev.entrypoint))?;
    let canonicalizer = canonicalizer(config, cycle.no_fmt).unwrap_or_exit();
    let mut snapshot = EnvSnapshot::from_env();
    let build = CommandBuild::new(config.build.command.clone(), root);
    let server = RuntimeEntrypoint::new(&config.runtime.executable, root);

    let mut coordinator =
        Coordinator::new(canonicalizer.as_ref(), &mut snapshot, &build, &server)
            .with_build_options(BuildOptions::from_config(&config.build, root));

    match mode {
        Mode::Build => {
            let prepared = coordinator.prepare(root).exit_on_diagnostic()?;
            DevReport::from(&prepared).render(&mut TerminalOutput::new());
            coordinator.dispatch(&prepared, &entry, mode)
        }
        Mode::Serve => {
            let mut watcher = DirWatcher::new(root)?;
            coordinator
                .supervise(&entry, root, &mut watcher, |prepared| {
                    DevReport::from(prepared).render(&mut TerminalOutput::new())
                })
                .exit_on_diagnostic()
        }
    }
}
