use clap::Args;
use eyre::Result;
use islet_manifest::ConfigFile;

use super::{ExitOnDiagnostic, ProjectArgs, UnwrapOrExit, canonicalizer};
use crate::{
    ops::{GenerateOptions, generate},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ManifestCommand {
    #[command(flatten)]
    project: ProjectArgs,

    /// Preview the generated registry without writing to disk
    #[arg(long)]
    dry_run: bool,

    /// Skip the formatter
    #[arg(long)]
    no_fmt: bool,
}

impl ManifestCommand {
    pub fn run(&self) -> Result<()> {
        let root = &self.project.root;
        let config_file = ConfigFile::open(root).unwrap_or_exit();
        let canonicalizer = canonicalizer(config_file.config(), self.no_fmt).unwrap_or_exit();

        let report = generate(
            root,
            canonicalizer.as_ref(),
            GenerateOptions {
                dry_run: self.dry_run,
            },
        )
        .exit_on_diagnostic()?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
