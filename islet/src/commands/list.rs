use clap::Args;
use eyre::Result;
use islet_manifest::collect;

use super::{ProjectArgs, UnwrapOrExit};
use crate::reports::{ListReport, Report, TerminalOutput};

#[derive(Args)]
pub struct ListCommand {
    #[command(flatten)]
    project: ProjectArgs,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = collect(&self.project.root).unwrap_or_exit();
        ListReport::new(&manifest).render(&mut TerminalOutput::new());
        Ok(())
    }
}
