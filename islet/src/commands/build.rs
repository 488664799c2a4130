use clap::Args;
use eyre::Result;

use super::{
    ProjectArgs,
    dev::{CycleArgs, run_cycle},
};
use crate::ops::Mode;

#[derive(Args)]
pub struct BuildCommand {
    #[command(flatten)]
    project: ProjectArgs,

    #[command(flatten)]
    cycle: CycleArgs,
}

impl BuildCommand {
    pub fn run(&self) -> Result<()> {
        run_cycle(&self.project, &self.cycle, None, Mode::Build)
    }
}
