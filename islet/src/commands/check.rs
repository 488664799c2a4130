use clap::Args;
use eyre::Result;
use islet_manifest::ConfigFile;

use super::{ProjectArgs, UnwrapOrExit};
use crate::{
    ops::check,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    project: ProjectArgs,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let root = &self.project.root;
        let config_file = ConfigFile::open(root).unwrap_or_exit();

        check(root, &config_file)
            .unwrap_or_exit()
            .render(&mut TerminalOutput::new());
        Ok(())
    }
}
