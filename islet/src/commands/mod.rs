mod build;
mod check;
mod completions;
mod dev;
mod list;
mod manifest;

use std::path::PathBuf;

use build::BuildCommand;
use check::CheckCommand;
use clap::{ArgAction, Args, Parser, Subcommand};
use completions::CompletionsCommand;
use dev::DevCommand;
use eyre::Result;
use islet_codegen::{ExternalFormatter, FormatError, Identity, TextCanonicalizer};
use islet_core::VersionError;
use islet_manifest::Config;
use list::ListCommand;
use manifest::ManifestCommand;

/// Extension trait for exiting on typed errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for islet_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        self.unwrap_or_else(|e| exit_with(miette::Report::new(*e)))
    }
}

impl<T> UnwrapOrExit<T> for Result<T, VersionError> {
    fn unwrap_or_exit(self) -> T {
        self.unwrap_or_else(|e| exit_with(miette::Report::new(e)))
    }
}

impl<T> UnwrapOrExit<T> for Result<T, FormatError> {
    fn unwrap_or_exit(self) -> T {
        self.unwrap_or_else(|e| exit_with(miette::Report::new(e)))
    }
}

/// Exit with a miette report when an eyre error carries a known diagnostic.
///
/// Anything else is passed through to `color-eyre`.
pub(crate) trait ExitOnDiagnostic<T> {
    fn exit_on_diagnostic(self) -> Result<T>;
}

impl<T> ExitOnDiagnostic<T> for Result<T> {
    fn exit_on_diagnostic(self) -> Result<T> {
        self.map_err(|report| {
            let report = match report.downcast::<Box<islet_manifest::Error>>() {
                Ok(e) => exit_with(miette::Report::new(*e)),
                Err(report) => report,
            };
            match report.downcast::<FormatError>() {
                Ok(e) => exit_with(miette::Report::new(e)),
                Err(report) => report,
            }
        })
    }
}

fn exit_with(report: miette::Report) -> ! {
    eprintln!("{:?}", report);
    std::process::exit(1);
}

/// Project location shared by every command.
#[derive(Args)]
pub(crate) struct ProjectArgs {
    /// Project root containing routes/ and islands/
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,
}

/// Pick the canonicalizer for generated files.
///
/// Formatting is only skipped when asked for; a configuration without a
/// formatter command is an error.
pub(crate) fn canonicalizer(
    config: &Config,
    no_fmt: bool,
) -> Result<Box<dyn TextCanonicalizer>, FormatError> {
    if no_fmt {
        return Ok(Box::new(Identity));
    }
    ExternalFormatter::from_command(&config.formatter.command)
        .map(|formatter| Box::new(formatter) as Box<dyn TextCanonicalizer>)
        .ok_or(FormatError::NoCommand)
}

#[derive(Parser)]
#[command(name = "islet")]
#[command(version)]
#[command(about = "Generate route and island registries for islet projects")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Dev(cmd) => cmd.run(),
            Commands::Build(cmd) => cmd.run(),
            Commands::Manifest(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate the registry if needed, then start the server
    Dev(DevCommand),

    /// Regenerate the registry if needed, then run the production build
    Build(BuildCommand),

    /// Regenerate islet.gen.ts unconditionally
    Manifest(ManifestCommand),

    /// Scan routes and islands without generating code
    Check(CheckCommand),

    /// List routes and islands with their registry bindings
    List(ListCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
