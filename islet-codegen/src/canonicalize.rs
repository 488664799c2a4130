//! Canonical formatting of generated source text.
//!
//! Generated files are piped through a formatter before they are written so
//! that the output matches what the project's own tooling would produce.

use std::{
    io::{self, Write},
    process::{Command, ExitStatus, Stdio},
    string::FromUtf8Error,
    thread,
};

use miette::Diagnostic;
use thiserror::Error;
use tracing::debug;

/// Turns rendered source text into its canonical, formatted form.
pub trait TextCanonicalizer {
    fn canonicalize(&self, text: &str) -> Result<String, FormatError>;
}

/// Leaves text untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl TextCanonicalizer for Identity {
    fn canonicalize(&self, text: &str) -> Result<String, FormatError> {
        Ok(text.to_string())
    }
}

/// Errors from the external formatter. All of them abort generation.
#[derive(Debug, Error, Diagnostic)]
pub enum FormatError {
    #[error("no formatter command configured")]
    #[diagnostic(
        code(islet::formatter_unset),
        help("set [formatter] command in islet.toml, or pass --no-fmt to skip formatting")
    )]
    NoCommand,

    #[error("failed to start formatter `{command}`")]
    #[diagnostic(
        code(islet::formatter_missing),
        help("install the formatter or set [formatter] command in islet.toml")
    )]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to exchange data with formatter `{command}`")]
    #[diagnostic(code(islet::formatter_io))]
    Stream {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("formatter `{command}` failed with {status}")]
    #[diagnostic(code(islet::formatter_failed), help("{stderr}"))]
    Exit {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("formatter `{command}` produced no output")]
    #[diagnostic(code(islet::formatter_empty))]
    Empty { command: String },

    #[error("formatter `{command}` produced invalid UTF-8")]
    #[diagnostic(code(islet::formatter_output))]
    InvalidOutput {
        command: String,
        #[source]
        source: FromUtf8Error,
    },
}

/// A formatter run as a subprocess: source on stdin, formatted source on stdout.
///
/// There is no timeout; a hanging formatter hangs the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalFormatter {
    program: String,
    args: Vec<String>,
}

impl ExternalFormatter {
    pub fn new(
        program: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Build from a full command line (`["deno", "fmt", "-"]`).
    ///
    /// Returns `None` for an empty command.
    pub fn from_command(command: &[String]) -> Option<Self> {
        let (program, args) = command.split_first()?;
        Some(Self::new(program.clone(), args.iter().cloned()))
    }

    /// The command line, for messages.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl TextCanonicalizer for ExternalFormatter {
    fn canonicalize(&self, text: &str) -> Result<String, FormatError> {
        let command = self.command_line();
        debug!(%command, bytes = text.len(), "running formatter");

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| FormatError::Spawn {
                command: command.clone(),
                source,
            })?;

        let stdin = child.stdin.take();

        // Feed stdin from a second thread while stdout is drained, so a
        // formatter that streams output cannot deadlock on a full pipe.
        let (written, output) = thread::scope(|s| {
            let writer = s.spawn(move || match stdin {
                Some(mut stdin) => stdin.write_all(text.as_bytes()),
                None => Ok(()),
            });
            let output = child.wait_with_output();
            let written = writer
                .join()
                .unwrap_or_else(|panic| std::panic::resume_unwind(panic));
            (written, output)
        });

        let output = output.map_err(|source| FormatError::Stream {
            command: command.clone(),
            source,
        })?;

        if !output.status.success() {
            return Err(FormatError::Exit {
                command,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        written.map_err(|source| FormatError::Stream {
            command: command.clone(),
            source,
        })?;

        if output.stdout.is_empty() {
            return Err(FormatError::Empty { command });
        }

        String::from_utf8(output.stdout)
            .map_err(|source| FormatError::InvalidOutput { command, source })
    }
}
