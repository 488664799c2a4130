//! Report data structures for commands.
//!
//! Operations return reports, commands render them to an [`Output`].

mod check;
mod dev;
mod generate;
mod list;
mod output;

pub use check::CheckReport;
pub use dev::DevReport;
pub use generate::{GenerateReport, GenerationResult};
pub use list::{ListEntry, ListReport};
pub use output::{Output, Report, TerminalOutput};

fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}
