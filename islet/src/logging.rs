//! Diagnostic logging to stderr.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const CRATES: &[&str] = &[
    "islet",
    "islet_codegen",
    "islet_codegen_typescript",
    "islet_core",
    "islet_manifest",
];

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `-v` raises the level of the islet
/// crates from `warn` up to `trace`.
pub fn init(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directives: Vec<String> = CRATES
            .iter()
            .map(|krate| format!("{}={}", krate, level))
            .collect();
        EnvFilter::new(directives.join(","))
    });

    // Ignore a second initialization attempt.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .try_init();
}
