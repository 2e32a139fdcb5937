//! Tracing subscriber setup for the CLI.

use tracing_subscriber::EnvFilter;

/// Workspace crates whose log level follows `-v`.
const CRATE_TARGETS: &[&str] = &[
    "pluvia",
    "pluvia_stats",
    "pluvia_solver",
    "pluvia_hydraulics",
    "pluvia_maxima",
    "pluvia_frequency",
    "pluvia_runoff",
    "pluvia_io",
];

/// Installs the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise the verbosity count picks the level
/// for the workspace crates (0 warn, 1 info, 2 debug, 3+ trace).
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let default_filter = CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",");

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
