//! Log output for the `kyusei` binary.
//!
//! Events from the workspace crates go to stderr so that report output on
//! stdout stays clean for `--json`. Other crates stay silent unless
//! `RUST_LOG` asks for them.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Log targets of this workspace. The binary logs under `kyusei`.
const KYUSEI_TARGETS: [&str; 5] = [
    "kyusei",
    "kyusei_base",
    "kyusei_config",
    "kyusei_rs",
    "kyusei_time",
];

/// Level for a `-v` count: warn, then info, debug and trace.
fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Filter directives enabling `level` on every workspace target.
fn directives(level: LevelFilter) -> String {
    let level = level.to_string().to_lowercase();
    let mut out = String::from("off");
    for target in KYUSEI_TARGETS {
        out.push_str(&format!(",{target}={level}"));
    }
    out
}

/// Install the stderr subscriber. `RUST_LOG`, when set, replaces the
/// filter built from `verbosity`.
pub fn init(verbosity: u8) {
    let level = level_for(verbosity);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(level >= LevelFilter::DEBUG)
        .init();
}
