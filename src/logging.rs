use std::io::Write;

use env_logger::{Builder, Env, Target};

/// Install the stderr logger. Records render as `[LEVEL] message`;
/// the level filter defaults to `info` and follows `RUST_LOG` when set.
pub fn init() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .target(Target::Stderr)
        .init();
}
