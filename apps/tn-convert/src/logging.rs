//! Logger setup for the binary.

use std::io::Write;

use env_logger::Env;

/// Install `env_logger` on stderr.  `RUST_LOG` overrides the `info` default.
pub fn log_init() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()))
        .init();
}
