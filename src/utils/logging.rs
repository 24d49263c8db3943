//! Logging setup.

use env_logger::Env;

/// Filter used when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "warn,voice_sop=info";

/// Install `env_logger` as the `log` backend, honouring `RUST_LOG`.
pub fn init_from_env() {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .format_timestamp_secs()
        .init();
}
