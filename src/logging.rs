//! Diagnostics go through `tracing`; the binary installs a stderr fmt
//! subscriber. `--verbose` or LATTICE_VIS_DEBUG=1 enables debug output.
use std::sync::OnceLock;

use tracing::Level;

static ENV_DEBUG: OnceLock<bool> = OnceLock::new();

pub fn env_debug_enabled() -> bool {
    *ENV_DEBUG.get_or_init(|| std::env::var("LATTICE_VIS_DEBUG").ok().as_deref() == Some("1"))
}

pub fn max_level(verbose: bool) -> Level {
    if verbose || env_debug_enabled() {
        Level::DEBUG
    } else {
        Level::WARN
    }
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(max_level(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
