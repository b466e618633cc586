//! Opt-in log output for embedders and tests.

use std::sync::OnceLock;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static ACTIVE: OnceLock<bool> = OnceLock::new();

/// Send the machine's `tracing` events to stderr, filtered by `RUST_LOG`.
///
/// `RUST_LOG=epl_eval=debug` shows evaluation entry and exit, handler catches
/// and partial or over-application; `epl_eval=trace` adds a line per machine
/// step. Only the first call does any work. Returns whether this crate's
/// subscriber is the active one: `false` when `RUST_LOG` is unset or does not
/// parse, or when the embedder installed a subscriber first.
pub fn init_tracing() -> bool {
    *ACTIVE.get_or_init(|| {
        let Ok(filter) = EnvFilter::try_from_default_env() else {
            return false;
        };
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .without_time(),
            )
            .with(filter)
            .try_init()
            .is_ok()
    })
}
