//! Tracing setup for the `tally` binary.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Switches to indented, hierarchical output when set to `1`.
pub const LOG_TREE: &str = "TALLY_LOG_TREE";

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=tally_eval=debug` or `RUST_LOG=tally_lexer=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_err() {
            return;
        }

        let filter = EnvFilter::from_default_env();
        if std::env::var(LOG_TREE).is_ok_and(|v| v == "1") {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
