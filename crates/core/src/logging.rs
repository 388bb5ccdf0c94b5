use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Default filter directive when `RUST_LOG` does not mention this crate.
const DEFAULT_DIRECTIVE: &str = "green_sense_core=info";

/// Installs a global `tracing` fmt subscriber honouring `RUST_LOG`.
///
/// Safe to call more than once; only the first call has an effect. Library
/// code never calls this itself, the hosting binary or test harness does.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = DEFAULT_DIRECTIVE.parse() {
            filter = filter.add_directive(directive);
        }

        if let Err(e) = fmt().with_env_filter(filter).try_init() {
            tracing::debug!(error = %e, "global subscriber already installed");
        }
        tracing::info!("green-sense-core tracing initialized");
    });
}
