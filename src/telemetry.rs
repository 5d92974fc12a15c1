//! Opt-in tracing setup for pages embedding `chartoon-showcase`.
//!
//! Mount transitions log through `tracing` at `debug`, recovered widget
//! failures at `warn`. Hosts with their own subscriber can ignore this module.

/// Filter used when `RUST_LOG` is unset: lifecycle detail for this crate,
/// `info` for everything else.
pub const DEFAULT_FILTER: &str = "info,chartoon_showcase=debug";

/// Installs a compact `fmt` subscriber using [`DEFAULT_FILTER`].
///
/// Returns `false` when the `telemetry` feature is off or the host already
/// set a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_FILTER)
}

/// Like [`init_default_tracing`], with `fallback_filter` applied when
/// `RUST_LOG` is unset or unparsable.
#[must_use]
pub fn init_tracing_with_filter(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(fallback_filter))
            .unwrap_or_else(|_| EnvFilter::new("info"));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_filter;
        false
    }
}
