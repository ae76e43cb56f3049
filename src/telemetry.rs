//! Tracing setup for hosts embedding `chart-layout`.
//!
//! The engine only emits `tracing` events (`chart_layout::api` and
//! `chart_layout::core` targets). Installing a subscriber stays the host's
//! decision: call one of the helpers below or wire your own.

/// Installs a compact subscriber filtered by `RUST_LOG`, falling back to `info`.
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback("info")
}

/// Same as [`init_default_tracing`] with a caller-chosen fallback directive,
/// e.g. `"chart_layout=debug"` to watch every rebuild pass.
#[must_use]
pub fn init_tracing_with_fallback(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directive));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}
