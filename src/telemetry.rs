//! Opt-in tracing setup for hosts embedding `hbar-chart`.
//!
//! The engine itself only emits `tracing` events (render passes, listener
//! churn, click dispatch). Hosts that already run a subscriber need nothing
//! from this module.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Installs a compact fmt subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback(DEFAULT_FILTER)
}

/// Same as [`init_default_tracing`] with an explicit fallback directive such
/// as `"hbar_chart=trace"`.
#[must_use]
pub fn init_tracing_with_fallback(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directive));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
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

#[cfg(test)]
mod tests {
    use super::init_tracing_with_fallback;

    #[cfg(not(feature = "telemetry"))]
    #[test]
    fn init_is_a_no_op_without_feature() {
        assert!(!init_tracing_with_fallback("debug"));
    }

    #[cfg(feature = "telemetry")]
    #[test]
    fn second_init_reports_existing_subscriber() {
        let _ = init_tracing_with_fallback("debug");
        assert!(!init_tracing_with_fallback("debug"));
    }
}
