//! Tracing setup for shells embedding `famsun-client`.
//!
//! Nothing here runs implicitly. A host either calls `init_default_tracing`
//! once at startup or installs its own subscriber and filters before using
//! the session API.

/// Default filter applied when `RUST_LOG` is unset: the session pipeline at
/// `debug`, everything else at `info`.
#[cfg(feature = "telemetry")]
const FALLBACK_FILTER: &str = "famsun_client=debug,info";

/// Installs a default `tracing` subscriber when the `telemetry` feature is
/// enabled.
///
/// Returns `true` on successful installation. Returns `false` when the
/// feature is disabled or when another subscriber already claimed the
/// global slot.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(FALLBACK_FILTER));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
