//! Telemetry helpers for applications embedding `plot-rs`.
//!
//! Render passes log through `tracing` (`debug` for pass summaries, `trace` for
//! per-plottable primitive counts). Nothing is installed implicitly: hosts
//! either call one of the helpers below or wire their own subscriber.

/// Default directive used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "plot_rs=info";

/// Initializes a compact `tracing` subscriber when the `telemetry` feature is enabled.
///
/// `RUST_LOG` takes precedence; otherwise [`DEFAULT_FILTER`] applies.
/// Returns `false` when the feature is disabled or a global subscriber was
/// already installed by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_FILTER)
}

/// Same as [`init_default_tracing`] with a caller-provided fallback directive.
#[must_use]
pub fn init_tracing_with_filter(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directive));
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}
