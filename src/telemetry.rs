//! Tracing setup for hosts of `shotmap-rs`.
//!
//! The library emits events but never installs a subscriber itself:
//! - `warn!` for every dropped shot entry (index and reason) and every
//!   skipped player row
//! - `debug!` for batch sizes after normalization and season filtering,
//!   player directory size, fetched shot counts, and one summary per built
//!   shot map (player, league, season, shots, goals, dropped)
//! - `trace!` for remark counts of each commentary evaluation
//!
//! Call `init_default_tracing` (feature `telemetry`) for a compact stderr
//! subscriber filtered by `RUST_LOG`, or wire your own.

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when no initialization is performed (feature disabled) or if a
/// global subscriber was already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
