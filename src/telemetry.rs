use crate::error::{KegTrackError, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber. `RUST_LOG` wins over `default_level`.
pub fn init_telemetry(default_level: &str) -> Result {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| KegTrackError::TelemetryInitFailed(e.to_string()))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(filter)
        .try_init()
        .map_err(|e| KegTrackError::TelemetryInitFailed(e.to_string()))?;

    tracing::info!("KegTrack telemetry initialized");
    Ok(())
}
