//! SOS triggering with a bounded location lookup
//!
//! Location is best effort: the alert goes out with `location = null` when
//! the provider fails or does not answer within the wait.

use std::time::Duration;

use async_trait::async_trait;
use shared::models::{LocationData, SosAlert};
use thiserror::Error;

use crate::{ClientResult, HttpClient};

/// Default wait for a location fix
pub const DEFAULT_LOCATION_WAIT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    Denied,

    #[error("Location unavailable: {0}")]
    Unavailable(String),
}

/// Source of the device position
#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn current_location(&self) -> Result<LocationData, LocationError>;
}

/// Provider for devices without positioning
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocation;

#[async_trait]
impl LocationProvider for NoLocation {
    async fn current_location(&self) -> Result<LocationData, LocationError> {
        Err(LocationError::Unavailable("no positioning on this device".to_string()))
    }
}

/// Ask the provider for a fix, giving up after `wait`
pub async fn resolve_location(
    provider: &dyn LocationProvider,
    wait: Duration,
) -> Option<LocationData> {
    match tokio::time::timeout(wait, provider.current_location()).await {
        Ok(Ok(location)) => Some(location),
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "Sending SOS without location");
            None
        }
        Err(_) => {
            tracing::warn!(
                wait_ms = wait.as_millis() as u64,
                "Location lookup timed out, sending SOS without location"
            );
            None
        }
    }
}

/// Raise an SOS alert, with the location when one arrives in time
pub async fn trigger_sos(
    client: &HttpClient,
    provider: &dyn LocationProvider,
    wait: Duration,
) -> ClientResult<SosAlert> {
    let location = resolve_location(provider, wait).await;
    client.send_sos(location).await
}
