//! Device location source

use async_trait::async_trait;
use thiserror::Error;

use crate::models::UserLocation;

/// Requested fix quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocationAccuracy {
    Lowest,
    Low,
    #[default]
    Balanced,
    High,
}

/// Location could not be obtained. Kept apart from [`crate::errors::ApiError`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,

    #[error("Location unavailable: {0}")]
    Unavailable(String),
}

/// One-shot position reading, asking for permission first
#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn current_location(
        &self,
        accuracy: LocationAccuracy,
    ) -> Result<UserLocation, LocationError>;
}

/// Provider backed by a configured position; no position means access is denied
#[derive(Debug, Clone, Default)]
pub struct FixedLocation {
    location: Option<UserLocation>,
}

impl FixedLocation {
    pub fn new(location: Option<UserLocation>) -> Self {
        Self { location }
    }
}

#[async_trait]
impl LocationProvider for FixedLocation {
    async fn current_location(
        &self,
        _accuracy: LocationAccuracy,
    ) -> Result<UserLocation, LocationError> {
        self.location.ok_or(LocationError::PermissionDenied)
    }
}
