//! Data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One rocket flight record
///
/// See: https://github.com/r-spacex/SpaceX-API/blob/master/docs/launches/v5/one.md
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Launch {
    pub id: String,
    /// Mission name
    pub name: String,
    /// Launch time in UTC
    pub date_utc: DateTime<Utc>,
    /// Outcome, None while the launch is pending or the outcome is unknown
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub links: LaunchLinks,
    /// Id of the [`Launchpad`] the launch used
    pub launchpad: String,
    #[serde(default)]
    pub details: Option<String>,
    pub flight_number: u32,
}

impl Launch {
    /// Tri-state outcome of the launch
    pub fn status(&self) -> LaunchStatus {
        LaunchStatus::from(self.success)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LaunchLinks {
    #[serde(default)]
    pub patch: MissionPatch,
    #[serde(default)]
    pub webcast: Option<String>,
    #[serde(default)]
    pub wikipedia: Option<String>,
}

/// Mission patch image URLs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MissionPatch {
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
}

/// Physical launch site
///
/// See: https://github.com/r-spacex/SpaceX-API/blob/master/docs/launchpads/v4/one.md
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Launchpad {
    pub id: String,
    pub name: String,
    pub full_name: String,
    pub locality: String,
    pub region: String,
    /// Latitude in WGS84 decimal degrees
    pub latitude: f64,
    /// Longitude in WGS84 decimal degrees
    pub longitude: f64,
    /// Free text, e.g. "active", "retired", "under construction"
    pub status: String,
    pub launch_attempts: u32,
    pub launch_successes: u32,
    #[serde(default)]
    pub details: Option<String>,
}

/// Device position, never persisted
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserLocation {
    pub latitude: f64,
    pub longitude: f64,
}

/// Launch outcome as shown to the user
///
/// An absent outcome is `Pending`, never `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchStatus {
    Success,
    Failed,
    Pending,
}

impl From<Option<bool>> for LaunchStatus {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => LaunchStatus::Success,
            Some(false) => LaunchStatus::Failed,
            None => LaunchStatus::Pending,
        }
    }
}

impl LaunchStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LaunchStatus::Success => "Success",
            LaunchStatus::Failed => "Failed",
            LaunchStatus::Pending => "Pending",
        }
    }

    /// Indicator colour as a hex RGB string
    pub fn color(&self) -> &'static str {
        match self {
            LaunchStatus::Success => "#4CAF50",
            LaunchStatus::Failed => "#F44336",
            LaunchStatus::Pending => "#FF9800",
        }
    }
}
