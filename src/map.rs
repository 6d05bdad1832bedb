//! Launch site map screen state

use tracing::{error, info, warn};

use crate::{
    geo::{distance_km, format_distance},
    lifecycle::{Unmounted, ViewLifetime},
    links::{directions_uri, LinkOpener, Platform},
    location::{LocationAccuracy, LocationError, LocationProvider},
    models::{Launchpad, UserLocation},
};

/// Map centre used when the launchpad has no usable coordinate (Cape Canaveral)
pub const FALLBACK_CENTER: UserLocation = UserLocation {
    latitude: 28.5618571,
    longitude: -80.577366,
};

#[derive(Debug, Clone, PartialEq)]
pub enum LocationState {
    Loading,
    Located {
        user: UserLocation,
        distance_km: f64,
    },
    /// User refused location access; offers the settings prompt
    PermissionDenied,
    /// Device could not produce a fix; offers a retry
    Unavailable { reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Launchpad,
    User,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub kind: MarkerKind,
    pub coordinate: UserLocation,
    pub title: String,
    pub description: Option<String>,
}

/// Visible map area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub center: UserLocation,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

/// Shown when location access is denied
pub const PERMISSION_PROMPT_TITLE: &str = "Location Permission Required";
pub const PERMISSION_PROMPT_MESSAGE: &str = "This app needs location access to show your distance from launch sites and provide directions.";

#[derive(Debug, Clone)]
pub struct LaunchSiteMap {
    launchpad: Launchpad,
    location: LocationState,
    alert: Option<String>,
}

impl LaunchSiteMap {
    pub fn new(launchpad: Launchpad) -> Self {
        Self {
            launchpad,
            location: LocationState::Loading,
            alert: None,
        }
    }

    pub fn launchpad(&self) -> &Launchpad {
        &self.launchpad
    }

    pub fn location(&self) -> &LocationState {
        &self.location
    }

    fn site(&self) -> UserLocation {
        UserLocation {
            latitude: self.launchpad.latitude,
            longitude: self.launchpad.longitude,
        }
    }

    /// Request the device position and compute the distance to the launchpad
    pub async fn locate(
        &mut self,
        provider: &dyn LocationProvider,
        lifetime: &ViewLifetime,
    ) -> Result<(), Unmounted> {
        self.location = LocationState::Loading;

        let result = lifetime
            .guard(provider.current_location(LocationAccuracy::Balanced))
            .await?;

        self.location = match result {
            Ok(user) => {
                let distance_km = distance_km(
                    user.latitude,
                    user.longitude,
                    self.launchpad.latitude,
                    self.launchpad.longitude,
                );
                info!(
                    "User location obtained: lat={}, lon={}, distance_km={:.1}",
                    user.latitude, user.longitude, distance_km
                );
                LocationState::Located { user, distance_km }
            }
            Err(LocationError::PermissionDenied) => {
                warn!("Location permission denied");
                LocationState::PermissionDenied
            }
            Err(LocationError::Unavailable(reason)) => {
                error!("Failed to get user location: {}", reason);
                LocationState::Unavailable { reason }
            }
        };
        Ok(())
    }

    /// Retry after the device failed to produce a fix
    pub async fn retry(
        &mut self,
        provider: &dyn LocationProvider,
        lifetime: &ViewLifetime,
    ) -> Result<(), Unmounted> {
        if !matches!(self.location, LocationState::Unavailable { .. }) {
            return Ok(());
        }
        self.locate(provider, lifetime).await
    }

    pub fn distance_label(&self) -> Option<String> {
        match self.location {
            LocationState::Located { distance_km, .. } => Some(format_distance(distance_km)),
            _ => None,
        }
    }

    pub fn markers(&self) -> Vec<Marker> {
        let mut markers = vec![Marker {
            kind: MarkerKind::Launchpad,
            coordinate: self.site(),
            title: self.launchpad.full_name.clone(),
            description: Some(format!(
                "{}, {}",
                self.launchpad.locality, self.launchpad.region
            )),
        }];
        if let LocationState::Located { user, .. } = self.location {
            markers.push(Marker {
                kind: MarkerKind::User,
                coordinate: user,
                title: "Your Location".to_string(),
                description: None,
            });
        }
        markers
    }

    /// Points the map zooms to fit: the launchpad, then the user when known
    pub fn fit_coordinates(&self) -> Vec<UserLocation> {
        self.markers().into_iter().map(|m| m.coordinate).collect()
    }

    pub fn initial_region(&self) -> Region {
        let center = if self.launchpad.latitude == 0.0 || self.launchpad.longitude == 0.0 {
            FALLBACK_CENTER
        } else {
            self.site()
        };
        let delta = match self.location {
            LocationState::Located { .. } => 1.0,
            _ => 0.1,
        };
        Region {
            center,
            latitude_delta: delta,
            longitude_delta: delta,
        }
    }

    /// Ask the OS map application for directions to the launchpad
    pub fn directions(&mut self, opener: &dyn LinkOpener, platform: Platform) {
        info!("Opening directions for {}", self.launchpad.full_name);
        let result = directions_uri(
            platform,
            self.launchpad.latitude,
            self.launchpad.longitude,
            &self.launchpad.full_name,
        )
        .and_then(|url| opener.open(url.as_str()));

        if let Err(e) = result {
            error!("Unable to open maps application: {}", e);
            self.alert = Some("Unable to open maps application".to_string());
        }
    }

    /// Blocking alert from a failed directions request; returned once
    pub fn take_alert(&mut self) -> Option<String> {
        self.alert.take()
    }

    /// Developer diagnostics, only with the debug flag on
    pub fn debug_overlay(&self, enabled: bool) -> Option<String> {
        if !enabled {
            return None;
        }
        Some(format!(
            "Lat: {:.4} | Lng: {:.4}",
            self.launchpad.latitude, self.launchpad.longitude
        ))
    }
}
