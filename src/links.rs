//! External link and map application handoff

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("No handler for {0}")]
    Unsupported(String),

    #[error("Failed to launch handler: {0}")]
    Launch(String),
}

/// Hands a URL to the platform's default handler
pub trait LinkOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<(), LinkError>;
}

/// Opener that spawns the desktop's URL handler
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<(), LinkError> {
        info!("Opening {}", url);

        #[cfg(target_os = "macos")]
        let mut command = {
            let mut command = std::process::Command::new("open");
            command.arg(url);
            command
        };
        #[cfg(target_os = "windows")]
        let mut command = {
            let mut command = std::process::Command::new("cmd");
            command.args(["/C", "start", url]);
            command
        };
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        let mut command = {
            let mut command = std::process::Command::new("xdg-open");
            command.arg(url);
            command
        };

        command
            .spawn()
            .map(|_| ())
            .map_err(|e| LinkError::Launch(e.to_string()))
    }
}

/// Target platform, decides the map application URI scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    #[default]
    Android,
}

/// URI asking the OS map application for directions to a point
pub fn directions_uri(
    platform: Platform,
    latitude: f64,
    longitude: f64,
    label: &str,
) -> Result<reqwest::Url, LinkError> {
    let lat_lng = format!("{},{}", latitude, longitude);
    let raw = match platform {
        Platform::Ios => format!("maps:{}?q={}", lat_lng, label),
        Platform::Android => format!("geo:{}?q={}({})", lat_lng, lat_lng, label),
    };

    reqwest::Url::parse(&raw).map_err(|e| LinkError::InvalidUrl(format!("{}: {}", raw, e)))
}
