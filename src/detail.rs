//! Launch detail screen state

use tracing::{error, info};

use crate::{
    api::LaunchApi,
    errors::LaunchTrackerError,
    lifecycle::{Unmounted, ViewLifetime},
    links::LinkOpener,
    models::{Launch, Launchpad},
    navigation::Route,
};

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Ready(Launchpad),
    Failed(String),
}

/// Only affordance of the failure state; there is no retry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailAction {
    GoBack,
}

/// Launch plus the launchpad resolved for it
#[derive(Debug, Clone)]
pub struct LaunchDetail {
    launch: Launch,
    state: DetailState,
    alert: Option<String>,
}

impl LaunchDetail {
    pub fn new(launch: Launch) -> Self {
        Self {
            launch,
            state: DetailState::Loading,
            alert: None,
        }
    }

    pub fn launch(&self) -> &Launch {
        &self.launch
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn launchpad(&self) -> Option<&Launchpad> {
        match &self.state {
            DetailState::Ready(pad) => Some(pad),
            _ => None,
        }
    }

    /// The resolved launchpad, or `LaunchpadUnavailable` naming the launch
    pub fn require_launchpad(&self) -> Result<&Launchpad, LaunchTrackerError> {
        self.launchpad()
            .ok_or_else(|| LaunchTrackerError::LaunchpadUnavailable(self.launch.name.clone()))
    }

    /// Fetch the launchpad of the launch. Issues exactly one request.
    pub async fn resolve(
        &mut self,
        api: &dyn LaunchApi,
        lifetime: &ViewLifetime,
    ) -> Result<(), Unmounted> {
        if self.state != DetailState::Loading {
            return Ok(());
        }

        let pad_id = self.launch.launchpad.clone();
        match lifetime.guard(api.get_launchpad(&pad_id)).await? {
            Ok(pad) => {
                info!("Launchpad loaded successfully: launchpad_id={}", pad_id);
                self.state = DetailState::Ready(pad);
            }
            Err(e) => {
                error!("Failed to load launchpad {}: {}", pad_id, e);
                self.state = DetailState::Failed(e.message);
            }
        }
        Ok(())
    }

    pub fn actions(&self) -> Vec<DetailAction> {
        match self.state {
            DetailState::Failed(_) => vec![DetailAction::GoBack],
            _ => Vec::new(),
        }
    }

    /// Route to the map screen, available once the launchpad is known
    pub fn map_route(&self) -> Option<Route> {
        self.launchpad().map(|pad| Route::Map {
            launchpad: pad.clone(),
        })
    }

    pub fn open_webcast(&mut self, opener: &dyn LinkOpener) {
        let url = self.launch.links.webcast.clone();
        self.open_link(opener, url.as_deref(), "Unable to open webcast link");
    }

    pub fn open_wikipedia(&mut self, opener: &dyn LinkOpener) {
        let url = self.launch.links.wikipedia.clone();
        self.open_link(opener, url.as_deref(), "Unable to open Wikipedia link");
    }

    fn open_link(&mut self, opener: &dyn LinkOpener, url: Option<&str>, failure: &str) {
        let Some(url) = url else {
            return;
        };
        if let Err(e) = opener.open(url) {
            error!("{}: {}", failure, e);
            self.alert = Some(failure.to_string());
        }
    }

    /// Blocking alert from a failed link open; returned once
    pub fn take_alert(&mut self) -> Option<String> {
        self.alert.take()
    }
}

/// Launch-site block of the detail screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSiteSummary {
    pub full_name: String,
    pub location: String,
    pub status: String,
    pub record: String,
}

impl From<&Launchpad> for LaunchSiteSummary {
    fn from(pad: &Launchpad) -> Self {
        Self {
            full_name: pad.full_name.clone(),
            location: format!("{}, {}", pad.locality, pad.region),
            status: format!("Status: {}", capitalize(&pad.status)),
            record: format!(
                "{}/{} successful launches",
                pad.launch_successes, pad.launch_attempts
            ),
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
