//! Plain-text rendering of the screens

use std::fmt;

use chrono::{DateTime, Utc};

use crate::{
    detail::{DetailAction, DetailState, LaunchDetail, LaunchSiteSummary},
    list::{EmptyState, LaunchList, Phase},
    map::{LaunchSiteMap, LocationState, PERMISSION_PROMPT_MESSAGE, PERMISSION_PROMPT_TITLE},
    models::Launch,
};

/// e.g. "Mar 24, 2006"
pub fn short_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// e.g. "Friday, March 24, 2006 at 10:30 PM"
pub fn long_date(date: &DateTime<Utc>) -> String {
    date.format("%A, %B %-d, %Y at %I:%M %p").to_string()
}

/// One row of the launch list
pub fn launch_row(index: usize, launch: &Launch) -> String {
    format!(
        "{:>3}. {}  Flight #{}  {}  [{}]",
        index,
        launch.name,
        launch.flight_number,
        short_date(&launch.date_utc),
        launch.status().label()
    )
}

/// Launch list screen as text
pub struct ListScreen<'a>(pub &'a LaunchList);

/// Launch detail screen as text
pub struct DetailScreen<'a>(pub &'a LaunchDetail);

/// Launch-site map screen as text; `debug` shows the diagnostics overlay
pub struct MapScreen<'a> {
    pub map: &'a LaunchSiteMap,
    pub debug: bool,
}

fn empty_block(f: &mut fmt::Formatter<'_>, empty: &EmptyState) -> fmt::Result {
    writeln!(f, "{}", empty.title())?;
    writeln!(f, "{}", empty.message())?;
    if let Some(action) = empty.action() {
        writeln!(f, "[{}]", action)?;
    }
    Ok(())
}

impl fmt::Display for ListScreen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let list = self.0;
        if list.phase() == Phase::Loading {
            return writeln!(f, "Loading SpaceX launches...");
        }

        if let Some(label) = list.result_count_label() {
            writeln!(f, "{}", label)?;
        }
        for (index, launch) in list.visible().into_iter().enumerate() {
            writeln!(f, "{}", launch_row(index + 1, launch))?;
        }
        if let Some(empty) = list.empty_state() {
            empty_block(f, &empty)?;
        } else if let Some(error) = list.error() {
            writeln!(f, "! {}", error)?;
        }
        if list.shows_more_spinner() {
            writeln!(f, "Loading more launches...")?;
        }
        Ok(())
    }
}

impl fmt::Display for DetailScreen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let detail = self.0;
        let launch = detail.launch();

        match detail.state() {
            DetailState::Loading => return writeln!(f, "Loading launch details..."),
            DetailState::Failed(message) => {
                writeln!(f, "{}", message)?;
                for action in detail.actions() {
                    match action {
                        DetailAction::GoBack => writeln!(f, "[Go Back]")?,
                    }
                }
                return Ok(());
            }
            DetailState::Ready(_) => {}
        }

        writeln!(f, "{}", launch.name)?;
        writeln!(f, "Flight #{}", launch.flight_number)?;
        writeln!(f, "Status: {}", launch.status().label())?;
        if let Some(patch) = &launch.links.patch.large {
            writeln!(f, "Patch: {}", patch)?;
        }

        writeln!(f, "\nLaunch Date\n{}", long_date(&launch.date_utc))?;

        if let Some(details) = &launch.details {
            writeln!(f, "\nMission Details\n{}", details)?;
        }

        if let Some(pad) = detail.launchpad() {
            let site = LaunchSiteSummary::from(pad);
            writeln!(
                f,
                "\nLaunch Site\n{}\n{}\n{}\n{}",
                site.full_name, site.location, site.status, site.record
            )?;
        }

        writeln!(f, "\nLinks")?;
        let links = &launch.links;
        if let Some(webcast) = &links.webcast {
            writeln!(f, "Webcast: {}", webcast)?;
        }
        if let Some(wikipedia) = &links.wikipedia {
            writeln!(f, "Wikipedia: {}", wikipedia)?;
        }
        if links.webcast.is_none() && links.wikipedia.is_none() {
            writeln!(f, "No links available")?;
        }
        Ok(())
    }
}

impl fmt::Display for MapScreen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let map = self.map;
        if let Some(overlay) = map.debug_overlay(self.debug) {
            writeln!(f, "[debug] {}", overlay)?;
        }

        for marker in map.markers() {
            write!(
                f,
                "* {} ({:.4}, {:.4})",
                marker.title, marker.coordinate.latitude, marker.coordinate.longitude
            )?;
            if let Some(description) = &marker.description {
                write!(f, " - {}", description)?;
            }
            writeln!(f)?;
        }

        match map.location() {
            LocationState::Loading => writeln!(f, "Loading map..."),
            LocationState::Located { .. } => match map.distance_label() {
                Some(label) => writeln!(f, "{}", label),
                None => Ok(()),
            },
            LocationState::PermissionDenied => writeln!(
                f,
                "{}\n{}",
                PERMISSION_PROMPT_TITLE, PERMISSION_PROMPT_MESSAGE
            ),
            LocationState::Unavailable { .. } => writeln!(f, "Failed to load location\n[Retry]"),
        }
    }
}

pub fn launch_list(list: &LaunchList) -> String {
    ListScreen(list).to_string()
}

pub fn launch_detail(detail: &LaunchDetail) -> String {
    DetailScreen(detail).to_string()
}

pub fn launch_site_map(map: &LaunchSiteMap, debug: bool) -> String {
    MapScreen { map, debug }.to_string()
}
