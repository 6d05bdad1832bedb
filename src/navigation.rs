//! Screen stack

use thiserror::Error;

use crate::models::{Launch, Launchpad};

/// A screen together with the data it was opened with
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    LaunchList,
    LaunchDetail { launch: Launch },
    Map { launchpad: Launchpad },
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Route::LaunchList => "LaunchList",
            Route::LaunchDetail { .. } => "LaunchDetail",
            Route::Map { .. } => "Map",
        }
    }

    /// Header title
    pub fn title(&self) -> &str {
        match self {
            Route::LaunchList => "SpaceX Launches",
            Route::LaunchDetail { launch } => launch.name.as_str(),
            Route::Map { launchpad } => launchpad.name.as_str(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Cannot navigate from {from} to {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },

    #[error("Already at the first screen")]
    AtRoot,
}

/// Stack of open screens, rooted at the launch list
#[derive(Debug, Clone)]
pub struct Navigator {
    root: Route,
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            root: Route::LaunchList,
            stack: Vec::new(),
        }
    }

    pub fn current(&self) -> &Route {
        self.stack.last().unwrap_or(&self.root)
    }

    /// Number of open screens, the root included
    pub fn depth(&self) -> usize {
        self.stack.len() + 1
    }

    /// Open `route` on top of the current screen.
    ///
    /// Only list -> detail and detail -> map are valid.
    pub fn push(&mut self, route: Route) -> Result<(), NavigationError> {
        let valid = matches!(
            (self.current(), &route),
            (Route::LaunchList, Route::LaunchDetail { .. })
                | (Route::LaunchDetail { .. }, Route::Map { .. })
        );
        if !valid {
            return Err(NavigationError::InvalidTransition {
                from: self.current().name(),
                to: route.name(),
            });
        }
        self.stack.push(route);
        Ok(())
    }

    /// Close the current screen and return it. The root cannot be closed.
    pub fn back(&mut self) -> Result<Route, NavigationError> {
        self.stack.pop().ok_or(NavigationError::AtRoot)
    }
}
