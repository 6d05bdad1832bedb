//! Launch list acquisition
//!
//! [`LaunchList`] holds the paginated launch collection of the list screen
//! together with its search query. Transitions are split in two halves:
//! a `begin_*` call decides whether a fetch may start and returns the
//! [`PageRequest`] to issue, and [`LaunchList::complete`] applies the finished
//! fetch. The async drivers (`load_initial`, `load_more`, `refresh`) glue the
//! halves to a [`LaunchApi`].
//!
//! Phases:
//!
//! - `Idle -> Loading -> Ready | Error`
//! - `Ready -> LoadingMore -> Ready`
//! - `Ready -> Refreshing -> Ready`
//! - `Error -> Loading` (retry)
//! - `Ready -> Loading` while an error is shown ("Try Again")
//!
//! Failures while loading more or refreshing return to `Ready` with the held
//! launches untouched and only the error message set.

use tracing::{error, info, warn};

use crate::{
    api::LaunchApi,
    errors::ApiError,
    lifecycle::{Unmounted, ViewLifetime},
    models::Launch,
};

/// Page size of every launch fetch
pub const ITEMS_PER_PAGE: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Ready,
    LoadingMore,
    Refreshing,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    Initial,
    More,
    Refresh,
}

/// A fetch the list has committed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub kind: FetchKind,
    pub limit: u32,
    pub offset: u32,
}

/// What to show when no launch is visible
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyState {
    /// Loading failed; offers "Try Again"
    ConnectionError { message: String },
    /// The search query matched nothing
    NoResults { query: String },
    /// The server has no launches; offers "Refresh"
    NoLaunches,
}

impl EmptyState {
    pub fn title(&self) -> &'static str {
        match self {
            EmptyState::ConnectionError { .. } => "Connection Error",
            EmptyState::NoResults { .. } => "No Results",
            EmptyState::NoLaunches => "No Launches",
        }
    }

    pub fn message(&self) -> String {
        match self {
            EmptyState::ConnectionError { message } => message.clone(),
            EmptyState::NoResults { query } => format!("No launches found for \"{}\"", query),
            EmptyState::NoLaunches => "No SpaceX launches available at the moment.".to_string(),
        }
    }

    /// Label of the recovery button, if any
    pub fn action(&self) -> Option<&'static str> {
        match self {
            EmptyState::ConnectionError { .. } => Some("Try Again"),
            EmptyState::NoResults { .. } => None,
            EmptyState::NoLaunches => Some("Refresh"),
        }
    }
}

/// Paginated, filterable launch collection
#[derive(Debug, Clone)]
pub struct LaunchList {
    launches: Vec<Launch>,
    phase: Phase,
    end_of_collection: bool,
    error: Option<String>,
    alert: Option<String>,
    query: String,
}

impl Default for LaunchList {
    fn default() -> Self {
        Self::new()
    }
}

impl LaunchList {
    pub fn new() -> Self {
        Self {
            launches: Vec::new(),
            phase: Phase::Idle,
            end_of_collection: false,
            error: None,
            alert: None,
            query: String::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Every held launch in server order, ignoring the search query
    pub fn launches(&self) -> &[Launch] {
        &self.launches
    }

    pub fn end_of_collection(&self) -> bool {
        self.end_of_collection
    }

    /// Message of the last failed fetch, cleared by the next success
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Blocking alert raised by a failed initial load; returned once
    pub fn take_alert(&mut self) -> Option<String> {
        self.alert.take()
    }

    fn is_in_flight(&self) -> bool {
        matches!(
            self.phase,
            Phase::Loading | Phase::LoadingMore | Phase::Refreshing
        )
    }

    /// Start loading the first page.
    ///
    /// Also serves the "Try Again" action, so it is permitted from `Ready`
    /// while an error is shown.
    pub fn begin_initial(&mut self) -> Option<PageRequest> {
        let retrying = self.phase == Phase::Ready && self.error.is_some();
        if !(matches!(self.phase, Phase::Idle | Phase::Error) || retrying) {
            return None;
        }
        self.phase = Phase::Loading;
        self.end_of_collection = false;
        Some(PageRequest {
            kind: FetchKind::Initial,
            limit: ITEMS_PER_PAGE,
            offset: 0,
        })
    }

    /// Start fetching the next page.
    ///
    /// Returns `None` while another fetch is in flight, after the last page,
    /// or while a search query is active.
    pub fn begin_load_more(&mut self) -> Option<PageRequest> {
        if self.phase != Phase::Ready || self.end_of_collection || self.is_filtering() {
            return None;
        }
        self.phase = Phase::LoadingMore;
        Some(PageRequest {
            kind: FetchKind::More,
            limit: ITEMS_PER_PAGE,
            offset: u32::try_from(self.launches.len()).unwrap_or(u32::MAX),
        })
    }

    pub fn begin_refresh(&mut self) -> Option<PageRequest> {
        if self.phase != Phase::Ready {
            return None;
        }
        self.phase = Phase::Refreshing;
        self.end_of_collection = false;
        Some(PageRequest {
            kind: FetchKind::Refresh,
            limit: ITEMS_PER_PAGE,
            offset: 0,
        })
    }

    fn expected_phase(kind: FetchKind) -> Phase {
        match kind {
            FetchKind::Initial => Phase::Loading,
            FetchKind::More => Phase::LoadingMore,
            FetchKind::Refresh => Phase::Refreshing,
        }
    }

    /// Apply the outcome of a fetch started by a `begin_*` call
    pub fn complete(&mut self, request: PageRequest, result: Result<Vec<Launch>, ApiError>) {
        if self.phase != Self::expected_phase(request.kind) {
            warn!(
                "Ignoring {:?} result in phase {:?}",
                request.kind, self.phase
            );
            return;
        }

        match result {
            Ok(page) => {
                let count = page.len();
                if count < request.limit as usize {
                    self.end_of_collection = true;
                }
                match request.kind {
                    FetchKind::More => self.launches.extend(page),
                    FetchKind::Initial | FetchKind::Refresh => self.launches = page,
                }
                self.error = None;
                self.phase = Phase::Ready;
                info!(
                    "Launches loaded successfully: count={}, offset={}",
                    count, request.offset
                );
            }
            Err(e) => {
                error!("Failed to load launches: {}", e);
                match request.kind {
                    FetchKind::Initial => {
                        self.phase = Phase::Error;
                        self.alert = Some(e.message.clone());
                    }
                    FetchKind::More | FetchKind::Refresh => self.phase = Phase::Ready,
                }
                self.error = Some(e.message);
            }
        }
    }

    /// Forget an in-flight fetch whose result will never arrive
    pub fn abandon(&mut self, request: PageRequest) {
        if self.phase != Self::expected_phase(request.kind) {
            return;
        }
        self.phase = match request.kind {
            FetchKind::Initial if self.launches.is_empty() => Phase::Idle,
            _ => Phase::Ready,
        };
    }

    pub async fn load_initial(
        &mut self,
        api: &dyn LaunchApi,
        lifetime: &ViewLifetime,
    ) -> Result<(), Unmounted> {
        match self.begin_initial() {
            Some(request) => self.run(request, api, lifetime).await,
            None => Ok(()),
        }
    }

    pub async fn load_more(
        &mut self,
        api: &dyn LaunchApi,
        lifetime: &ViewLifetime,
    ) -> Result<(), Unmounted> {
        match self.begin_load_more() {
            Some(request) => self.run(request, api, lifetime).await,
            None => Ok(()),
        }
    }

    pub async fn refresh(
        &mut self,
        api: &dyn LaunchApi,
        lifetime: &ViewLifetime,
    ) -> Result<(), Unmounted> {
        match self.begin_refresh() {
            Some(request) => self.run(request, api, lifetime).await,
            None => Ok(()),
        }
    }

    async fn run(
        &mut self,
        request: PageRequest,
        api: &dyn LaunchApi,
        lifetime: &ViewLifetime,
    ) -> Result<(), Unmounted> {
        match lifetime
            .guard(api.list_launches(request.limit, request.offset))
            .await
        {
            Ok(result) => {
                self.complete(request, result);
                Ok(())
            }
            Err(unmounted) => {
                self.abandon(request);
                Err(unmounted)
            }
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Whether a non-blank search query is active
    pub fn is_filtering(&self) -> bool {
        !self.query.trim().is_empty()
    }

    /// Launches whose name contains the query, case-insensitively
    pub fn visible(&self) -> Vec<&Launch> {
        if !self.is_filtering() {
            return self.launches.iter().collect();
        }
        let needle = self.query.to_lowercase();
        self.launches
            .iter()
            .filter(|launch| launch.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// e.g. "3 results", only while filtering
    pub fn result_count_label(&self) -> Option<String> {
        if !self.is_filtering() {
            return None;
        }
        let count = self.visible().len();
        Some(format!(
            "{} result{}",
            count,
            if count == 1 { "" } else { "s" }
        ))
    }

    /// Whether the "Loading more launches..." footer is shown
    pub fn shows_more_spinner(&self) -> bool {
        self.phase == Phase::LoadingMore && !self.is_filtering()
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        if matches!(self.phase, Phase::Idle | Phase::Loading) || !self.visible().is_empty() {
            return None;
        }
        if let Some(message) = &self.error {
            return Some(EmptyState::ConnectionError {
                message: message.clone(),
            });
        }
        if self.is_filtering() {
            return Some(EmptyState::NoResults {
                query: self.query.clone(),
            });
        }
        Some(EmptyState::NoLaunches)
    }
}
