//! SpaceX REST API client

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    config::ApiConfig,
    errors::{ApiError, LaunchTrackerError},
    models::{Launch, Launchpad},
};

/// Fields requested for each launch in a page
const LAUNCH_FIELDS: [&str; 8] = [
    "id",
    "name",
    "date_utc",
    "success",
    "links",
    "launchpad",
    "details",
    "flight_number",
];

/// Read access to the launch data source
///
/// Screens receive this as a dependency so tests can substitute a fake.
#[async_trait]
pub trait LaunchApi: Send + Sync {
    /// One page of launches, newest first
    async fn list_launches(&self, limit: u32, offset: u32) -> Result<Vec<Launch>, ApiError>;

    /// Single launchpad by id
    async fn get_launchpad(&self, id: &str) -> Result<Launchpad, ApiError>;
}

/// Request body of `POST /v5/launches/query`
#[derive(Debug, Serialize)]
pub struct LaunchQuery {
    pub query: serde_json::Map<String, serde_json::Value>,
    pub options: QueryOptions,
}

#[derive(Debug, Serialize)]
pub struct QueryOptions {
    pub limit: u32,
    pub offset: u32,
    pub sort: SortOrder,
    pub select: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct SortOrder {
    pub date_utc: &'static str,
}

impl LaunchQuery {
    /// Unfiltered page query sorted by launch date, newest first
    pub fn page(limit: u32, offset: u32) -> Self {
        Self {
            query: serde_json::Map::new(),
            options: QueryOptions {
                limit,
                offset,
                sort: SortOrder { date_utc: "desc" },
                select: LAUNCH_FIELDS.to_vec(),
            },
        }
    }
}

/// Paginated response wrapper; only the documents are used
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    pub docs: Vec<T>,
}

/// HTTP implementation of [`LaunchApi`]
#[derive(Debug, Clone)]
pub struct SpaceXClient {
    client: reqwest::Client,
    base_url: String,
}

impl SpaceXClient {
    /// Create a new client
    pub fn new(config: &ApiConfig) -> Result<Self, LaunchTrackerError> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a request and decode a JSON body, mapping every failure to [`ApiError`]
    async fn fetch<T>(&self, request: reqwest::RequestBuilder, context: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let response = request.send().await.map_err(|e| {
            warn!("{}: transport failure: {}", context, e);
            ApiError::network()
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::from_status(context, status));
        }

        response.json::<T>().await.map_err(|e| {
            warn!("{}: could not decode response: {}", context, e);
            ApiError::network()
        })
    }
}

#[async_trait]
impl LaunchApi for SpaceXClient {
    async fn list_launches(&self, limit: u32, offset: u32) -> Result<Vec<Launch>, ApiError> {
        if limit == 0 {
            return Err(ApiError::invalid_request("Page size must be at least 1"));
        }

        debug!("Fetching launches: limit={}, offset={}", limit, offset);
        let url = format!("{}/v5/launches/query", self.base_url);
        let request = self.client.post(url).json(&LaunchQuery::page(limit, offset));

        let page: Page<Launch> = self.fetch(request, "Failed to fetch launches").await?;
        Ok(page.docs)
    }

    async fn get_launchpad(&self, id: &str) -> Result<Launchpad, ApiError> {
        debug!("Fetching launchpad {}", id);
        let url = format!("{}/v4/launchpads/{}", self.base_url, id);
        self.fetch(self.client.get(url), "Failed to fetch launchpad")
            .await
    }
}
