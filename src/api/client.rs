//! Typed async client for the HBnB API.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::Instrument;
use url::Url;
use uuid::Uuid;

use crate::api::error::{ApiError, ApiResult};
use crate::api::types::{Amenity, City, Place, State, Stats, StatusResponse};
use crate::config::{ApiConfig, TimeoutConfig};
use crate::filters::SearchRequest;

/// Header carrying the per-request correlation id.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Client for the status, search and catalog endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    status_base_url: String,
}

impl ApiClient {
    /// Build a client with the configured endpoints and timeouts.
    pub fn new(api: &ApiConfig, timeouts: &TimeoutConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .timeout(Duration::from_secs(timeouts.request_secs))
            .build()
            .map_err(ApiError::Transport)?;

        Ok(Self {
            client,
            base_url: normalize_base(&api.base_url)?,
            status_base_url: normalize_base(&api.status_base_url)?,
        })
    }

    /// Client with default timeouts for a single base URL.
    pub fn with_base_url(base_url: &str) -> ApiResult<Self> {
        let api = ApiConfig {
            base_url: base_url.to_string(),
            status_base_url: base_url.to_string(),
        };
        Self::new(&api, &TimeoutConfig::default())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn status_base_url(&self) -> &str {
        &self.status_base_url
    }

    /// `GET /api/v1/status/`
    pub async fn status(&self) -> ApiResult<StatusResponse> {
        let url = format!("{}/api/v1/status/", self.status_base_url);
        self.execute("GET", "/api/v1/status/", self.client.get(url)).await
    }

    /// `POST /api/v1/places_search`
    pub async fn places_search(&self, request: &SearchRequest) -> ApiResult<Vec<Place>> {
        let url = format!("{}/api/v1/places_search", self.base_url);
        // `.json()` sets Content-Type: application/json.
        let builder = self.client.post(url).json(request);
        self.execute("POST", "/api/v1/places_search", builder).await
    }

    /// `GET /api/v1/stats`
    pub async fn stats(&self) -> ApiResult<Stats> {
        self.get("/api/v1/stats").await
    }

    /// `GET /api/v1/states`
    pub async fn states(&self) -> ApiResult<Vec<State>> {
        self.get("/api/v1/states").await
    }

    /// `GET /api/v1/states/<state_id>/cities`
    pub async fn cities(&self, state_id: &str) -> ApiResult<Vec<City>> {
        self.get(&format!("/api/v1/states/{state_id}/cities")).await
    }

    /// `GET /api/v1/amenities`
    pub async fn amenities(&self) -> ApiResult<Vec<Amenity>> {
        self.get("/api/v1/amenities").await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = format!("{}{}", self.base_url, path);
        self.execute("GET", path, self.client.get(url)).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: &'static str,
        path: &str,
        builder: RequestBuilder,
    ) -> ApiResult<T> {
        let request_id = Uuid::new_v4();
        let span = tracing::debug_span!("api_request", method, path, request_id = %request_id);

        async move {
            let resp = builder
                .header(X_REQUEST_ID, request_id.to_string())
                .send()
                .await?;

            let status = resp.status();
            let text = resp.text().await?;

            if !status.is_success() {
                tracing::debug!(status = %status, "API returned error status");
                return Err(ApiError::Status { status, body: text });
            }

            let value = serde_json::from_str::<T>(&text)?;
            tracing::debug!(status = %status, bytes = text.len(), "API request complete");
            Ok(value)
        }
        .instrument(span)
        .await
    }
}

/// Validate a base URL and strip trailing slashes so paths can be appended.
fn normalize_base(base: &str) -> ApiResult<String> {
    let url = Url::parse(base).map_err(|e| ApiError::InvalidUrl(format!("{base}: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ApiError::InvalidUrl(format!("{base}: unsupported scheme")));
    }
    Ok(base.trim_end_matches('/').to_string())
}
