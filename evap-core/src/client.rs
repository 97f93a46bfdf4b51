//! reqwest-backed `CalculationService`.
//!
//! The same client compiles natively (hyper) and on wasm32 (browser fetch).

use crate::error::{Result, ServiceError};
use crate::evaporation::EvaporationResult;
use crate::history::HistoryEntry;
use crate::service::{
    CalculationService, ServiceConfig, EVAPORATION_HISTORY_PATH, EVAPORATION_PATH,
    STORAGE_PLANNING_HISTORY_PATH, STORAGE_PLANNING_PATH,
};
use crate::storage::StoragePlanningResult;
use crate::weather::WeatherInput;
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

/// HTTP client for the calculation service.
#[derive(Debug, Clone)]
pub struct HttpCalculationService {
    client: Client,
    config: ServiceConfig,
}

impl HttpCalculationService {
    pub fn new(config: ServiceConfig) -> Result<Self> {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.timeout);
        let client = builder
            .build()
            .map_err(|e| ServiceError::Config(e.to_string()))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Send a request and decode a 2xx JSON body.
    async fn fetch_json<T: DeserializeOwned>(&self, url: &str, request: RequestBuilder) -> Result<T> {
        debug!("Calling calculation service: {}", url);
        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Bad response status from {}: {}", url, status);
            return Err(ServiceError::from_response(status.as_u16(), &body));
        }

        let body = response.text().await.map_err(transport_error)?;
        serde_json::from_str(&body).map_err(|e| {
            warn!("Failed to decode response from {}: {}", url, e);
            ServiceError::Decode(e.to_string())
        })
    }
}

fn transport_error(e: reqwest::Error) -> ServiceError {
    if e.is_timeout() {
        ServiceError::Transport("Request timed out".to_string())
    } else {
        ServiceError::Transport(e.to_string())
    }
}

#[async_trait(?Send)]
impl CalculationService for HttpCalculationService {
    async fn calculate_evaporation(&self, input: &WeatherInput) -> Result<EvaporationResult> {
        let url = self.config.endpoint(EVAPORATION_PATH);
        let request = self.client.post(&url).json(input);
        self.fetch_json(&url, request).await
    }

    async fn calculate_storage_planning(
        &self,
        input: &WeatherInput,
        surface_area: f64,
    ) -> Result<StoragePlanningResult> {
        let url = self.config.endpoint(STORAGE_PLANNING_PATH);
        let request = self
            .client
            .post(&url)
            .query(&[("surface_area", surface_area)])
            .json(input);
        self.fetch_json(&url, request).await
    }

    async fn evaporation_history(&self) -> Result<Vec<HistoryEntry>> {
        let url = self.config.endpoint(EVAPORATION_HISTORY_PATH);
        let request = self.client.get(&url);
        self.fetch_json(&url, request).await
    }

    async fn storage_planning_history(&self) -> Result<Vec<StoragePlanningResult>> {
        let url = self.config.endpoint(STORAGE_PLANNING_HISTORY_PATH);
        let request = self.client.get(&url);
        self.fetch_json(&url, request).await
    }
}
