//! The seam between the request pipeline and the calculation service.

use crate::error::Result;
use crate::evaporation::EvaporationResult;
use crate::history::HistoryEntry;
use crate::storage::StoragePlanningResult;
use crate::weather::WeatherInput;
use async_trait::async_trait;
use std::time::Duration;

/// Default service location for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8001";

/// Default per-request timeout for native clients.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const EVAPORATION_PATH: &str = "/api/calculate-evaporation";
pub const STORAGE_PLANNING_PATH: &str = "/api/calculate-storage-planning";
pub const EVAPORATION_HISTORY_PATH: &str = "/api/evaporation-history";
pub const STORAGE_PLANNING_HISTORY_PATH: &str = "/api/storage-planning-history";

/// Where and how to reach the calculation service.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    /// Scheme + host (+ optional path prefix), without trailing slash
    pub base_url: String,
    /// Ignored on wasm32, where the browser's fetch stack owns timeouts
    pub timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ServiceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Join an API path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// Operations the dashboard needs from the calculation service.
///
/// Futures are not required to be `Send`: the dashboard runs on the browser's
/// single thread and the CLI on a current-thread runtime.
#[async_trait(?Send)]
pub trait CalculationService {
    async fn calculate_evaporation(&self, input: &WeatherInput) -> Result<EvaporationResult>;

    async fn calculate_storage_planning(
        &self,
        input: &WeatherInput,
        surface_area: f64,
    ) -> Result<StoragePlanningResult>;

    /// Full history, newest first. Callers truncate.
    async fn evaporation_history(&self) -> Result<Vec<HistoryEntry>>;

    async fn storage_planning_history(&self) -> Result<Vec<StoragePlanningResult>>;
}
