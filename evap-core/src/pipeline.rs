//! Submission pipeline: evaporation → storage planning → history refresh.
//!
//! Each step runs only if the previous one succeeded and every call is awaited
//! before the next starts. State is touched only through `SessionStore::update`
//! so no borrow is held across a network call.

use crate::history::HISTORY_LIMIT;
use crate::service::CalculationService;
use crate::session::{SessionStore, Stage, SubmitRejected};
use log::{info, warn};

/// How a call to [`submit`] ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Both calculations stored
    Completed,
    /// Never reached the network
    Rejected(SubmitRejected),
    /// A service call failed; the error slot holds the message
    Failed(Stage),
}

/// Validate the current form and run both calculations, then refresh history.
pub async fn submit<S, C>(store: &mut S, service: &C) -> SubmitOutcome
where
    S: SessionStore,
    C: CalculationService + ?Sized,
{
    let submission = match store.update(|s| s.begin_submission()) {
        Ok(submission) => submission,
        Err(rejected) => return SubmitOutcome::Rejected(rejected),
    };

    info!(
        "Calculating evaporation for {} (surface area {} m²)",
        submission.input.location, submission.surface_area
    );
    match service.calculate_evaporation(&submission.input).await {
        Ok(result) => store.update(|s| s.record_evaporation(result)),
        Err(e) => {
            warn!("Evaporation calculation failed: {}", e);
            store.update(|s| s.record_failure(Stage::Evaporation, &e.to_string()));
            return SubmitOutcome::Failed(Stage::Evaporation);
        }
    }

    match service
        .calculate_storage_planning(&submission.input, submission.surface_area)
        .await
    {
        Ok(result) => store.update(|s| s.record_storage_planning(result)),
        Err(e) => {
            warn!("Storage planning calculation failed: {}", e);
            store.update(|s| s.record_failure(Stage::StoragePlanning, &e.to_string()));
            return SubmitOutcome::Failed(Stage::StoragePlanning);
        }
    }

    refresh_history(store, service).await;
    store.update(|s| s.finish_submission());
    SubmitOutcome::Completed
}

/// Replace the cached history with the newest entries from the service.
///
/// Best effort: a failure is logged and the previous cache is kept. Returns
/// whether the cache was replaced.
pub async fn refresh_history<S, C>(store: &mut S, service: &C) -> bool
where
    S: SessionStore,
    C: CalculationService + ?Sized,
{
    match service.evaporation_history().await {
        Ok(entries) => {
            info!(
                "Fetched {} history entries (keeping at most {})",
                entries.len(),
                HISTORY_LIMIT
            );
            store.update(|s| s.replace_history(entries));
            true
        }
        Err(e) => {
            warn!("Failed to fetch evaporation history: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Result, ServiceError};
    use crate::evaporation::{EvaporationResult, PenmanComponents};
    use crate::history::HistoryEntry;
    use crate::session::SessionState;
    use crate::storage::{SeasonalAnalysis, SeasonalLoss, StoragePlanningResult, WaterBalance};
    use crate::validation::ValidationError;
    use crate::weather::{WeatherForm, WeatherInput};
    use async_trait::async_trait;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Evaporation(WeatherInput),
        StoragePlanning(WeatherInput, f64),
        History,
    }

    /// Scripted service that records every call it receives.
    struct MockService {
        calls: RefCell<Vec<Call>>,
        evaporation: Result<EvaporationResult>,
        storage: Result<StoragePlanningResult>,
        history: Result<Vec<HistoryEntry>>,
    }

    impl MockService {
        fn succeeding() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                evaporation: Ok(evaporation(5.2)),
                storage: Ok(storage(1900.0)),
                history: Ok(vec![history_entry("latest", 5.2)]),
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl CalculationService for MockService {
        async fn calculate_evaporation(&self, input: &WeatherInput) -> Result<EvaporationResult> {
            self.calls.borrow_mut().push(Call::Evaporation(input.clone()));
            self.evaporation.clone()
        }

        async fn calculate_storage_planning(
            &self,
            input: &WeatherInput,
            surface_area: f64,
        ) -> Result<StoragePlanningResult> {
            self.calls
                .borrow_mut()
                .push(Call::StoragePlanning(input.clone(), surface_area));
            self.storage.clone()
        }

        async fn evaporation_history(&self) -> Result<Vec<HistoryEntry>> {
            self.calls.borrow_mut().push(Call::History);
            self.history.clone()
        }

        async fn storage_planning_history(&self) -> Result<Vec<StoragePlanningResult>> {
            Ok(Vec::new())
        }
    }

    fn evaporation(rate: f64) -> EvaporationResult {
        EvaporationResult {
            evaporation_rate: rate,
            penman_components: PenmanComponents {
                radiation_component: 4.1,
                aerodynamic_component: 1.1,
                saturation_vapor_pressure: 3.168,
                actual_vapor_pressure: 1.901,
                vapor_pressure_deficit: 1.267,
                wind_function: 5.408,
                slope_vapor_pressure: None,
                net_radiation_equivalent: None,
            },
            id: None,
            weather_input: None,
            timestamp: None,
        }
    }

    fn storage(capacity: f64) -> StoragePlanningResult {
        StoragePlanningResult {
            reservoir_capacity_needed: capacity,
            water_balance: WaterBalance {
                annual_evaporation_loss: capacity / 1.5,
                recommended_buffer: None,
                total_recommended_capacity: None,
                surface_area_assumed: Some(1000.0),
            },
            seasonal_analysis: SeasonalAnalysis(vec![(
                "summer".to_string(),
                SeasonalLoss {
                    seasonal_total_loss: 608.4,
                    daily_evaporation_loss: 6.76,
                    percentage_factor: 1.3,
                },
            )]),
            irrigation_recommendations: Vec::new(),
            id: None,
            evaporation_data: None,
            timestamp: None,
        }
    }

    fn history_entry(id: &str, rate: f64) -> HistoryEntry {
        HistoryEntry {
            id: id.to_string(),
            evaporation_rate: rate,
            weather_input: WeatherInput {
                temperature: 25.0,
                humidity: 60.0,
                wind_speed: 2.0,
                solar_radiation: 15.0,
                location: "Unknown Location".to_string(),
            },
            timestamp: None,
        }
    }

    fn session() -> SessionState {
        let mut state = SessionState::new();
        state.form = WeatherForm {
            temperature: "25".to_string(),
            humidity: "60".to_string(),
            wind_speed: "2".to_string(),
            solar_radiation: "15".to_string(),
            location: String::new(),
        };
        state
    }

    #[tokio::test]
    async fn test_successful_submission_stores_both_results() {
        let service = MockService::succeeding();
        let mut state = session();

        let outcome = submit(&mut state, &service).await;

        assert_eq!(outcome, SubmitOutcome::Completed);
        assert_eq!(state.evaporation.as_ref().unwrap().evaporation_rate, 5.2);
        assert_eq!(
            state.storage_planning.as_ref().unwrap().reservoir_capacity_needed,
            1900.0
        );
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert_eq!(state.history.len(), 1);

        let calls = service.calls();
        assert_eq!(calls.len(), 3);
        let Call::Evaporation(sent) = &calls[0] else {
            panic!("first call should be evaporation, got {:?}", calls[0]);
        };
        assert_eq!(sent.location, "Unknown Location");
        assert_eq!(calls[1], Call::StoragePlanning(sent.clone(), 1000.0));
        assert_eq!(calls[2], Call::History);
    }

    #[tokio::test]
    async fn test_validation_failure_makes_no_calls() {
        let service = MockService::succeeding();
        let mut state = session();
        state.form.solar_radiation.clear();

        let outcome = submit(&mut state, &service).await;

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(SubmitRejected::Invalid(ValidationError::MissingFields))
        );
        assert!(service.calls().is_empty());
        assert_eq!(state.error.as_deref(), Some("Please fill in all required fields"));
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_evaporation_rejection_stops_pipeline() {
        let mut service = MockService::succeeding();
        service.evaporation = Err(ServiceError::from_response(
            400,
            r#"{"detail":"invalid wind function"}"#,
        ));
        let mut state = session();

        let outcome = submit(&mut state, &service).await;

        assert_eq!(outcome, SubmitOutcome::Failed(Stage::Evaporation));
        assert_eq!(
            state.error.as_deref(),
            Some("Error calculating evaporation: invalid wind function")
        );
        assert!(state.evaporation.is_none());
        assert!(state.storage_planning.is_none());
        assert!(!state.loading);
        assert_eq!(service.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_storage_timeout_keeps_evaporation_result() {
        let mut service = MockService::succeeding();
        service.storage = Err(ServiceError::Transport("Request timed out".to_string()));
        let mut state = session();

        let outcome = submit(&mut state, &service).await;

        assert_eq!(outcome, SubmitOutcome::Failed(Stage::StoragePlanning));
        assert_eq!(state.evaporation.as_ref().unwrap().evaporation_rate, 5.2);
        assert!(state.storage_planning.is_none());
        assert_eq!(
            state.error.as_deref(),
            Some("Error calculating storage planning: Request timed out")
        );
        assert!(!state.loading);
        // History is not refreshed after a failed calculation.
        assert!(!service.calls().contains(&Call::History));
    }

    #[tokio::test]
    async fn test_history_failure_is_swallowed() {
        let mut service = MockService::succeeding();
        service.history = Err(ServiceError::Transport("connection reset".to_string()));
        let mut state = session();
        state.history = vec![history_entry("cached", 3.3)];

        let outcome = submit(&mut state, &service).await;

        assert_eq!(outcome, SubmitOutcome::Completed);
        assert!(state.error.is_none());
        assert!(!state.loading);
        assert_eq!(state.history.len(), 1);
        assert_eq!(state.history[0].id, "cached");
    }

    #[tokio::test]
    async fn test_submission_rejected_while_in_flight() {
        let service = MockService::succeeding();
        let mut state = session();
        state.loading = true;

        let outcome = submit(&mut state, &service).await;

        assert_eq!(outcome, SubmitOutcome::Rejected(SubmitRejected::InFlight));
        assert!(service.calls().is_empty());
        assert!(state.loading);
    }

    #[tokio::test]
    async fn test_new_results_replace_old_ones() {
        let mut service = MockService::succeeding();
        let mut state = session();
        submit(&mut state, &service).await;

        service.evaporation = Ok(evaporation(7.5));
        service.storage = Ok(storage(2400.0));
        submit(&mut state, &service).await;

        assert_eq!(state.evaporation.as_ref().unwrap().evaporation_rate, 7.5);
        assert_eq!(
            state.storage_planning.as_ref().unwrap().reservoir_capacity_needed,
            2400.0
        );
    }

    #[tokio::test]
    async fn test_storage_failure_after_success_drops_old_plan() {
        let mut service = MockService::succeeding();
        let mut state = session();
        submit(&mut state, &service).await;

        service.evaporation = Ok(evaporation(7.5));
        service.storage = Err(ServiceError::Transport("Request timed out".to_string()));
        let outcome = submit(&mut state, &service).await;

        assert_eq!(outcome, SubmitOutcome::Failed(Stage::StoragePlanning));
        assert_eq!(state.evaporation.as_ref().unwrap().evaporation_rate, 7.5);
        assert!(state.storage_planning.is_none());
        assert_eq!(
            state.error.as_deref(),
            Some("Error calculating storage planning: Request timed out")
        );
    }

    #[tokio::test]
    async fn test_refresh_history_truncates_to_limit() {
        let mut service = MockService::succeeding();
        service.history = Ok((0..15)
            .map(|i| history_entry(&format!("calc-{i}"), i as f64))
            .collect());
        let mut state = SessionState::new();

        assert!(refresh_history(&mut state, &service).await);
        assert_eq!(state.history.len(), HISTORY_LIMIT);
        assert_eq!(state.history[0].id, "calc-0");
    }

    #[tokio::test]
    async fn test_refresh_history_failure_keeps_cache() {
        let mut service = MockService::succeeding();
        service.history = Err(ServiceError::Rejected {
            status: 500,
            detail: "Request failed with status code 500".to_string(),
        });
        let mut state = SessionState::new();
        state.history = vec![history_entry("cached", 1.0)];

        assert!(!refresh_history(&mut state, &service).await);
        assert_eq!(state.history[0].id, "cached");
        assert!(state.error.is_none());
    }
}
