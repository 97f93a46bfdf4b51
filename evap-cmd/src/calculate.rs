//! `calculate`: run one observation through the full submission pipeline.

use crate::report::{self, CalculationReport};
use anyhow::bail;
use evap_core::client::HttpCalculationService;
use evap_core::pipeline::{self, SubmitOutcome};
use evap_core::service::ServiceConfig;
use evap_core::session::SessionState;
use evap_core::weather::WeatherForm;
use log::info;

/// Command-line weather observation.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub solar_radiation: f64,
    pub location: Option<String>,
    pub surface_area: f64,
}

/// Seed a fresh session with the observation, as if typed into the form.
pub fn session_for(observation: &Observation) -> SessionState {
    let mut session = SessionState::new();
    session.form = WeatherForm::from_values(
        observation.temperature,
        observation.humidity,
        observation.wind_speed,
        observation.solar_radiation,
        observation.location.as_deref(),
    );
    session.surface_area = observation.surface_area.to_string();
    session
}

pub async fn run_calculate(
    config: ServiceConfig,
    observation: Observation,
    json: bool,
) -> anyhow::Result<()> {
    info!("Using calculation service at {}", config.base_url);
    let service = HttpCalculationService::new(config)?;
    let mut session = session_for(&observation);

    let outcome = pipeline::submit(&mut session, &service).await;
    let report = CalculationReport::from_session(&session);

    match outcome {
        SubmitOutcome::Completed => {
            report::print_calculation(&report, json)?;
            Ok(())
        }
        SubmitOutcome::Rejected(reason) => bail!("{}", reason),
        SubmitOutcome::Failed(stage) => {
            // Whatever finished before the failure is still worth showing.
            if report.evaporation.is_some() {
                report::print_calculation(&report, json)?;
            }
            let message = session
                .error
                .unwrap_or_else(|| format!("Calculation failed at {:?}", stage));
            bail!(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evap_core::validation::validate;

    #[test]
    fn test_session_for_round_trips_through_validation() {
        let observation = Observation {
            temperature: 25.0,
            humidity: 60.0,
            wind_speed: 2.0,
            solar_radiation: 15.0,
            location: None,
            surface_area: 2500.0,
        };
        let mut session = session_for(&observation);
        assert_eq!(session.surface_area, "2500");

        let input = validate(&session.form).unwrap();
        assert_eq!(input.temperature, 25.0);
        assert_eq!(input.location, "Unknown Location");

        let submission = session.begin_submission().unwrap();
        assert_eq!(submission.surface_area, 2500.0);
    }

    #[test]
    fn test_out_of_range_observation_is_rejected_locally() {
        let observation = Observation {
            temperature: 25.0,
            humidity: 130.0,
            wind_speed: 2.0,
            solar_radiation: 15.0,
            location: Some("Lake Kariba".to_string()),
            surface_area: 1000.0,
        };
        let mut session = session_for(&observation);
        assert!(session.begin_submission().is_err());
        assert_eq!(
            session.error.as_deref(),
            Some("Humidity must be between 0% and 100%")
        );
    }
}
