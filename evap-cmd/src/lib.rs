//! Command implementations for the evaporation CLI.
//!
//! Each subcommand drives the same `evap_core` pipeline the dashboard uses,
//! against a calculation service reached over HTTP.

use clap::{Args, Subcommand};
use evap_core::service::{ServiceConfig, DEFAULT_BASE_URL};
use std::time::Duration;

pub mod calculate;
pub mod history;
pub mod report;

/// Where to find the calculation service.
#[derive(Args, Debug, Clone)]
pub struct ServiceArgs {
    /// Base URL of the calculation service
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    pub timeout_secs: u64,
}

impl ServiceArgs {
    pub fn config(&self) -> ServiceConfig {
        ServiceConfig::new(self.base_url.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Calculate evaporation and a storage plan for one weather observation
    Calculate {
        /// Air temperature, °C (-50 to 60)
        #[arg(short = 't', long, allow_hyphen_values = true)]
        temperature: f64,

        /// Relative humidity, % (0 to 100)
        #[arg(short = 'u', long)]
        humidity: f64,

        /// Wind speed, m/s (0 to 50)
        #[arg(short = 'w', long)]
        wind_speed: f64,

        /// Solar radiation, MJ/m²/day (0 to 40)
        #[arg(short = 's', long)]
        solar_radiation: f64,

        /// Location label stored with the calculation
        #[arg(short = 'l', long)]
        location: Option<String>,

        /// Reservoir surface area, m²
        #[arg(short = 'a', long, default_value_t = 1000.0)]
        surface_area: f64,

        /// Print the results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the most recent evaporation calculations
    History {
        /// Print the trend series as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show stored storage planning results
    PlanningHistory {
        /// Print the results as JSON
        #[arg(long)]
        json: bool,
    },
}

pub async fn run(config: ServiceConfig, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Calculate {
            temperature,
            humidity,
            wind_speed,
            solar_radiation,
            location,
            surface_area,
            json,
        } => {
            let observation = calculate::Observation {
                temperature,
                humidity,
                wind_speed,
                solar_radiation,
                location,
                surface_area,
            };
            calculate::run_calculate(config, observation, json).await
        }
        Command::History { json } => history::run_history(config, json).await,
        Command::PlanningHistory { json } => history::run_planning_history(config, json).await,
    }
}
