//! Chart view models derived from the session state.
//!
//! These are recomputed on every render and never cached. All structs derive
//! `Serialize` so they can be passed to D3.js as JSON.

use crate::session::SessionState;
use serde::Serialize;

/// Shared chart palette; series pick colors by fixed position.
pub const PALETTE: [&str; 8] = [
    "#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884D8", "#82CA9D", "#FFC658", "#FF7300",
];

/// One bar group in the seasonal loss chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SeasonalPoint {
    /// Capitalized season name
    pub season: String,
    /// Seasonal total loss, m³
    pub evaporation: f64,
    /// Daily loss, m³/day
    pub daily_rate: f64,
    pub factor: f64,
}

/// One slice of the Penman component breakdown.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ComponentSlice {
    pub name: &'static str,
    pub value: f64,
    pub color: &'static str,
}

/// One point on the history trend chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrendPoint {
    /// "#1" for the newest calculation
    pub calculation: String,
    pub evaporation_rate: f64,
    pub temperature: f64,
    pub humidity: f64,
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Seasonal losses in the order the service listed the seasons.
pub fn seasonal_series(state: &SessionState) -> Vec<SeasonalPoint> {
    let Some(planning) = &state.storage_planning else {
        return Vec::new();
    };
    planning
        .seasonal_analysis
        .iter()
        .map(|(season, loss)| SeasonalPoint {
            season: capitalize(season),
            evaporation: loss.seasonal_total_loss,
            daily_rate: loss.daily_evaporation_loss,
            factor: loss.percentage_factor,
        })
        .collect()
}

/// Radiation vs aerodynamic contribution to the evaporation rate.
pub fn component_breakdown(state: &SessionState) -> Vec<ComponentSlice> {
    let Some(evaporation) = &state.evaporation else {
        return Vec::new();
    };
    let components = &evaporation.penman_components;
    vec![
        ComponentSlice {
            name: "Radiation Component",
            value: components.radiation_component,
            color: PALETTE[0],
        },
        ComponentSlice {
            name: "Aerodynamic Component",
            value: components.aerodynamic_component,
            color: PALETTE[1],
        },
    ]
}

/// Cached history as a numbered trend, newest first.
pub fn history_trend(state: &SessionState) -> Vec<TrendPoint> {
    state
        .history
        .iter()
        .enumerate()
        .map(|(i, entry)| TrendPoint {
            calculation: format!("#{}", i + 1),
            evaporation_rate: entry.evaporation_rate,
            temperature: entry.weather_input.temperature,
            humidity: entry.weather_input.humidity,
        })
        .collect()
}
