//! Text and JSON rendering of calculation results for the terminal.

use evap_core::charts::{self, ComponentSlice, SeasonalPoint, TrendPoint};
use evap_core::evaporation::EvaporationResult;
use evap_core::session::SessionState;
use evap_core::storage::StoragePlanningResult;
use serde::Serialize;
use std::fmt::Write;

/// Everything `calculate` shows: raw results plus the derived chart series.
#[derive(Debug, Clone, Serialize)]
pub struct CalculationReport {
    pub evaporation: Option<EvaporationResult>,
    pub storage_planning: Option<StoragePlanningResult>,
    pub seasonal_series: Vec<SeasonalPoint>,
    pub component_breakdown: Vec<ComponentSlice>,
}

impl CalculationReport {
    pub fn from_session(session: &SessionState) -> Self {
        Self {
            evaporation: session.evaporation.clone(),
            storage_planning: session.storage_planning.clone(),
            seasonal_series: charts::seasonal_series(session),
            component_breakdown: charts::component_breakdown(session),
        }
    }
}

pub fn format_calculation(report: &CalculationReport) -> String {
    let mut out = String::new();

    if let Some(evap) = &report.evaporation {
        let _ = writeln!(out, "Evaporation rate: {:.3} mm/day", evap.evaporation_rate);
        for slice in &report.component_breakdown {
            let _ = writeln!(out, "  {:<24}{:>10.3} mm/day", slice.name, slice.value);
        }
        let c = &evap.penman_components;
        let _ = writeln!(out, "  {:<24}{:>10.3} kPa", "Vapor pressure deficit", c.vapor_pressure_deficit);
        let _ = writeln!(out, "  {:<24}{:>10.3}", "Wind function", c.wind_function);
    }

    if let Some(plan) = &report.storage_planning {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Reservoir capacity needed: {:.2} m³",
            plan.reservoir_capacity_needed
        );
        let _ = writeln!(
            out,
            "Annual evaporation loss:   {:.2} m³",
            plan.water_balance.annual_evaporation_loss
        );
        if !report.seasonal_series.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "{:<10}{:>14}{:>14}{:>8}", "Season", "Loss (m³)", "Daily (m³)", "Factor");
            for point in &report.seasonal_series {
                let _ = writeln!(
                    out,
                    "{:<10}{:>14.2}{:>14.2}{:>8.2}",
                    point.season, point.evaporation, point.daily_rate, point.factor
                );
            }
        }
        if !plan.irrigation_recommendations.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "Irrigation recommendations:");
            for rec in &plan.irrigation_recommendations {
                let _ = writeln!(
                    out,
                    "  {}: {} ({} requirement) - {}",
                    rec.period,
                    rec.irrigation_frequency,
                    rec.water_requirement,
                    rec.evaporation_consideration
                );
            }
        }
    }

    out
}

pub fn format_trend(trend: &[TrendPoint]) -> String {
    if trend.is_empty() {
        return "No calculations recorded yet.\n".to_string();
    }
    let mut out = String::new();
    let _ = writeln!(out, "{:<6}{:>18}{:>12}{:>12}", "#", "Evap (mm/day)", "Temp (°C)", "Humid (%)");
    for point in trend {
        let _ = writeln!(
            out,
            "{:<6}{:>18.3}{:>12.1}{:>12.1}",
            point.calculation, point.evaporation_rate, point.temperature, point.humidity
        );
    }
    out
}

pub fn format_planning_history(plans: &[StoragePlanningResult]) -> String {
    if plans.is_empty() {
        return "No storage plans recorded yet.\n".to_string();
    }
    let mut out = String::new();
    for plan in plans {
        let when = plan
            .timestamp
            .map(|ts| ts.format("%Y-%m-%d %H:%M UTC").to_string())
            .unwrap_or_else(|| "unknown time".to_string());
        let location = plan
            .evaporation_data
            .as_ref()
            .and_then(|evap| evap.weather_input.as_ref())
            .map(|input| input.location.as_str())
            .unwrap_or("Unknown Location");
        let _ = writeln!(
            out,
            "{}  {:<20} capacity {:>12.2} m³  annual loss {:>12.2} m³",
            when, location, plan.reservoir_capacity_needed, plan.water_balance.annual_evaporation_loss
        );
    }
    out
}

pub fn print_calculation(report: &CalculationReport, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{}", format_calculation(report));
    }
    Ok(())
}

pub fn print_history(session: &SessionState, json: bool) -> anyhow::Result<()> {
    let trend = charts::history_trend(session);
    if json {
        println!("{}", serde_json::to_string_pretty(&trend)?);
    } else {
        print!("{}", format_trend(&trend));
    }
    Ok(())
}

pub fn print_planning_history(plans: &[StoragePlanningResult], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(plans)?);
    } else {
        print!("{}", format_planning_history(plans));
    }
    Ok(())
}
