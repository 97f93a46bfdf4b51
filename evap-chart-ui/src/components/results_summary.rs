//! Numeric summary of the latest evaporation and storage planning results.

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
struct StatProps {
    label: &'static str,
    value: String,
    unit: &'static str,
}

#[component]
fn Stat(props: StatProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px; background: #F5F9FF; border-radius: 6px; min-width: 160px;",
            div { style: "font-size: 12px; color: #666;", "{props.label}" }
            div {
                style: "font-size: 22px; font-weight: bold;",
                "{props.value} "
                span { style: "font-size: 12px; font-weight: normal; color: #666;", "{props.unit}" }
            }
        }
    }
}

/// Headline figures plus the Penman component table.
///
/// Either result may be missing (a storage planning failure leaves only the
/// evaporation figures); each half renders independently.
#[component]
pub fn ResultsSummary() -> Element {
    let state = use_context::<AppState>();
    let session = state.session.read();
    let evaporation = session.evaporation.clone();
    let planning = session.storage_planning.clone();
    drop(session);

    if evaporation.is_none() && planning.is_none() {
        return rsx! {};
    }

    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 12px; margin: 12px 0;",
            if let Some(evap) = &evaporation {
                Stat {
                    label: "Evaporation rate",
                    value: format!("{:.3}", evap.evaporation_rate),
                    unit: "mm/day",
                }
            }
            if let Some(plan) = &planning {
                Stat {
                    label: "Reservoir capacity needed",
                    value: format!("{:.2}", plan.reservoir_capacity_needed),
                    unit: "m³",
                }
                Stat {
                    label: "Annual evaporation loss",
                    value: format!("{:.2}", plan.water_balance.annual_evaporation_loss),
                    unit: "m³",
                }
                if let Some(buffer) = plan.water_balance.recommended_buffer {
                    Stat {
                        label: "Recommended buffer",
                        value: format!("{:.2}", buffer),
                        unit: "m³",
                    }
                }
            }
        }
        if let Some(evap) = &evaporation {
            table {
                style: "border-collapse: collapse; font-size: 13px; margin: 8px 0;",
                caption { style: "text-align: left; font-weight: bold; padding: 4px 0;", "Penman components" }
                tbody {
                    for (name, value, unit) in penman_rows(&evap.penman_components) {
                        tr {
                            key: "{name}",
                            td { style: "padding: 2px 12px 2px 0; color: #555;", "{name}" }
                            td { style: "padding: 2px 4px; text-align: right;", "{value}" }
                            td { style: "padding: 2px 0; color: #888;", "{unit}" }
                        }
                    }
                }
            }
        }
    }
}

fn penman_rows(c: &evap_core::evaporation::PenmanComponents) -> Vec<(&'static str, String, &'static str)> {
    let mut rows = vec![
        ("Radiation component", c.radiation_component, "mm/day"),
        ("Aerodynamic component", c.aerodynamic_component, "mm/day"),
        ("Saturation vapor pressure", c.saturation_vapor_pressure, "kPa"),
        ("Actual vapor pressure", c.actual_vapor_pressure, "kPa"),
        ("Vapor pressure deficit", c.vapor_pressure_deficit, "kPa"),
        ("Wind function", c.wind_function, ""),
    ];
    if let Some(slope) = c.slope_vapor_pressure {
        rows.push(("Slope of vapor pressure curve", slope, "kPa/°C"));
    }
    if let Some(rn) = c.net_radiation_equivalent {
        rows.push(("Net radiation equivalent", rn, "mm/day"));
    }
    rows.into_iter()
        .map(|(name, value, unit)| (name, format!("{:.3}", value), unit))
        .collect()
}
