//! Irrigation recommendations from the latest storage plan.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn IrrigationTable() -> Element {
    let state = use_context::<AppState>();
    let recommendations = state
        .session
        .read()
        .storage_planning
        .as_ref()
        .map(|plan| plan.irrigation_recommendations.clone())
        .unwrap_or_default();

    if recommendations.is_empty() {
        return rsx! {};
    }

    rsx! {
        section {
            style: "margin: 16px 0;",
            h3 { style: "margin: 0 0 8px 0; font-size: 16px;", "Irrigation recommendations" }
            table {
                style: "width: 100%; border-collapse: collapse; font-size: 13px;",
                thead {
                    tr {
                        style: "background: #f5f5f5; text-align: left;",
                        th { style: "padding: 6px;", "Period" }
                        th { style: "padding: 6px;", "Frequency" }
                        th { style: "padding: 6px;", "Water requirement" }
                        th { style: "padding: 6px;", "Evaporation consideration" }
                    }
                }
                tbody {
                    for rec in recommendations {
                        tr {
                            key: "{rec.period}",
                            style: "border-top: 1px solid #eee;",
                            td { style: "padding: 6px;", "{rec.period}" }
                            td { style: "padding: 6px;", "{rec.irrigation_frequency}" }
                            td { style: "padding: 6px;", "{rec.water_requirement}" }
                            td { style: "padding: 6px;", "{rec.evaporation_consideration}" }
                        }
                    }
                }
            }
        }
    }
}
