//! Evaporation & Storage Planning Dashboard
//!
//! Collects a weather observation, asks the calculation service for the
//! Penman evaporation rate and a reservoir storage plan, and charts the
//! results alongside the most recent calculations.
//!
//! Data flow:
//! 1. On mount: initialize the D3 chart scripts and load the history list.
//! 2. On Calculate: `evap_core::pipeline::submit` validates the form, then
//!    calls evaporation → storage planning → history, writing each result
//!    into the session signal as it arrives.
//! 3. Chart effects re-derive their series from the session on every change
//!    and re-render (or clear) the D3 charts.

use evap_chart_ui::components::{
    ChartCard, ErrorDisplay, IrrigationTable, LoadingSpinner, ResultsSummary, WeatherFormPanel,
};
use evap_chart_ui::js_bridge::{self, ChartKind};
use evap_chart_ui::state::AppState;
use evap_core::charts::{self, PALETTE};
use evap_core::client::HttpCalculationService;
use evap_core::pipeline::{self, SubmitOutcome};
use evap_core::service::ServiceConfig;
use dioxus::prelude::*;

/// Compile-time override for the calculation service location.
const API_BASE_URL: Option<&str> = option_env!("EVAP_API_BASE_URL");

const SEASONAL_CHART_ID: &str = "seasonal-chart";
const COMPONENT_CHART_ID: &str = "component-chart";
const TREND_CHART_ID: &str = "trend-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("evaporation-root"))
        .launch(App);
}

/// Service base URL: the build-time override, else the page's own origin.
fn service_base_url() -> Option<String> {
    if let Some(url) = API_BASE_URL.filter(|u| !u.trim().is_empty()) {
        return Some(url.to_string());
    }
    web_sys::window().and_then(|w| w.location().origin().ok())
}

fn build_service() -> Result<HttpCalculationService, String> {
    let base_url = service_base_url()
        .ok_or_else(|| "Could not determine the calculation service URL.".to_string())?;
    log::info!("Using calculation service at {}", base_url);
    HttpCalculationService::new(ServiceConfig::new(base_url)).map_err(|e| e.to_string())
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let service = use_hook(build_service);

    // ─── Effect 1: chart scripts + initial history, once on mount ───
    let mount_service = service.clone();
    use_effect(move || {
        js_bridge::init_charts();
        match mount_service.clone() {
            Ok(service) => {
                spawn(async move {
                    pipeline::refresh_history(&mut state, &service).await;
                });
            }
            Err(e) => {
                log::error!("Failed to create calculation service client: {}", e);
                state.session.write().error = Some(e);
            }
        }
    });

    // ─── Effects 2-4: re-derive and render each chart on session change ───
    // A re-render cancels that chart's pending poll, so edits never stack timers.
    use_effect(move || {
        let series = charts::seasonal_series(&state.session.read());
        let config = serde_json::json!({
            "yAxisLabel": "Evaporation loss (m³)",
            "yUnit": "m³",
            "color": PALETTE[0],
        });
        js_bridge::render_chart(ChartKind::Seasonal, SEASONAL_CHART_ID, &series, &config);
    });

    use_effect(move || {
        let slices = charts::component_breakdown(&state.session.read());
        let config = serde_json::json!({ "unit": "mm/day" });
        js_bridge::render_chart(ChartKind::Components, COMPONENT_CHART_ID, &slices, &config);
    });

    use_effect(move || {
        let trend = charts::history_trend(&state.session.read());
        let config = serde_json::json!({ "colors": [PALETTE[0], PALETTE[3], PALETTE[1]] });
        js_bridge::render_chart(ChartKind::Trend, TREND_CHART_ID, &trend, &config);
    });

    let submit_service = service.clone();
    let on_submit = move |_: ()| {
        let Ok(service) = submit_service.clone() else {
            return;
        };
        spawn(async move {
            match pipeline::submit(&mut state, &service).await {
                SubmitOutcome::Completed => log::info!("Calculation complete"),
                SubmitOutcome::Rejected(reason) => log::info!("Submission not sent: {}", reason),
                SubmitOutcome::Failed(stage) => log::warn!("Calculation failed at {:?}", stage),
            }
        });
    };

    // Derivers are cheap; recompute for the placeholders as well.
    let (loading, has_seasons, has_components, has_history) = {
        let session = state.session.read();
        (
            session.loading,
            !charts::seasonal_series(&session).is_empty(),
            !charts::component_breakdown(&session).is_empty(),
            !charts::history_trend(&session).is_empty(),
        )
    };

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 960px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            h2 { style: "margin: 8px 0;", "Penman Evaporation & Storage Planning" }
            p {
                style: "font-size: 13px; color: #666; margin: 0 0 8px 0;",
                "Enter a daily weather observation to estimate open-water evaporation and the reservoir storage needed to offset it."
            }

            WeatherFormPanel { on_submit: on_submit }

            ErrorDisplay {}

            if loading {
                LoadingSpinner { message: "Calculating evaporation and storage plan...".to_string() }
            }

            ResultsSummary {}

            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 12px;",
                ChartCard {
                    id: SEASONAL_CHART_ID.to_string(),
                    title: "Seasonal evaporation loss".to_string(),
                    unit_description: "Total loss per 90-day season, m³".to_string(),
                    has_data: has_seasons,
                    empty_message: "Run a calculation to see the seasonal breakdown.".to_string(),
                }
                ChartCard {
                    id: COMPONENT_CHART_ID.to_string(),
                    title: "Penman components".to_string(),
                    unit_description: "Radiation vs aerodynamic contribution, mm/day".to_string(),
                    has_data: has_components,
                    empty_message: "Run a calculation to see the component breakdown.".to_string(),
                }
            }

            IrrigationTable {}

            ChartCard {
                id: TREND_CHART_ID.to_string(),
                title: "Recent calculations".to_string(),
                unit_description: "Newest first (#1); evaporation on the left axis, temperature and humidity on the right".to_string(),
                has_data: has_history,
                empty_message: "No calculations recorded yet.".to_string(),
            }
        }
    }
}
