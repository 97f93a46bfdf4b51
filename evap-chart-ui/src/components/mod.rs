//! Reusable Dioxus RSX components for the evaporation dashboard.

mod chart_card;
mod error_display;
mod irrigation_table;
mod loading_spinner;
mod results_summary;
mod weather_form;

pub use chart_card::ChartCard;
pub use error_display::ErrorDisplay;
pub use irrigation_table::IrrigationTable;
pub use loading_spinner::LoadingSpinner;
pub use results_summary::ResultsSummary;
pub use weather_form::WeatherFormPanel;
