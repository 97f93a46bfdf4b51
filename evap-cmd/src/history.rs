//! `history` and `planning-history`: read back stored calculations.

use crate::report;
use evap_core::client::HttpCalculationService;
use evap_core::service::{CalculationService, ServiceConfig};
use evap_core::session::SessionState;
use log::info;

/// Print the newest evaporation calculations as a trend table.
pub async fn run_history(config: ServiceConfig, json: bool) -> anyhow::Result<()> {
    let service = HttpCalculationService::new(config)?;
    let entries = service.evaporation_history().await?;
    info!("Service returned {} history entries", entries.len());

    let mut session = SessionState::new();
    session.replace_history(entries);
    report::print_history(&session, json)
}

/// Print stored storage planning results, newest first.
pub async fn run_planning_history(config: ServiceConfig, json: bool) -> anyhow::Result<()> {
    let service = HttpCalculationService::new(config)?;
    let plans = service.storage_planning_history().await?;
    info!("Service returned {} storage plans", plans.len());
    report::print_planning_history(&plans, json)
}
