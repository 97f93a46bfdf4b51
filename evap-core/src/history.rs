use crate::evaporation::lenient_timestamp;
use crate::weather::WeatherInput;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of history entries kept for display.
pub const HISTORY_LIMIT: usize = 10;

/// One past evaporation calculation from `GET /api/evaporation-history`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    /// mm/day
    pub evaporation_rate: f64,
    pub weather_input: WeatherInput,
    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Keep the first `HISTORY_LIMIT` entries. The service sends newest first and
/// the order is never changed here.
pub fn truncate_history(mut entries: Vec<HistoryEntry>) -> Vec<HistoryEntry> {
    entries.truncate(HISTORY_LIMIT);
    entries
}
