use crate::evaporation::{lenient_timestamp, EvaporationResult};
use chrono::{DateTime, Utc};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Evaporation loss for one season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalLoss {
    /// Loss over the whole season, m³
    pub seasonal_total_loss: f64,
    /// Average daily loss during the season, m³/day
    pub daily_evaporation_loss: f64,
    /// Multiplier applied to the base daily rate for this season
    pub percentage_factor: f64,
}

/// Season name → loss, kept in the order the service sent them.
///
/// The service emits seasons in calendar order (spring, summer, autumn,
/// winter); a sorted map would scramble that, so entries are stored as a list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeasonalAnalysis(pub Vec<(String, SeasonalLoss)>);

impl SeasonalAnalysis {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SeasonalLoss)> {
        self.0.iter().map(|(season, loss)| (season.as_str(), loss))
    }

    pub fn get(&self, season: &str) -> Option<&SeasonalLoss> {
        self.iter().find(|(name, _)| *name == season).map(|(_, loss)| loss)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for SeasonalAnalysis {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (season, loss) in &self.0 {
            map.serialize_entry(season, loss)?;
        }
        map.end()
    }
}

struct SeasonalAnalysisVisitor;

impl<'de> Visitor<'de> for SeasonalAnalysisVisitor {
    type Value = SeasonalAnalysis;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of season name to seasonal loss")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(4));
        while let Some((season, loss)) = access.next_entry::<String, SeasonalLoss>()? {
            entries.push((season, loss));
        }
        Ok(SeasonalAnalysis(entries))
    }
}

impl<'de> Deserialize<'de> for SeasonalAnalysis {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SeasonalAnalysisVisitor)
    }
}

/// Annual water balance figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterBalance {
    /// m³ per year
    pub annual_evaporation_loss: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_buffer: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_recommended_capacity: Option<f64>,
    /// m², echoes the `surface_area` query parameter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface_area_assumed: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrrigationRecommendation {
    pub period: String,
    pub irrigation_frequency: String,
    pub water_requirement: String,
    pub evaporation_consideration: String,
}

/// Response of `POST /api/calculate-storage-planning`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoragePlanningResult {
    /// m³
    pub reservoir_capacity_needed: f64,
    pub water_balance: WaterBalance,
    #[serde(default)]
    pub seasonal_analysis: SeasonalAnalysis,
    #[serde(default)]
    pub irrigation_recommendations: Vec<IrrigationRecommendation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The evaporation calculation the plan was derived from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaporation_data: Option<EvaporationResult>,
    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLANNING_BODY: &str = r#"{
        "reservoir_capacity_needed": 1900.0,
        "seasonal_analysis": {
            "spring": {"daily_evaporation_loss": 4.16, "seasonal_total_loss": 374.4, "percentage_factor": 0.8},
            "summer": {"daily_evaporation_loss": 6.76, "seasonal_total_loss": 608.4, "percentage_factor": 1.3},
            "autumn": {"daily_evaporation_loss": 3.64, "seasonal_total_loss": 327.6, "percentage_factor": 0.7},
            "winter": {"daily_evaporation_loss": 2.08, "seasonal_total_loss": 187.2, "percentage_factor": 0.4}
        },
        "irrigation_recommendations": [
            {"period": "Summer (Mar-Jun)", "irrigation_frequency": "Every 3-4 days", "water_requirement": "High", "evaporation_consideration": "High evaporation losses"},
            {"period": "Winter (Nov-Feb)", "irrigation_frequency": "Every 7-10 days", "water_requirement": "Medium", "evaporation_consideration": "Low evaporation"}
        ],
        "water_balance": {
            "annual_evaporation_loss": 1497.6,
            "recommended_buffer": 748.8,
            "total_recommended_capacity": 2246.4,
            "surface_area_assumed": 1000
        }
    }"#;

    #[test]
    fn test_seasons_keep_wire_order() {
        let result: StoragePlanningResult = serde_json::from_str(PLANNING_BODY).unwrap();
        let seasons: Vec<&str> = result.seasonal_analysis.iter().map(|(s, _)| s).collect();
        assert_eq!(seasons, vec!["spring", "summer", "autumn", "winter"]);
        assert_eq!(result.seasonal_analysis.get("summer").unwrap().percentage_factor, 1.3);
        assert!(result.seasonal_analysis.get("monsoon").is_none());
    }

    #[test]
    fn test_water_balance_and_recommendations() {
        let result: StoragePlanningResult = serde_json::from_str(PLANNING_BODY).unwrap();
        assert_eq!(result.reservoir_capacity_needed, 1900.0);
        assert_eq!(result.water_balance.annual_evaporation_loss, 1497.6);
        assert_eq!(result.water_balance.surface_area_assumed, Some(1000.0));
        assert_eq!(result.irrigation_recommendations.len(), 2);
        assert_eq!(result.irrigation_recommendations[1].water_requirement, "Medium");
    }

    #[test]
    fn test_seasonal_analysis_serializes_as_ordered_map() {
        let result: StoragePlanningResult = serde_json::from_str(PLANNING_BODY).unwrap();
        let json = serde_json::to_string(&result.seasonal_analysis).unwrap();
        let spring = json.find("\"spring\"").unwrap();
        let winter = json.find("\"winter\"").unwrap();
        assert!(spring < winter);
        assert!(json.starts_with('{'));
    }
}
