use crate::weather::WeatherInput;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Accept RFC 3339 timestamps as well as the naive ISO form the service emits
/// for records read back from storage (assumed UTC). Anything else is dropped
/// rather than failing the whole response.
pub(crate) fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| {
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M:%S%.f")
                    .ok()
                    .map(|naive| naive.and_utc())
            })
    }))
}

/// Sub-terms of the Penman equation as reported by the calculation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PenmanComponents {
    /// Radiation-driven term (mm/day)
    pub radiation_component: f64,
    /// Wind/vapor-deficit-driven term (mm/day)
    pub aerodynamic_component: f64,
    /// es, kPa
    pub saturation_vapor_pressure: f64,
    /// ea, kPa
    pub actual_vapor_pressure: f64,
    /// es - ea, kPa
    pub vapor_pressure_deficit: f64,
    /// f(u)
    pub wind_function: f64,
    /// Δ, kPa/°C
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slope_vapor_pressure: Option<f64>,
    /// Net radiation expressed as mm/day of evaporated water
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_radiation_equivalent: Option<f64>,
}

/// Response of `POST /api/calculate-evaporation`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaporationResult {
    /// Evaporation rate in mm/day
    pub evaporation_rate: f64,
    pub penman_components: PenmanComponents,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Echo of the submitted observation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather_input: Option<WeatherInput>,
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
    use chrono::TimeZone;

    #[test]
    fn test_parse_full_service_response() {
        let body = r#"{
            "id": "4f1c2a4e-0000-4000-8000-000000000001",
            "evaporation_rate": 5.2,
            "weather_input": {"temperature":25.0,"humidity":60.0,"wind_speed":2.0,"solar_radiation":15.0,"location":"Unknown Location"},
            "penman_components": {
                "radiation_component": 4.1,
                "aerodynamic_component": 1.1,
                "saturation_vapor_pressure": 3.168,
                "actual_vapor_pressure": 1.901,
                "vapor_pressure_deficit": 1.267,
                "slope_vapor_pressure": 0.189,
                "wind_function": 5.408,
                "net_radiation_equivalent": 6.122
            },
            "timestamp": "2026-10-18T09:30:00Z"
        }"#;
        let result: EvaporationResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.evaporation_rate, 5.2);
        assert_eq!(result.penman_components.radiation_component, 4.1);
        assert_eq!(result.penman_components.slope_vapor_pressure, Some(0.189));
        assert_eq!(result.weather_input.unwrap().location, "Unknown Location");
        assert!(result.timestamp.is_some());
    }

    #[test]
    fn test_naive_timestamp_is_read_as_utc() {
        let body = r#"{
            "evaporation_rate": 3.0,
            "penman_components": {
                "radiation_component": 2.0,
                "aerodynamic_component": 1.0,
                "saturation_vapor_pressure": 1.0,
                "actual_vapor_pressure": 0.5,
                "vapor_pressure_deficit": 0.5,
                "wind_function": 2.6
            },
            "timestamp": "2026-10-18T09:30:00.250000"
        }"#;
        let result: EvaporationResult = serde_json::from_str(body).unwrap();
        let ts = result.timestamp.unwrap();
        let expected = Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap()
            + chrono::Duration::milliseconds(250);
        assert_eq!(ts, expected);
    }

    #[test]
    fn test_parse_minimal_response() {
        let body = r#"{
            "evaporation_rate": 0.0,
            "penman_components": {
                "radiation_component": 0.0,
                "aerodynamic_component": 0.0,
                "saturation_vapor_pressure": 0.0,
                "actual_vapor_pressure": 0.0,
                "vapor_pressure_deficit": 0.0,
                "wind_function": 2.6
            }
        }"#;
        let result: EvaporationResult = serde_json::from_str(body).unwrap();
        assert!(result.id.is_none());
        assert!(result.timestamp.is_none());
        assert!(result.penman_components.net_radiation_equivalent.is_none());
    }
}
