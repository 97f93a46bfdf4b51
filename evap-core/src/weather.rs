use serde::{Deserialize, Deserializer, Serialize};

/// Location sent to the service when the user leaves the field blank.
pub const DEFAULT_LOCATION: &str = "Unknown Location";

/// Initial reservoir surface area (m²) shown in the form.
pub const DEFAULT_SURFACE_AREA: &str = "1000";

/// Raw, unvalidated form values exactly as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeatherForm {
    pub temperature: String,
    pub humidity: String,
    pub wind_speed: String,
    pub solar_radiation: String,
    pub location: String,
}

impl WeatherForm {
    /// Build a form from already-known numeric values (used by the CLI).
    pub fn from_values(
        temperature: f64,
        humidity: f64,
        wind_speed: f64,
        solar_radiation: f64,
        location: Option<&str>,
    ) -> Self {
        Self {
            temperature: temperature.to_string(),
            humidity: humidity.to_string(),
            wind_speed: wind_speed.to_string(),
            solar_radiation: solar_radiation.to_string(),
            location: location.unwrap_or_default().to_string(),
        }
    }
}

/// Validated weather observation, the request body of both calculation endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherInput {
    /// Air temperature in °C
    pub temperature: f64,
    /// Relative humidity in %
    pub humidity: f64,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Solar radiation in MJ/m²/day
    pub solar_radiation: f64,
    #[serde(default = "default_location", deserialize_with = "location_or_default")]
    pub location: String,
}

fn default_location() -> String {
    DEFAULT_LOCATION.to_string()
}

/// Stored records may carry `"location": null`.
fn location_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.unwrap_or_else(default_location))
}

/// Trim a user-entered location, substituting the default for blank input.
pub fn normalize_location(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        default_location()
    } else {
        trimmed.to_string()
    }
}
