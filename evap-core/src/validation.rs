//! Physical plausibility checks applied to the weather form before submission.
//!
//! Rules are evaluated in a fixed order and the first failure wins.

use crate::weather::{normalize_location, WeatherForm, WeatherInput};
use std::ops::RangeInclusive;
use thiserror::Error;

pub const TEMPERATURE_RANGE: RangeInclusive<f64> = -50.0..=60.0;
pub const HUMIDITY_RANGE: RangeInclusive<f64> = 0.0..=100.0;
pub const WIND_SPEED_RANGE: RangeInclusive<f64> = 0.0..=50.0;
pub const SOLAR_RADIATION_RANGE: RangeInclusive<f64> = 0.0..=40.0;

/// A locally detected input problem. The `Display` text is shown verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all required fields")]
    MissingFields,

    #[error("Temperature must be between -50°C and 60°C")]
    Temperature,

    #[error("Humidity must be between 0% and 100%")]
    Humidity,

    #[error("Wind speed must be between 0 and 50 m/s")]
    WindSpeed,

    #[error("Solar radiation must be between 0 and 40 MJ/m²/day")]
    SolarRadiation,

    #[error("Surface area must be a positive number")]
    SurfaceArea,
}

/// Parse a required numeric field. Blank, non-numeric and non-finite text all
/// count as missing.
fn parse_required(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn check(value: f64, range: &RangeInclusive<f64>, err: ValidationError) -> Result<f64, ValidationError> {
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(err)
    }
}

/// Validate the raw form and produce the request payload.
///
/// The location is never validated; a blank one becomes "Unknown Location".
pub fn validate(form: &WeatherForm) -> Result<WeatherInput, ValidationError> {
    let (Some(temperature), Some(humidity), Some(wind_speed), Some(solar_radiation)) = (
        parse_required(&form.temperature),
        parse_required(&form.humidity),
        parse_required(&form.wind_speed),
        parse_required(&form.solar_radiation),
    ) else {
        return Err(ValidationError::MissingFields);
    };

    Ok(WeatherInput {
        temperature: check(temperature, &TEMPERATURE_RANGE, ValidationError::Temperature)?,
        humidity: check(humidity, &HUMIDITY_RANGE, ValidationError::Humidity)?,
        wind_speed: check(wind_speed, &WIND_SPEED_RANGE, ValidationError::WindSpeed)?,
        solar_radiation: check(
            solar_radiation,
            &SOLAR_RADIATION_RANGE,
            ValidationError::SolarRadiation,
        )?,
        location: normalize_location(&form.location),
    })
}

/// Parse the reservoir surface area (m²). Must be a finite number above zero.
pub fn parse_surface_area(raw: &str) -> Result<f64, ValidationError> {
    parse_required(raw)
        .filter(|area| *area > 0.0)
        .ok_or(ValidationError::SurfaceArea)
}
