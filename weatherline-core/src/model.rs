use serde::{Deserialize, Deserializer, Serialize};

use crate::units::ResolvedUnits;

/// Where the weather is being looked up.
///
/// Filled in by the geolocation service, or built from explicit coordinates
/// in which case `country_code`, `city` and `timezone` stay empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationInfo {
    pub country_code: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
}

impl LocationInfo {
    pub fn from_coordinates(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct WeatherRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub units: ResolvedUnits,
    /// IANA timezone used for the daily timestamps; `None` lets the service pick.
    pub timezone: Option<String>,
}

/// Raw current conditions, field names as returned by open-meteo.
///
/// Missing or `null` fields decode to zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentConditions {
    #[serde(rename = "temperature_2m", deserialize_with = "null_as_default")]
    pub temperature: f64,
    #[serde(rename = "relative_humidity_2m", deserialize_with = "null_as_default")]
    pub humidity: f64,
    #[serde(rename = "apparent_temperature", deserialize_with = "null_as_default")]
    pub feels_like: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub is_day: i64,
    #[serde(rename = "wind_speed_10m", deserialize_with = "null_as_default")]
    pub wind_speed: f64,
    #[serde(rename = "wind_direction_10m", deserialize_with = "null_as_default")]
    pub wind_direction: f64,
    #[serde(rename = "wind_gusts_10m", deserialize_with = "null_as_default")]
    pub wind_gusts: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub precipitation: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub showers: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub snowfall: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub rain: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub weather_code: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub cloud_cover: f64,
    #[serde(rename = "pressure_msl", deserialize_with = "null_as_default")]
    pub pressure: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub surface_pressure: f64,
}

/// Unit symbols matching [`CurrentConditions`], e.g. `"°F"` or `"km/h"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentUnits {
    #[serde(rename = "temperature_2m")]
    pub temperature: String,
    #[serde(rename = "relative_humidity_2m")]
    pub humidity: String,
    #[serde(rename = "apparent_temperature")]
    pub feels_like: String,
    #[serde(rename = "wind_speed_10m")]
    pub wind_speed: String,
    #[serde(rename = "wind_direction_10m")]
    pub wind_direction: String,
    pub precipitation: String,
    #[serde(rename = "pressure_msl")]
    pub pressure: String,
}

/// First day of the daily series. A value is `None` when the service sent
/// an empty series or a `null` entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyExtras {
    pub sunrise: Option<String>,
    pub sunset: Option<String>,
    pub uv_index_max: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub current: CurrentConditions,
    pub units: CurrentUnits,
    pub daily: DailyExtras,
    pub timezone: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
