use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::{
    config::ServiceSettings,
    error::{ServiceError, truncate_body},
    model::{CurrentConditions, CurrentUnits, DailyExtras, WeatherReport, WeatherRequest},
};

use super::{WeatherProvider, http_client};

const CURRENT_FIELDS: &[&str] = &[
    "temperature_2m",
    "relative_humidity_2m",
    "apparent_temperature",
    "is_day",
    "wind_speed_10m",
    "wind_direction_10m",
    "wind_gusts_10m",
    "precipitation",
    "showers",
    "snowfall",
    "rain",
    "weather_code",
    "cloud_cover",
    "pressure_msl",
    "surface_pressure",
];

const DAILY_FIELDS: &str = "sunrise,sunset,uv_index_max";

/// Lets open-meteo derive the timezone from the coordinates.
const AUTO_TIMEZONE: &str = "auto";

#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    base_url: String,
    http: Client,
}

impl OpenMeteoProvider {
    pub fn new(settings: &ServiceSettings) -> Result<Self> {
        Ok(Self {
            base_url: settings.weather_url.clone(),
            http: http_client(settings.timeout)?,
        })
    }
}

/// Query parameters for a forecast request.
pub fn forecast_query(request: &WeatherRequest) -> Vec<(&'static str, String)> {
    let timezone = request
        .timezone
        .as_deref()
        .map(str::trim)
        .filter(|tz| !tz.is_empty())
        .unwrap_or(AUTO_TIMEZONE);

    vec![
        ("latitude", request.latitude.to_string()),
        ("longitude", request.longitude.to_string()),
        ("timezone", timezone.to_string()),
        ("current", CURRENT_FIELDS.join(",")),
        ("daily", DAILY_FIELDS.to_string()),
        ("forecast_days", "1".to_string()),
        ("temperature_unit", request.units.temperature.to_string()),
        ("wind_speed_unit", request.units.wind_speed.to_string()),
        ("precipitation_unit", request.units.precipitation.to_string()),
    ]
}

/// Decodes a forecast response body, turning non-2xx answers into
/// [`ServiceError::Weather`] with the reason the server gave.
pub fn parse_forecast(status: StatusCode, body: &str) -> Result<WeatherReport> {
    if !status.is_success() {
        let reason = match serde_json::from_str::<OmErrorResponse>(body) {
            Ok(err) => err.reason,
            Err(_) => format!("status {status}: {}", truncate_body(body)),
        };
        return Err(ServiceError::weather(reason).into());
    }

    let parsed: OmForecastResponse =
        serde_json::from_str(body).context("Failed to parse open-meteo forecast JSON")?;

    Ok(WeatherReport {
        current: parsed.current,
        units: parsed.current_units,
        daily: DailyExtras {
            sunrise: first(parsed.daily.sunrise),
            sunset: first(parsed.daily.sunset),
            uv_index_max: first(parsed.daily.uv_index_max),
        },
        timezone: parsed.timezone,
    })
}

fn first<T>(series: Vec<Option<T>>) -> Option<T> {
    series.into_iter().next().flatten()
}

#[derive(Debug, Deserialize)]
struct OmErrorResponse {
    reason: String,
}

#[derive(Debug, Default, Deserialize)]
struct OmDaily {
    #[serde(default)]
    sunrise: Vec<Option<String>>,
    #[serde(default)]
    sunset: Vec<Option<String>>,
    #[serde(default)]
    uv_index_max: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct OmForecastResponse {
    #[serde(default)]
    timezone: String,
    current: CurrentConditions,
    #[serde(default)]
    current_units: CurrentUnits,
    #[serde(default)]
    daily: OmDaily,
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    async fn get_weather(&self, request: &WeatherRequest) -> Result<WeatherReport> {
        let query = forecast_query(request);
        debug!(url = %self.base_url, ?query, "Requesting open-meteo forecast");

        let res = self
            .http
            .get(&self.base_url)
            .query(&query)
            .send()
            .await
            .context("Failed to send request to open-meteo")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read open-meteo response body")?;

        parse_forecast(status, &body)
    }
}
