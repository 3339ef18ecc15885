use anyhow::Result;
use tracing::{debug, info};

use crate::{
    config::Config,
    display::{DisplaySegment, assemble},
    model::{LocationInfo, WeatherRequest},
    provider::{GeolocationProvider, WeatherProvider},
    units::resolve_units,
};

/// How the location for a lookup is chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocationSource {
    /// Geolocate the caller's IP address.
    Here,
    At { latitude: f64, longitude: f64 },
}

/// Runs one weather lookup from location to display segments.
///
/// Units are resolved once from the location's country code before the
/// weather request goes out. Any collaborator failure aborts the lookup.
pub async fn lookup(
    geolocation: &dyn GeolocationProvider,
    weather: &dyn WeatherProvider,
    source: LocationSource,
    config: &Config,
) -> Result<Vec<DisplaySegment>> {
    let location = match source {
        LocationSource::Here => geolocation.locate().await?,
        LocationSource::At {
            latitude,
            longitude,
        } => LocationInfo::from_coordinates(latitude, longitude),
    };
    info!(
        city = %location.city,
        country = %location.country_code,
        latitude = location.latitude,
        longitude = location.longitude,
        "Resolved location"
    );

    let units = resolve_units(config.units(), config.temperature(), &location.country_code);
    debug!(?units, "Resolved units");

    let request = WeatherRequest {
        latitude: location.latitude,
        longitude: location.longitude,
        units,
        timezone: Some(location.timezone.clone()).filter(|tz| !tz.is_empty()),
    };
    let report = weather.get_weather(&request).await?;
    debug!(
        condition = %report.current.weather_type(),
        daytime = report.current.is_daytime(),
        timezone = %report.timezone,
        "Received weather report"
    );

    Ok(assemble(config.toggles(), &report, &location))
}
