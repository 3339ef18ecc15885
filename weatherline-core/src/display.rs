use std::fmt;

use crate::{
    mapper::{format_local_time, round_temperature},
    model::{LocationInfo, WeatherReport},
};

/// Shown instead of the city when the location has no name, e.g. for raw
/// coordinates or a point at sea.
pub const UNKNOWN_CITY: &str = "your location";

pub const SEGMENT_SEPARATOR: &str = " - ";

/// Stands in for a daily value the service did not provide.
pub const MISSING_VALUE: &str = "n/a";

/// Which optional segments to print after the headline temperature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayToggles {
    pub feels_like: bool,
    pub uv_index: bool,
    pub humidity: bool,
    pub wind: bool,
    pub pressure: bool,
    pub daylight: bool,
}

impl DisplayToggles {
    pub fn all() -> Self {
        Self {
            feels_like: true,
            uv_index: true,
            humidity: true,
            wind: true,
            pressure: true,
            daylight: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySegment {
    pub label: String,
    pub value: String,
}

impl DisplaySegment {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for DisplaySegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

/// Builds the output segments in their fixed order: headline, feels like,
/// wind, humidity, pressure, UV index, sunrise, sunset. Disabled toggles
/// contribute nothing.
pub fn assemble(
    toggles: &DisplayToggles,
    report: &WeatherReport,
    location: &LocationInfo,
) -> Vec<DisplaySegment> {
    let current = &report.current;
    let units = &report.units;
    let daily = &report.daily;

    let city = match location.city.trim() {
        "" => UNKNOWN_CITY,
        city => city,
    };

    let mut segments = vec![DisplaySegment::new(
        format!("Weather in {city}"),
        format!("{}{}", round_temperature(current.temperature), units.temperature),
    )];

    if toggles.feels_like {
        segments.push(DisplaySegment::new(
            "Feels like",
            format!("{}{}", round_temperature(current.feels_like), units.feels_like),
        ));
    }
    if toggles.wind {
        segments.push(DisplaySegment::new(
            "Wind",
            format!(
                "{:.0} {} {}",
                current.wind_speed,
                units.wind_speed,
                current.compass_wind_direction()
            ),
        ));
    }
    if toggles.humidity {
        segments.push(DisplaySegment::new(
            "Humidity",
            format!("{:.0}{}", current.humidity, units.humidity),
        ));
    }
    if toggles.pressure {
        segments.push(DisplaySegment::new(
            "Pressure",
            format!("{:.0} {}", current.pressure, units.pressure),
        ));
    }
    if toggles.uv_index {
        let uv = match daily.uv_index_max {
            Some(uv) => format!("{uv:.1}"),
            None => MISSING_VALUE.to_string(),
        };
        segments.push(DisplaySegment::new("Max UVI", uv));
    }
    if toggles.daylight {
        let clock = |timestamp: &Option<String>| match timestamp {
            Some(ts) => format_local_time(ts, &location.country_code),
            None => MISSING_VALUE.to_string(),
        };
        segments.push(DisplaySegment::new("Sunrise", clock(&daily.sunrise)));
        segments.push(DisplaySegment::new("Sunset", clock(&daily.sunset)));
    }

    segments
}

/// Joins segments into the single output line.
pub fn render(segments: &[DisplaySegment]) -> String {
    segments
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(SEGMENT_SEPARATOR)
}
