//! Derivations from raw weather fields to human-facing values.
//!
//! All functions are pure and never fail; inputs they cannot interpret fall
//! back to a sensible default instead of an error.

use std::fmt;

use chrono::NaiveDateTime;

use crate::{geography, model::CurrentConditions};

const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

const SECTOR_DEGREES: f64 = 360.0 / 16.0;

/// Sixteen-point compass label for a wind direction in degrees.
///
/// Each label owns a 22.5° sector centred on its bearing, so `N` covers
/// `[348.75, 11.25)`. Angles outside `[0, 360)` are normalised first;
/// non-finite input is treated as north.
pub fn compass_direction(degrees: f64) -> &'static str {
    let degrees = if degrees.is_finite() {
        degrees.rem_euclid(360.0)
    } else {
        0.0
    };
    let sector = ((degrees + SECTOR_DEGREES / 2.0) / SECTOR_DEGREES).floor() as usize;
    COMPASS_POINTS[sector % COMPASS_POINTS.len()]
}

/// Broad weather category derived from a WMO weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherType {
    Clear,
    Clouds,
    Fog,
    Rain,
    Snow,
    Thunderstorm,
}

impl WeatherType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherType::Clear => "clear",
            WeatherType::Clouds => "clouds",
            WeatherType::Fog => "fog",
            WeatherType::Rain => "rain",
            WeatherType::Snow => "snow",
            WeatherType::Thunderstorm => "thunderstorm",
        }
    }
}

impl fmt::Display for WeatherType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unlisted codes map to [`WeatherType::Clear`].
pub fn weather_type(code: i64) -> WeatherType {
    match code {
        0 | 1 => WeatherType::Clear,
        2 | 3 => WeatherType::Clouds,
        45 | 48 => WeatherType::Fog,
        51 | 53 | 55 | 56 | 57 | 61 | 63 | 65 | 66 | 67 | 80 | 81 | 82 => WeatherType::Rain,
        71 | 73 | 75 | 77 | 85 | 86 => WeatherType::Snow,
        95 | 96 | 99 => WeatherType::Thunderstorm,
        _ => WeatherType::Clear,
    }
}

pub fn is_daytime(flag: i64) -> bool {
    flag == 1
}

/// Renders a `YYYY-MM-DDTHH:MM` timestamp as a clock time in the country's
/// convention (`5:30AM` or `05:30`).
///
/// Anything that does not parse is returned unchanged.
pub fn format_local_time(timestamp: &str, country_code: &str) -> String {
    let Ok(parsed) = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M") else {
        return timestamp.to_string();
    };

    if geography::uses_am_pm(country_code) {
        parsed.format("%-I:%M%p").to_string()
    } else {
        parsed.format("%H:%M").to_string()
    }
}

/// Rounds half away from zero to a whole degree. The integer result cannot
/// carry a negative zero, so `-0.4` displays as `0`.
pub fn round_temperature(temperature: f64) -> i64 {
    temperature.round() as i64
}

impl CurrentConditions {
    pub fn compass_wind_direction(&self) -> &'static str {
        compass_direction(self.wind_direction)
    }

    pub fn weather_type(&self) -> WeatherType {
        weather_type(self.weather_code)
    }

    pub fn is_daytime(&self) -> bool {
        is_daytime(self.is_day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, "N")]
    #[case(90.0, "E")]
    #[case(180.0, "S")]
    #[case(270.0, "W")]
    #[case(11.24, "N")]
    #[case(11.25, "NNE")]
    #[case(348.74, "NNW")]
    #[case(348.75, "N")]
    #[case(359.99, "N")]
    #[case(225.0, "SW")]
    fn compass_sectors(#[case] degrees: f64, #[case] expected: &str) {
        assert_eq!(compass_direction(degrees), expected);
    }

    #[test]
    fn every_angle_maps_to_a_known_label() {
        for tenths in (0..3600).step_by(7) {
            let label = compass_direction(f64::from(tenths) / 10.0);
            assert!(COMPASS_POINTS.contains(&label), "{tenths}");
        }
    }

    #[rstest]
    #[case(-90.0, "W")]
    #[case(-11.0, "N")]
    #[case(-12.0, "NNW")]
    #[case(360.0, "N")]
    #[case(450.0, "E")]
    fn out_of_range_angles_are_normalised(#[case] degrees: f64, #[case] expected: &str) {
        assert_eq!(compass_direction(degrees), expected);
    }

    #[test]
    fn non_finite_angle_is_north() {
        assert_eq!(compass_direction(f64::NAN), "N");
        assert_eq!(compass_direction(f64::INFINITY), "N");
    }

    #[test]
    fn weather_codes_map_to_categories() {
        assert_eq!(weather_type(0), WeatherType::Clear);
        assert_eq!(weather_type(3), WeatherType::Clouds);
        assert_eq!(weather_type(48), WeatherType::Fog);
        assert_eq!(weather_type(57), WeatherType::Rain);
        assert_eq!(weather_type(82), WeatherType::Rain);
        assert_eq!(weather_type(77), WeatherType::Snow);
        assert_eq!(weather_type(99), WeatherType::Thunderstorm);
    }

    #[test]
    fn unlisted_weather_codes_are_clear() {
        for code in [-1, 4, 44, 50, 60, 70, 79, 90, 100, 1000] {
            assert_eq!(weather_type(code), WeatherType::Clear, "code {code}");
        }
    }

    #[test]
    fn only_one_means_daytime() {
        assert!(is_daytime(1));
        assert!(!is_daytime(0));
        assert!(!is_daytime(2));
    }

    #[rstest]
    #[case("2024-06-01T05:30", "US", "5:30AM")]
    #[case("2024-06-01T21:07", "US", "9:07PM")]
    #[case("2024-06-01T00:15", "GB", "12:15AM")]
    #[case("2024-06-01T05:30", "DE", "05:30")]
    #[case("2024-06-01T21:07", "", "21:07")]
    #[case("not-a-date", "US", "not-a-date")]
    #[case("2024-06-01", "DE", "2024-06-01")]
    fn local_time_formatting(#[case] timestamp: &str, #[case] country: &str, #[case] expected: &str) {
        assert_eq!(format_local_time(timestamp, country), expected);
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(round_temperature(68.4), 68);
        assert_eq!(round_temperature(68.5), 69);
        assert_eq!(round_temperature(-2.5), -3);
        assert_eq!(round_temperature(-2.4), -2);
    }

    #[test]
    fn rounding_never_yields_negative_zero() {
        let rounded = round_temperature(-0.4);
        assert_eq!(rounded, 0);
        assert_eq!(format!("{rounded}"), "0");
    }

    #[test]
    fn conditions_expose_derived_values_without_mutation() {
        let conditions = CurrentConditions {
            wind_direction: 135.0,
            weather_code: 61,
            is_day: 1,
            ..CurrentConditions::default()
        };
        let before = conditions.clone();

        assert_eq!(conditions.compass_wind_direction(), "SE");
        assert_eq!(conditions.weather_type(), WeatherType::Rain);
        assert!(conditions.is_daytime());
        assert_eq!(conditions, before);
    }
}
