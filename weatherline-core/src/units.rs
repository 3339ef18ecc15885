use std::fmt;

use crate::geography;

/// Combined unit system chosen by the user for wind speed and precipitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitPreference {
    #[default]
    Local,
    Metric,
    Imperial,
}

/// Temperature scale chosen by the user, independent of [`UnitPreference`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemperaturePreference {
    #[default]
    Local,
    Celsius,
    Fahrenheit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindSpeedUnit {
    Kmh,
    Mph,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrecipitationUnit {
    Mm,
    Inch,
}

impl TemperatureUnit {
    /// Value of the `temperature_unit` request parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Fahrenheit => "fahrenheit",
        }
    }
}

impl WindSpeedUnit {
    /// Value of the `wind_speed_unit` request parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            WindSpeedUnit::Kmh => "kmh",
            WindSpeedUnit::Mph => "mph",
        }
    }
}

impl PrecipitationUnit {
    /// Value of the `precipitation_unit` request parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            PrecipitationUnit::Mm => "mm",
            PrecipitationUnit::Inch => "inch",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for WindSpeedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PrecipitationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Concrete unit selectors submitted with the weather request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedUnits {
    pub temperature: TemperatureUnit,
    pub wind_speed: WindSpeedUnit,
    pub precipitation: PrecipitationUnit,
}

/// Turn user preferences into concrete units, consulting the country's
/// conventions wherever the user asked for local units.
///
/// Never fails: an empty or unknown country code resolves to Celsius, km/h
/// and millimetres.
pub fn resolve_units(
    units: UnitPreference,
    temperature: TemperaturePreference,
    country_code: &str,
) -> ResolvedUnits {
    let temperature = match temperature {
        TemperaturePreference::Celsius => TemperatureUnit::Celsius,
        TemperaturePreference::Fahrenheit => TemperatureUnit::Fahrenheit,
        TemperaturePreference::Local if geography::uses_fahrenheit(country_code) => {
            TemperatureUnit::Fahrenheit
        }
        TemperaturePreference::Local => TemperatureUnit::Celsius,
    };

    let imperial = match units {
        UnitPreference::Metric => false,
        UnitPreference::Imperial => true,
        UnitPreference::Local => geography::uses_imperial(country_code),
    };

    let (wind_speed, precipitation) = if imperial {
        (WindSpeedUnit::Mph, PrecipitationUnit::Inch)
    } else {
        (WindSpeedUnit::Kmh, PrecipitationUnit::Mm)
    };

    ResolvedUnits {
        temperature,
        wind_speed,
        precipitation,
    }
}
