use std::time::Duration;

use crate::{
    display::DisplayToggles,
    units::{TemperaturePreference, UnitPreference},
};

pub const DEFAULT_WEATHER_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const DEFAULT_GEOLOCATION_URL: &str = "http://ip-api.com/json/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Endpoints and transport limits for the two remote services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSettings {
    pub weather_url: String,
    pub geolocation_url: String,
    pub timeout: Duration,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            weather_url: DEFAULT_WEATHER_URL.to_string(),
            geolocation_url: DEFAULT_GEOLOCATION_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Everything one run needs to know, built once from the command line and
/// then only read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    units: UnitPreference,
    temperature: TemperaturePreference,
    toggles: DisplayToggles,
    services: ServiceSettings,
}

impl Config {
    pub fn with_units(mut self, units: UnitPreference) -> Self {
        self.units = units;
        self
    }

    pub fn with_temperature(mut self, temperature: TemperaturePreference) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_toggles(mut self, toggles: DisplayToggles) -> Self {
        self.toggles = toggles;
        self
    }

    pub fn with_services(mut self, services: ServiceSettings) -> Self {
        self.services = services;
        self
    }

    pub fn units(&self) -> UnitPreference {
        self.units
    }

    pub fn temperature(&self) -> TemperaturePreference {
        self.temperature
    }

    pub fn toggles(&self) -> &DisplayToggles {
        &self.toggles
    }

    pub fn services(&self) -> &ServiceSettings {
        &self.services
    }
}
