//! Core library for the `weatherline` CLI.
//!
//! This crate defines:
//! - Country conventions and unit resolution
//! - Mapping of raw open-meteo fields to display values
//! - Assembly of the one-line weather summary
//! - Geolocation and weather service clients
//!
//! It is used by `weatherline-cli`, but the pure parts (`units`, `mapper`,
//! `display`) can be reused without any network access.

pub mod config;
pub mod display;
pub mod error;
pub mod geography;
pub mod lookup;
pub mod mapper;
pub mod model;
pub mod provider;
pub mod units;

pub use config::{Config, ServiceSettings};
pub use display::{DisplaySegment, DisplayToggles, assemble, render};
pub use error::ServiceError;
pub use lookup::{LocationSource, lookup};
pub use model::{
    CurrentConditions, CurrentUnits, DailyExtras, LocationInfo, WeatherReport, WeatherRequest,
};
pub use provider::{GeolocationProvider, IpApiProvider, OpenMeteoProvider, WeatherProvider};
pub use units::{ResolvedUnits, TemperaturePreference, UnitPreference, resolve_units};
