use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::{fmt::Debug, time::Duration};

use crate::model::{LocationInfo, WeatherReport, WeatherRequest};

pub mod ipapi;
pub mod openmeteo;

pub use ipapi::IpApiProvider;
pub use openmeteo::OpenMeteoProvider;

/// Resolves the caller's approximate position.
#[async_trait]
pub trait GeolocationProvider: Send + Sync + Debug {
    async fn locate(&self) -> Result<LocationInfo>;
}

/// Fetches current conditions and today's daily values for a point.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn get_weather(&self, request: &WeatherRequest) -> Result<WeatherReport>;
}

fn http_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("weatherline/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")
}
