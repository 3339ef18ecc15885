use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::{
    config::ServiceSettings,
    error::{ServiceError, truncate_body},
    model::LocationInfo,
};

use super::{GeolocationProvider, http_client};

const FIELDS: &str = "status,message,countryCode,city,lat,lon,timezone";

/// IP geolocation through ip-api.com.
#[derive(Debug, Clone)]
pub struct IpApiProvider {
    url: String,
    http: Client,
}

impl IpApiProvider {
    pub fn new(settings: &ServiceSettings) -> Result<Self> {
        Ok(Self {
            url: settings.geolocation_url.clone(),
            http: http_client(settings.timeout)?,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IpApiResponse {
    status: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    country_code: String,
    #[serde(default)]
    city: String,
    #[serde(default)]
    lat: f64,
    #[serde(default)]
    lon: f64,
    #[serde(default)]
    timezone: String,
}

pub fn parse_geolocation(status: StatusCode, body: &str) -> Result<LocationInfo> {
    if !status.is_success() {
        return Err(ServiceError::geolocation(format!(
            "status {status}: {}",
            truncate_body(body)
        ))
        .into());
    }

    let parsed: IpApiResponse =
        serde_json::from_str(body).context("Failed to parse ip-api geolocation JSON")?;

    if parsed.status != "success" {
        let reason = if parsed.message.is_empty() {
            format!("lookup status '{}'", parsed.status)
        } else {
            parsed.message
        };
        return Err(ServiceError::geolocation(reason).into());
    }

    Ok(LocationInfo {
        country_code: parsed.country_code,
        city: parsed.city,
        latitude: parsed.lat,
        longitude: parsed.lon,
        timezone: parsed.timezone,
    })
}

#[async_trait]
impl GeolocationProvider for IpApiProvider {
    async fn locate(&self) -> Result<LocationInfo> {
        debug!(url = %self.url, "Requesting ip-api geolocation");

        let res = self
            .http
            .get(&self.url)
            .query(&[("fields", FIELDS)])
            .send()
            .await
            .context("Failed to send request to ip-api")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read ip-api response body")?;

        parse_geolocation(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_successful_lookup() {
        let body = r#"{
            "status": "success",
            "countryCode": "US",
            "city": "Springfield",
            "lat": 39.7817,
            "lon": -89.6501,
            "timezone": "America/Chicago"
        }"#;

        let location = parse_geolocation(StatusCode::OK, body).expect("valid body");

        assert_eq!(
            location,
            LocationInfo {
                country_code: "US".into(),
                city: "Springfield".into(),
                latitude: 39.7817,
                longitude: -89.6501,
                timezone: "America/Chicago".into(),
            }
        );
    }

    #[test]
    fn failed_lookup_reports_message() {
        let body = r#"{"status": "fail", "message": "reserved range"}"#;

        let err = parse_geolocation(StatusCode::OK, body).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ServiceError>(),
            Some(&ServiceError::geolocation("reserved range"))
        );
    }

    #[test]
    fn failed_lookup_without_message_reports_status() {
        let err = parse_geolocation(StatusCode::OK, r#"{"status": "fail"}"#).unwrap_err();
        assert!(err.to_string().contains("lookup status 'fail'"));
    }

    #[test]
    fn http_error_is_a_geolocation_failure() {
        let err = parse_geolocation(StatusCode::TOO_MANY_REQUESTS, "slow down").unwrap_err();

        let service = err.downcast_ref::<ServiceError>().expect("service error");
        assert!(matches!(service, ServiceError::Geolocation { .. }));
        assert!(service.to_string().contains("429"));
    }

    #[test]
    fn missing_city_stays_empty() {
        let body = r#"{"status": "success", "countryCode": "", "lat": 0.0, "lon": -30.0}"#;

        let location = parse_geolocation(StatusCode::OK, body).expect("valid body");
        assert!(location.city.is_empty());
        assert!(location.country_code.is_empty());
    }
}
