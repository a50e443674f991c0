//! # Maps Lookup Client
//!
//! HTTP implementation of [`AddressLookup`] against the maps service.
//!
//! The maps service exposes `GET /maps?lat={lat}&lon={lon}` and answers
//! with the street address closest to the coordinates. The client folds
//! the structured answer into the location's single address string.

use crate::domain::value_objects::Location;
use crate::infrastructure::lookups::error::LookupResult;
use crate::infrastructure::lookups::http::{LookupHttpClient, RetryPolicy};
use crate::infrastructure::lookups::traits::AddressLookup;
use async_trait::async_trait;
use serde::Deserialize;

/// Collaborator name used in error reporting.
pub const SERVICE_NAME: &str = "maps";

/// Wire representation of an address from the maps service.
#[derive(Debug, Clone, Deserialize)]
struct AddressRecord {
    address: String,
    city: String,
    state: String,
    #[allow(dead_code)]
    zip: Option<String>,
}

impl AddressRecord {
    fn display(&self) -> String {
        format!("{}, {}, {}", self.address, self.city, self.state)
    }
}

/// HTTP client for the maps service.
#[derive(Debug, Clone)]
pub struct HttpAddressLookup {
    http: LookupHttpClient,
    endpoint: String,
}

impl HttpAddressLookup {
    /// Creates a maps client against the given base URL.
    ///
    /// # Errors
    ///
    /// Returns a [`LookupError`](super::error::LookupError) if the
    /// underlying HTTP client cannot be created.
    pub fn new(base_url: &str, timeout_ms: u64, retry: RetryPolicy) -> LookupResult<Self> {
        let http = LookupHttpClient::new(SERVICE_NAME, timeout_ms, retry)?;
        Ok(Self {
            http,
            endpoint: format!("{}/maps", base_url.trim_end_matches('/')),
        })
    }
}

#[async_trait]
impl AddressLookup for HttpAddressLookup {
    async fn resolve(&self, location: &Location) -> LookupResult<Location> {
        let record: AddressRecord = self
            .http
            .get_json(
                &self.endpoint,
                &[
                    ("lat", location.lat().to_string()),
                    ("lon", location.lon().to_string()),
                ],
            )
            .await?;

        Ok(location.with_address(record.display()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(base_url: &str) -> HttpAddressLookup {
        HttpAddressLookup::new(base_url, 5000, RetryPolicy::none()).unwrap()
    }

    #[tokio::test]
    async fn resolves_coordinates_into_address() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/maps"))
            .and(query_param("lat", "40.73061"))
            .and(query_param("lon", "-73.935242"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "address": "1071 5th Ave",
                "city": "Manhattan",
                "state": "NY",
                "zip": "10029"
            })))
            .mount(&server)
            .await;

        let location = Location::new(40.73061, -73.935242);
        let resolved = client(&server.uri()).resolve(&location).await.unwrap();

        assert_eq!(resolved.lat(), location.lat());
        assert_eq!(resolved.lon(), location.lon());
        assert_eq!(resolved.address(), Some("1071 5th Ave, Manhattan, NY"));
    }

    #[tokio::test]
    async fn server_error_is_retryable_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/maps"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let err = client(&server.uri())
            .resolve(&Location::new(1.0, 2.0))
            .await
            .unwrap_err();
        assert!(err.is_retryable());
        assert_eq!(err.service(), "maps");
    }

    #[tokio::test]
    async fn missing_fields_are_protocol_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/maps"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"address": "1071 5th Ave"})),
            )
            .mount(&server)
            .await;

        let err = client(&server.uri())
            .resolve(&Location::new(1.0, 2.0))
            .await
            .unwrap_err();
        assert!(!err.is_retryable());
    }
}
