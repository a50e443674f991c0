//! # Pricing Lookup Client
//!
//! HTTP implementation of [`PriceLookup`] against the pricing service.
//!
//! The pricing service exposes `GET /services/price?vehicleId={id}` and
//! answers with a currency plus a numeric price. The client renders the
//! two into a single display string; prices are never persisted, so no
//! decimal arithmetic happens on this side.

use crate::domain::value_objects::VehicleId;
use crate::infrastructure::lookups::error::LookupResult;
use crate::infrastructure::lookups::http::{LookupHttpClient, RetryPolicy};
use crate::infrastructure::lookups::traits::PriceLookup;
use async_trait::async_trait;
use serde::Deserialize;

/// Collaborator name used in error reporting.
pub const SERVICE_NAME: &str = "pricing";

/// Wire representation of a price quote from the pricing service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PriceQuote {
    currency: String,
    price: f64,
    #[allow(dead_code)]
    vehicle_id: Option<u64>,
}

/// HTTP client for the pricing service.
#[derive(Debug, Clone)]
pub struct HttpPriceLookup {
    http: LookupHttpClient,
    endpoint: String,
}

impl HttpPriceLookup {
    /// Creates a pricing client against the given base URL.
    ///
    /// # Errors
    ///
    /// Returns a [`LookupError`](super::error::LookupError) if the
    /// underlying HTTP client cannot be created.
    pub fn new(base_url: &str, timeout_ms: u64, retry: RetryPolicy) -> LookupResult<Self> {
        let http = LookupHttpClient::new(SERVICE_NAME, timeout_ms, retry)?;
        Ok(Self {
            http,
            endpoint: format!("{}/services/price", base_url.trim_end_matches('/')),
        })
    }
}

#[async_trait]
impl PriceLookup for HttpPriceLookup {
    async fn price_for(&self, id: VehicleId) -> LookupResult<String> {
        let quote: PriceQuote = self
            .http
            .get_json(&self.endpoint, &[("vehicleId", id.to_string())])
            .await?;

        Ok(format!("{} {:.2}", quote.currency, quote.price))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(base_url: &str) -> HttpPriceLookup {
        HttpPriceLookup::new(base_url, 5000, RetryPolicy::none()).unwrap()
    }

    #[tokio::test]
    async fn renders_currency_and_amount() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/services/price"))
            .and(query_param("vehicleId", "4"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "currency": "USD",
                "price": 30987.04,
                "vehicleId": 4
            })))
            .mount(&server)
            .await;

        let price = client(&server.uri())
            .price_for(VehicleId::new(4))
            .await
            .unwrap();
        assert_eq!(price, "USD 30987.04");
    }

    #[tokio::test]
    async fn not_found_maps_to_client_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/services/price"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client(&server.uri())
            .price_for(VehicleId::new(99))
            .await
            .unwrap_err();
        assert!(err.is_client_error());
        assert_eq!(err.service(), "pricing");
    }

    #[tokio::test]
    async fn malformed_body_is_protocol_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/services/price"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client(&server.uri())
            .price_for(VehicleId::new(4))
            .await
            .unwrap_err();
        assert!(!err.is_retryable());
        assert!(err.to_string().contains("parse"));
    }

    #[tokio::test]
    async fn retries_transient_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/services/price"))
            .respond_with(ResponseTemplate::new(503))
            .up_to_n_times(1)
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/services/price"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "currency": "USD",
                "price": 12999.00
            })))
            .mount(&server)
            .await;

        let lookup = HttpPriceLookup::new(
            &server.uri(),
            5000,
            RetryPolicy {
                max_attempts: 3,
                backoff_ms: 1,
            },
        )
        .unwrap();

        let price = lookup.price_for(VehicleId::new(1)).await.unwrap();
        assert_eq!(price, "USD 12999.00");
    }
}
