//! # REST Routes
//!
//! Router wiring for the vehicle endpoints.

use crate::api::rest::handlers::{
    AppState, create_vehicle, delete_vehicle, get_vehicle, health, list_vehicles, update_vehicle,
};
use axum::Router;
use axum::routing::get;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builds the application router.
#[must_use]
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/cars", get(list_vehicles).post(create_vehicle))
        .route(
            "/cars/{id}",
            get(get_vehicle).put(update_vehicle).delete(delete_vehicle),
        )
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::application::services::VehicleService;
    use crate::domain::value_objects::{Location, VehicleId};
    use crate::infrastructure::lookups::error::LookupResult;
    use crate::infrastructure::lookups::traits::{AddressLookup, PriceLookup};
    use crate::infrastructure::persistence::InMemoryVehicleRepository;
    use async_trait::async_trait;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    #[derive(Debug)]
    struct StubPriceLookup;

    #[async_trait]
    impl PriceLookup for StubPriceLookup {
        async fn price_for(&self, _id: VehicleId) -> LookupResult<String> {
            Ok("USD 30987.04".to_string())
        }
    }

    #[derive(Debug)]
    struct StubAddressLookup;

    #[async_trait]
    impl AddressLookup for StubAddressLookup {
        async fn resolve(&self, location: &Location) -> LookupResult<Location> {
            Ok(location.with_address("1071 5th Ave, Manhattan, NY"))
        }
    }

    fn router() -> Router {
        let service = VehicleService::new(
            Arc::new(InMemoryVehicleRepository::new()),
            Arc::new(StubPriceLookup),
            Arc::new(StubAddressLookup),
        );
        create_router(Arc::new(AppState {
            service: Arc::new(service),
        }))
    }

    fn impala_body() -> serde_json::Value {
        serde_json::json!({
            "condition": "USED",
            "details": {
                "body": "sedan",
                "model": "Impala",
                "manufacturer": {"code": 101, "name": "Chevrolet"},
                "numberOfDoors": 4,
                "fuelType": "Gasoline",
                "engine": "3.6L V6",
                "mileage": 32280,
                "modelYear": 2018,
                "productionYear": 2018,
                "externalColor": "white"
            },
            "location": {"lat": 40.73061, "lon": -73.935242}
        })
    }

    fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_is_ok() {
        let response = router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn list_is_empty_initially() {
        let response = router()
            .oneshot(Request::get("/cars").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, serde_json::json!([]));
    }

    #[tokio::test]
    async fn create_then_get_round_trip() {
        let app = router();

        let response = app
            .clone()
            .oneshot(json_request("POST", "/cars", &impala_body()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = json_body(response).await;
        assert_eq!(created["id"], 1);
        assert_eq!(created["condition"], "USED");
        // No enrichment on creation.
        assert!(created.get("price").is_none());

        let response = app
            .oneshot(Request::get("/cars/1").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let fetched = json_body(response).await;
        assert_eq!(fetched["price"], "USD 30987.04");
        assert_eq!(fetched["location"]["address"], "1071 5th Ave, Manhattan, NY");
    }

    #[tokio::test]
    async fn get_missing_is_404() {
        let response = router()
            .oneshot(Request::get("/cars/42").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["error"], "not_found");
    }

    #[tokio::test]
    async fn update_missing_is_404() {
        let response = router()
            .oneshot(json_request("PUT", "/cars/7", &impala_body()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn update_merges_fields() {
        let app = router();
        app.clone()
            .oneshot(json_request("POST", "/cars", &impala_body()))
            .await
            .unwrap();

        let mut body = impala_body();
        body["condition"] = serde_json::json!("NEW");
        body["details"]["model"] = serde_json::json!("Malibu");
        let response = app
            .oneshot(json_request("PUT", "/cars/1", &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let updated = json_body(response).await;
        assert_eq!(updated["id"], 1);
        assert_eq!(updated["condition"], "NEW");
        assert_eq!(updated["details"]["model"], "Malibu");
    }

    #[tokio::test]
    async fn delete_then_get_is_404() {
        let app = router();
        app.clone()
            .oneshot(json_request("POST", "/cars", &impala_body()))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(Request::delete("/cars/1").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .oneshot(Request::get("/cars/1").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_missing_is_404() {
        let response = router()
            .oneshot(Request::delete("/cars/9").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn payload_address_is_discarded_on_create() {
        let mut body = impala_body();
        body["location"]["address"] = serde_json::json!("123 Fake St");
        let response = router()
            .oneshot(json_request("POST", "/cars", &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let created = json_body(response).await;
        assert!(created["location"].get("address").is_none());
    }

    #[tokio::test]
    async fn invalid_coordinates_are_400() {
        let mut body = impala_body();
        body["location"]["lat"] = serde_json::json!(95.0);
        let response = router()
            .oneshot(json_request("POST", "/cars", &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"], "validation");
    }

    #[tokio::test]
    async fn empty_model_is_400() {
        let mut body = impala_body();
        body["details"]["model"] = serde_json::json!("");
        let response = router()
            .oneshot(json_request("POST", "/cars", &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
