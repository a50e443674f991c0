//! # REST Handlers
//!
//! Request/response types and axum handlers for the vehicle endpoints.
//!
//! The handlers validate input shape before it reaches the core, call
//! the [`VehicleService`] operations directly, and translate
//! [`ApplicationError`] values into status codes:
//!
//! - NotFound → 404
//! - Validation → 400
//! - Lookup → 502
//! - Repository / Internal → 500

use crate::application::error::ApplicationError;
use crate::application::services::VehicleService;
use crate::domain::entities::Vehicle;
use crate::domain::value_objects::{Condition, Details, Location, VehicleId};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared state for the REST API.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The enrichment service.
    pub service: Arc<VehicleService>,
}

/// Request body for creating or updating a vehicle.
#[derive(Debug, Clone, Deserialize)]
pub struct VehicleRequest {
    /// Vehicle condition.
    pub condition: Condition,
    /// Descriptive details, copied wholesale.
    pub details: Details,
    /// Coordinates; any address in the payload is discarded, the
    /// address is resolved fresh on every read.
    pub location: Location,
    /// Optional price carried through the merge; overwritten on reads.
    #[serde(default)]
    pub price: Option<String>,
}

impl VehicleRequest {
    /// Validates the request shape.
    fn validate(&self) -> Result<(), ApplicationError> {
        self.details.validate()?;
        self.location.validate()?;
        Ok(())
    }

    /// Converts the request into an unpersisted record.
    fn into_vehicle(self) -> Vehicle {
        let mut vehicle = Vehicle::new(
            self.condition,
            self.details,
            self.location.without_address(),
        );
        vehicle.set_price(self.price);
        vehicle
    }
}

/// Response representation of a vehicle record.
#[derive(Debug, Clone, Serialize)]
pub struct VehicleResponse {
    /// Store-assigned identifier.
    pub id: u64,
    /// Vehicle condition.
    pub condition: Condition,
    /// Descriptive details.
    pub details: Details,
    /// Coordinates plus resolved address, when enriched.
    pub location: Location,
    /// Display price, when enriched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

impl VehicleResponse {
    fn from_vehicle(vehicle: Vehicle) -> Result<Self, ApplicationError> {
        let id = vehicle
            .id()
            .ok_or_else(|| ApplicationError::internal("persisted record carries no identifier"))?;
        Ok(Self {
            id: id.as_u64(),
            condition: vehicle.condition(),
            details: vehicle.details().clone(),
            location: vehicle.location().clone(),
            price: vehicle.price().map(str::to_string),
        })
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
}

/// Error body returned for failed requests.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Short error kind.
    pub error: &'static str,
    /// Human-readable message.
    pub message: String,
}

/// Wrapper translating [`ApplicationError`] into an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub ApplicationError);

impl From<ApplicationError> for ApiError {
    fn from(error: ApplicationError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind) = match &self.0 {
            ApplicationError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            ApplicationError::Validation(_) => (StatusCode::BAD_REQUEST, "validation"),
            ApplicationError::Lookup(_) => (StatusCode::BAD_GATEWAY, "lookup_failed"),
            ApplicationError::Repository(_) | ApplicationError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal")
            }
        };
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }
        let body = ErrorResponse {
            error: kind,
            message: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// `GET /cars` - lists all vehicles, enriched.
pub async fn list_vehicles(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<VehicleResponse>>, ApiError> {
    let vehicles = state.service.list().await?;
    let responses = vehicles
        .into_iter()
        .map(VehicleResponse::from_vehicle)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Json(responses))
}

/// `GET /cars/{id}` - gets one vehicle, enriched.
pub async fn get_vehicle(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<VehicleResponse>, ApiError> {
    let vehicle = state.service.find_by_id(VehicleId::new(id)).await?;
    Ok(Json(VehicleResponse::from_vehicle(vehicle)?))
}

/// `POST /cars` - creates a vehicle.
pub async fn create_vehicle(
    State(state): State<Arc<AppState>>,
    Json(request): Json<VehicleRequest>,
) -> Result<(StatusCode, Json<VehicleResponse>), ApiError> {
    request.validate()?;
    let created = state.service.save(request.into_vehicle()).await?;
    Ok((
        StatusCode::CREATED,
        Json(VehicleResponse::from_vehicle(created)?),
    ))
}

/// `PUT /cars/{id}` - updates a vehicle by merge.
pub async fn update_vehicle(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Json(request): Json<VehicleRequest>,
) -> Result<Json<VehicleResponse>, ApiError> {
    request.validate()?;
    let incoming = request.into_vehicle().with_id(VehicleId::new(id));
    let updated = state.service.save(incoming).await?;
    Ok(Json(VehicleResponse::from_vehicle(updated)?))
}

/// `DELETE /cars/{id}` - removes a vehicle.
pub async fn delete_vehicle(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    state.service.delete(VehicleId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /health` - liveness probe.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
