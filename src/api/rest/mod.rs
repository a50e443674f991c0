//! # REST API
//!
//! REST endpoints using axum.
//!
//! # Endpoints
//!
//! - `GET /cars` - List all vehicles, enriched with price and address
//! - `GET /cars/{id}` - Get a vehicle by ID, enriched
//! - `POST /cars` - Create a vehicle (no enrichment on creation)
//! - `PUT /cars/{id}` - Update a vehicle by merge
//! - `DELETE /cars/{id}` - Remove a vehicle
//! - `GET /health` - Health check
//!
//! # Usage
//!
//! ```ignore
//! use vehicle_registry::api::rest::{AppState, create_router};
//! use std::sync::Arc;
//!
//! let state = Arc::new(AppState { service: /* ... */ });
//! let router = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{ApiError, AppState, ErrorResponse, HealthResponse, VehicleRequest, VehicleResponse};
pub use routes::create_router;
