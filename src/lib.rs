//! # Vehicle Registry
//!
//! A record-management service for vehicle data. Stored records are
//! enriched on every read with live data from two external
//! collaborators: a pricing service and a maps (address) service.
//!
//! # Layers
//!
//! - [`domain`]: the vehicle record, its value objects and validation
//! - [`application`]: the enrichment service owning all business rules
//! - [`infrastructure`]: the record store and the two HTTP lookup clients
//! - [`api`]: the REST adapter exposing the service at `/cars`
//! - [`config`]: typed configuration
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use vehicle_registry::application::services::VehicleService;
//! use vehicle_registry::infrastructure::lookups::{HttpAddressLookup, HttpPriceLookup, RetryPolicy};
//! use vehicle_registry::infrastructure::persistence::InMemoryVehicleRepository;
//!
//! let service = VehicleService::new(
//!     Arc::new(InMemoryVehicleRepository::new()),
//!     Arc::new(HttpPriceLookup::new("http://localhost:8082", 5000, RetryPolicy::default())?),
//!     Arc::new(HttpAddressLookup::new("http://localhost:9191", 5000, RetryPolicy::default())?),
//! );
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
