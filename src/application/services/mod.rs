//! # Application Services
//!
//! Use-case orchestration over the domain and infrastructure ports.

pub mod vehicle_service;

pub use vehicle_service::VehicleService;
