//! # Application Layer
//!
//! The enrichment core: service orchestration and its error taxonomy.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use services::VehicleService;
