//! # Vehicle Details
//!
//! Descriptive attributes of a vehicle record.
//!
//! Details are opaque to the enrichment core: merges copy them wholesale
//! and no business rule inspects individual fields beyond input
//! validation at the API boundary. Field names serialize in camelCase to
//! match the wire representation.

use crate::domain::errors::DomainError;
use serde::{Deserialize, Serialize};

/// Vehicle manufacturer reference: a numeric code plus a display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manufacturer {
    /// Manufacturer code.
    code: u32,
    /// Manufacturer display name.
    name: String,
}

impl Manufacturer {
    /// Creates a manufacturer reference.
    #[must_use]
    pub fn new(code: u32, name: impl Into<String>) -> Self {
        Self {
            code,
            name: name.into(),
        }
    }

    /// Returns the manufacturer code.
    #[inline]
    #[must_use]
    pub const fn code(&self) -> u32 {
        self.code
    }

    /// Returns the manufacturer name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Descriptive attributes of a vehicle.
///
/// # Examples
///
/// ```
/// use vehicle_registry::domain::value_objects::{Details, Manufacturer};
///
/// let details = Details::builder("Impala", Manufacturer::new(101, "Chevrolet"))
///     .body("sedan")
///     .number_of_doors(4)
///     .fuel_type("Gasoline")
///     .engine("3.6L V6")
///     .mileage(32280)
///     .model_year(2018)
///     .production_year(2018)
///     .external_color("white")
///     .build();
///
/// assert_eq!(details.model(), "Impala");
/// assert!(details.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Details {
    /// Body style (sedan, SUV, ...).
    body: String,
    /// Model name.
    model: String,
    /// Manufacturer reference.
    manufacturer: Manufacturer,
    /// Number of doors.
    number_of_doors: u8,
    /// Fuel type description.
    fuel_type: String,
    /// Engine description.
    engine: String,
    /// Odometer reading.
    mileage: u32,
    /// Model year.
    model_year: u16,
    /// Production year.
    production_year: u16,
    /// Exterior color.
    external_color: String,
}

impl Details {
    /// Starts building details from the required model and manufacturer.
    #[must_use]
    pub fn builder(model: impl Into<String>, manufacturer: Manufacturer) -> DetailsBuilder {
        DetailsBuilder {
            details: Details {
                body: String::new(),
                model: model.into(),
                manufacturer,
                number_of_doors: 4,
                fuel_type: String::new(),
                engine: String::new(),
                mileage: 0,
                model_year: 0,
                production_year: 0,
                external_color: String::new(),
            },
        }
    }

    /// Returns the body style.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the model name.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the manufacturer reference.
    #[must_use]
    pub fn manufacturer(&self) -> &Manufacturer {
        &self.manufacturer
    }

    /// Returns the number of doors.
    #[inline]
    #[must_use]
    pub const fn number_of_doors(&self) -> u8 {
        self.number_of_doors
    }

    /// Returns the fuel type.
    #[must_use]
    pub fn fuel_type(&self) -> &str {
        &self.fuel_type
    }

    /// Returns the engine description.
    #[must_use]
    pub fn engine(&self) -> &str {
        &self.engine
    }

    /// Returns the odometer reading.
    #[inline]
    #[must_use]
    pub const fn mileage(&self) -> u32 {
        self.mileage
    }

    /// Returns the model year.
    #[inline]
    #[must_use]
    pub const fn model_year(&self) -> u16 {
        self.model_year
    }

    /// Returns the production year.
    #[inline]
    #[must_use]
    pub const fn production_year(&self) -> u16 {
        self.production_year
    }

    /// Returns the exterior color.
    #[must_use]
    pub fn external_color(&self) -> &str {
        &self.external_color
    }

    /// Validates the shape of the details.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidDetails`] when the model or
    /// manufacturer name is empty, or the door count is zero.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.model.trim().is_empty() {
            return Err(DomainError::invalid_details("model must not be empty"));
        }
        if self.manufacturer.name().trim().is_empty() {
            return Err(DomainError::invalid_details(
                "manufacturer name must not be empty",
            ));
        }
        if self.number_of_doors == 0 {
            return Err(DomainError::invalid_details(
                "number of doors must be positive",
            ));
        }
        Ok(())
    }
}

/// Builder for [`Details`].
#[derive(Debug, Clone)]
pub struct DetailsBuilder {
    details: Details,
}

impl DetailsBuilder {
    /// Sets the body style.
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.details.body = body.into();
        self
    }

    /// Sets the number of doors.
    #[must_use]
    pub fn number_of_doors(mut self, doors: u8) -> Self {
        self.details.number_of_doors = doors;
        self
    }

    /// Sets the fuel type.
    #[must_use]
    pub fn fuel_type(mut self, fuel_type: impl Into<String>) -> Self {
        self.details.fuel_type = fuel_type.into();
        self
    }

    /// Sets the engine description.
    #[must_use]
    pub fn engine(mut self, engine: impl Into<String>) -> Self {
        self.details.engine = engine.into();
        self
    }

    /// Sets the odometer reading.
    #[must_use]
    pub fn mileage(mut self, mileage: u32) -> Self {
        self.details.mileage = mileage;
        self
    }

    /// Sets the model year.
    #[must_use]
    pub fn model_year(mut self, year: u16) -> Self {
        self.details.model_year = year;
        self
    }

    /// Sets the production year.
    #[must_use]
    pub fn production_year(mut self, year: u16) -> Self {
        self.details.production_year = year;
        self
    }

    /// Sets the exterior color.
    #[must_use]
    pub fn external_color(mut self, color: impl Into<String>) -> Self {
        self.details.external_color = color.into();
        self
    }

    /// Finishes the builder.
    #[must_use]
    pub fn build(self) -> Details {
        self.details
    }
}
