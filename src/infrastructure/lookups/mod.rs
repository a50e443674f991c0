//! # Lookup Clients
//!
//! External enrichment collaborators: pricing and address resolution.
//!
//! The ports live in [`traits`]; the HTTP implementations share the
//! retrying client in [`http`]. Failures are never swallowed here beyond
//! the bounded transport-level retry; whatever survives the policy
//! propagates to the enrichment core and aborts the operation.

pub mod error;
pub mod http;
pub mod maps;
pub mod pricing;
pub mod traits;

pub use error::{LookupError, LookupResult};
pub use http::{LookupHttpClient, RetryPolicy};
pub use maps::HttpAddressLookup;
pub use pricing::HttpPriceLookup;
pub use traits::{AddressLookup, PriceLookup};
