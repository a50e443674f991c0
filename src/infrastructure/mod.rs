//! # Infrastructure Layer
//!
//! Adapters for persistence and external lookup collaborators.

pub mod lookups;
pub mod persistence;
