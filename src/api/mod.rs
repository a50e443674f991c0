//! # API Layer
//!
//! Presentation adapters mapping core operations to network protocols.

pub mod rest;
