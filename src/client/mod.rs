//! Client implementation
//!
//! This module provides the configured SOAP client and the builder that
//! assembles it.

pub mod builder;
pub mod soap_client;

// Re-export the main client type and builder
pub use builder::{ClientBuilder, SforceClientBuilder};
pub use soap_client::SforceClient;
