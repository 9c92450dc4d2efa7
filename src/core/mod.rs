//! Core abstractions for the SOAP client layer
//!
//! This module contains the fundamental building blocks shared by the rest
//! of the crate: error handling and the injectable logging capability.

pub mod error;
pub mod logging;

// Re-export commonly used items
pub use error::{SoapError, SoapResult};
pub use logging::{LogLevel, Logger, MemoryLogger, TracingLogger};
