//! # sforce-soap-rs
//!
//! Builder and configuration layer for Salesforce SOAP API clients.
//!
//! The crate assembles configured clients from a WSDL service definition,
//! credentials, and a transport option map, and optionally wires logging
//! instrumentation onto each client's event dispatcher. Invoking remote
//! operations, SOAP envelope construction, and full WSDL interpretation are
//! a call layer's concern, not this crate's.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sforce_soap_rs::prelude::*;
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! fn main() -> SoapResult<()> {
//!     let logger: Arc<dyn Logger> = Arc::new(TracingLogger::new());
//!
//!     let builder = SforceClientBuilder::new(
//!         "enterprise.wsdl",
//!         "user@example.org",
//!         "password",
//!         "security-token",
//!         HashMap::new(),
//!     )
//!     .with_log(logger);
//!
//!     let client = builder.build()?;
//!     println!("endpoint: {}", client.transport().endpoint());
//!     Ok(())
//! }
//! ```
//!
//! Each [`build`](client::SforceClientBuilder::build) call produces an
//! independent client with its own transport, dispatcher, and — when a
//! logger is attached — its own [`LogPlugin`](plugin::LogPlugin) instance.
//!
//! ## Module Organization
//!
//! - [`core`]: error handling and the injectable logging capability
//! - [`client`]: the configured client and its builder
//! - [`transport`]: SOAP transport construction and event dispatching
//! - [`plugin`]: event subscribers wired onto built clients

pub mod client;
pub mod core;
pub mod plugin;
pub mod transport;

// Re-export commonly used types for convenience
pub use crate::core::error::{SoapError, SoapResult};

/// Prelude module for convenient imports
///
/// Module re-exports the most commonly used types and traits for easy
/// access. Use `use sforce_soap_rs::prelude::*;` to import everything you
/// need.
pub mod prelude {
    pub use crate::client::{ClientBuilder, SforceClient, SforceClientBuilder};
    pub use crate::core::{
        error::{SoapError, SoapResult},
        logging::{LogLevel, Logger, MemoryLogger, TracingLogger},
    };
    pub use crate::plugin::LogPlugin;
    pub use crate::transport::{
        ClientEvent, ConnectOptions, EventDispatcher, EventPayload, EventSubscriber, Listener,
        SoapTransport, SoapVersion,
    };
}
