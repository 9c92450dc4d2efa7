//! Transport layer
//!
//! This module provides the configured SOAP transport a client wraps and
//! the event-dispatching capability that surrounds it.

pub mod events;
pub mod soap;

// Re-export commonly used types
pub use events::{ClientEvent, EventDispatcher, EventPayload, EventSubscriber, Listener};
pub use soap::{ConnectOptions, SoapTransport, SoapVersion, USER_AGENT};
