//! Client plugins
//!
//! This module contains event subscribers that can be wired onto a client's
//! event dispatcher at build time. The only built-in plugin is the logging
//! plugin; anything implementing [`EventSubscriber`] can be registered the
//! same way.
//!
//! [`EventSubscriber`]: crate::transport::events::EventSubscriber

pub mod log;

pub use log::LogPlugin;
