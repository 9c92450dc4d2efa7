// ! Logging plugin
// !
// ! Module provides the event subscriber that turns client lifecycle events
// ! into entries on an injected logger.

use std::any::Any;
use std::sync::Arc;

use crate::core::logging::Logger;
use crate::transport::events::{ClientEvent, EventPayload, EventSubscriber};

/// Event subscriber that logs client lifecycle events.
///
/// Each plugin instance holds the logger it was built with; requests and
/// responses are logged at debug level, faults at error level. A builder
/// with a logger set registers one fresh plugin instance per built client.
pub struct LogPlugin {
    logger: Arc<dyn Logger>,
}

impl LogPlugin {
    /// The events this plugin subscribes to, each with the handler bound to it
    pub const SUBSCRIBED_EVENTS: &'static [(ClientEvent, &'static str)] = &[
        (ClientEvent::Request, "log_request"),
        (ClientEvent::Response, "log_response"),
        (ClientEvent::Fault, "log_fault"),
    ];

    /// Create a plugin bound to `logger`
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self { logger }
    }

    /// The logger this plugin was built with
    pub fn logger(&self) -> &Arc<dyn Logger> {
        &self.logger
    }

    fn log_request(&self, method: &str, envelope: &str) {
        self.logger
            .debug(&format!("Request [{method}]: {envelope}"));
    }

    fn log_response(&self, method: &str, envelope: &str) {
        self.logger
            .debug(&format!("Response [{method}]: {envelope}"));
    }

    fn log_fault(&self, method: &str, message: &str) {
        self.logger.error(&format!("Fault [{method}]: {message}"));
    }
}

impl EventSubscriber for LogPlugin {
    fn subscribed_events(&self) -> &'static [(ClientEvent, &'static str)] {
        Self::SUBSCRIBED_EVENTS
    }

    fn handle(&self, handler: &str, event: &EventPayload) {
        match (handler, event) {
            ("log_request", EventPayload::Request { method, envelope }) => {
                self.log_request(method, envelope);
            }
            ("log_response", EventPayload::Response { method, envelope }) => {
                self.log_response(method, envelope);
            }
            ("log_fault", EventPayload::Fault { method, message }) => {
                self.log_fault(method, message);
            }
            // A mismatched handler/payload pair means a registration bug;
            // surface it without failing the call path.
            (handler, event) => {
                self.logger.warn(&format!(
                    "unexpected dispatch: handler {handler} received {} event",
                    event.kind().as_str()
                ));
            }
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
