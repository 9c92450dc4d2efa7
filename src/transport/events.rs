// ! Client lifecycle events and the event dispatcher
// !
// ! Module defines the fixed set of events a client emits around SOAP calls
// ! and the dispatcher that delivers them to registered subscribers.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

/// Lifecycle events emitted by a client around SOAP calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientEvent {
    /// A request envelope is about to be sent
    Request,
    /// A response envelope was received
    Response,
    /// The call failed with a SOAP fault
    Fault,
}

impl ClientEvent {
    /// All events, in emission order
    pub const ALL: [ClientEvent; 3] = [
        ClientEvent::Request,
        ClientEvent::Response,
        ClientEvent::Fault,
    ];

    /// Wire name of the event as used for registration and diagnostics
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientEvent::Request => "client.request",
            ClientEvent::Response => "client.response",
            ClientEvent::Fault => "client.fault",
        }
    }
}

/// Payload delivered to subscribers when an event fires
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventPayload {
    /// Outgoing call: remote operation name and the request envelope text
    Request { method: String, envelope: String },
    /// Completed call: remote operation name and the response envelope text
    Response { method: String, envelope: String },
    /// Failed call: remote operation name and the fault message
    Fault { method: String, message: String },
}

impl EventPayload {
    /// The event kind this payload belongs to
    pub fn kind(&self) -> ClientEvent {
        match self {
            EventPayload::Request { .. } => ClientEvent::Request,
            EventPayload::Response { .. } => ClientEvent::Response,
            EventPayload::Fault { .. } => ClientEvent::Fault,
        }
    }

    /// The remote operation name the payload refers to
    pub fn method(&self) -> &str {
        match self {
            EventPayload::Request { method, .. }
            | EventPayload::Response { method, .. }
            | EventPayload::Fault { method, .. } => method,
        }
    }
}

/// A subscriber that declares interest in a fixed set of events.
///
/// `subscribed_events` is a static table mapping each event to the name of
/// the handler the subscriber wants bound to it; registering the subscriber
/// iterates that table. `handle` receives the bound handler name back at
/// dispatch time.
pub trait EventSubscriber: Send + Sync {
    /// The (event, handler name) pairs this subscriber wants registered
    fn subscribed_events(&self) -> &'static [(ClientEvent, &'static str)];

    /// Deliver a payload to the named handler
    fn handle(&self, handler: &str, event: &EventPayload);

    /// Access the concrete subscriber type for inspection
    fn as_any(&self) -> &dyn Any;
}

/// A single registration: the subscriber plus the handler it is bound to
#[derive(Clone)]
pub struct Listener {
    subscriber: Arc<dyn EventSubscriber>,
    handler: &'static str,
}

impl Listener {
    /// Create a listener binding `subscriber` to `handler`
    pub fn new(subscriber: Arc<dyn EventSubscriber>, handler: &'static str) -> Self {
        Self {
            subscriber,
            handler,
        }
    }

    /// The registered subscriber
    pub fn subscriber(&self) -> &Arc<dyn EventSubscriber> {
        &self.subscriber
    }

    /// The handler name this listener is bound to
    pub fn handler(&self) -> &'static str {
        self.handler
    }

    /// Deliver a payload through this listener
    pub fn invoke(&self, event: &EventPayload) {
        self.subscriber.handle(self.handler, event);
    }
}

impl std::fmt::Debug for Listener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listener")
            .field("handler", &self.handler)
            .finish_non_exhaustive()
    }
}

/// Registry mapping events to ordered listener lists.
///
/// Dispatch is synchronous and runs listeners in registration order. Every
/// built client owns its own dispatcher; listeners are never shared across
/// clients.
#[derive(Debug, Default)]
pub struct EventDispatcher {
    listeners: HashMap<ClientEvent, Vec<Listener>>,
}

impl EventDispatcher {
    /// Create an empty dispatcher
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for a single event
    pub fn add_listener(&mut self, event: ClientEvent, listener: Listener) {
        self.listeners.entry(event).or_default().push(listener);
    }

    /// Register a subscriber for every event in its subscribed-events table
    pub fn add_subscriber(&mut self, subscriber: Arc<dyn EventSubscriber>) {
        for (event, handler) in subscriber.subscribed_events() {
            self.add_listener(*event, Listener::new(Arc::clone(&subscriber), handler));
        }
    }

    /// Listeners registered for `event`, in registration order
    pub fn listeners(&self, event: ClientEvent) -> &[Listener] {
        self.listeners.get(&event).map_or(&[], Vec::as_slice)
    }

    /// True if at least one listener is registered for `event`
    pub fn has_listeners(&self, event: ClientEvent) -> bool {
        !self.listeners(event).is_empty()
    }

    /// Total number of registrations across all events
    pub fn len(&self) -> usize {
        self.listeners.values().map(Vec::len).sum()
    }

    /// True if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Deliver a payload to every listener registered for its event kind
    pub fn dispatch(&self, payload: &EventPayload) {
        let event = payload.kind();
        let listeners = self.listeners(event);
        tracing::trace!(
            event = event.as_str(),
            listeners = listeners.len(),
            method = payload.method(),
            "dispatching client event"
        );
        for listener in listeners {
            listener.invoke(payload);
        }
    }
}
