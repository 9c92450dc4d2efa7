// ! Salesforce SOAP client
// !
// ! Module provides the client produced by the builder: a configured SOAP
// ! transport, the credentials the session will authenticate with, and the
// ! event dispatcher instrumentation hooks onto.

use crate::transport::events::{EventDispatcher, EventPayload};
use crate::transport::soap::SoapTransport;

/// Configured Salesforce SOAP client.
///
/// Instances are produced by [`SforceClientBuilder::build`]; each one owns
/// its transport and its event dispatcher, so clients built from the same
/// builder are fully independent. Configured state is exposed through
/// read-only accessors rather than runtime introspection.
///
/// [`SforceClientBuilder::build`]: crate::client::SforceClientBuilder::build
pub struct SforceClient {
    transport: SoapTransport,
    username: String,
    password: String,
    token: String,
    dispatcher: EventDispatcher,
}

impl SforceClient {
    /// Create a client wrapping `transport` with the given credentials.
    ///
    /// The dispatcher starts empty; the builder registers instrumentation
    /// before handing the client out.
    pub fn new(
        transport: SoapTransport,
        username: impl Into<String>,
        password: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            username: username.into(),
            password: password.into(),
            token: token.into(),
            dispatcher: EventDispatcher::new(),
        }
    }

    /// The configured transport
    pub fn transport(&self) -> &SoapTransport {
        &self.transport
    }

    /// Username the client authenticates as
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Password the client authenticates with
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Security token appended to the password on login
    pub fn security_token(&self) -> &str {
        &self.token
    }

    /// The credential the SOAP login call submits: password with the
    /// security token appended
    pub fn session_password(&self) -> String {
        format!("{}{}", self.password, self.token)
    }

    /// The client's event dispatcher
    pub fn event_dispatcher(&self) -> &EventDispatcher {
        &self.dispatcher
    }

    /// Mutable access to the event dispatcher, for listener registration
    pub fn event_dispatcher_mut(&mut self) -> &mut EventDispatcher {
        &mut self.dispatcher
    }

    /// Emit a lifecycle event through the client's dispatcher.
    ///
    /// The call layer fires this around each SOAP operation; registered
    /// listeners run synchronously in registration order.
    pub fn emit(&self, payload: &EventPayload) {
        self.dispatcher.dispatch(payload);
    }
}

impl std::fmt::Debug for SforceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Credentials stay out of debug output.
        f.debug_struct("SforceClient")
            .field("username", &self.username)
            .field("transport", &self.transport.connection_info())
            .field("listeners", &self.dispatcher.len())
            .finish_non_exhaustive()
    }
}
