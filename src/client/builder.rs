// ! Client builder
// !
// ! Provides the builder that assembles configured Salesforce SOAP clients
// ! from an endpoint descriptor, credentials, transport options, and an
// ! optional logger.

use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

use crate::client::soap_client::SforceClient;
use crate::core::error::SoapResult;
use crate::core::logging::Logger;
use crate::plugin::LogPlugin;
use crate::transport::events::EventSubscriber;
use crate::transport::soap::SoapTransport;

/// Builder for configured Salesforce SOAP clients.
///
/// The builder collects the WSDL path, credentials, and transport options up
/// front; nothing is validated until [`build`](Self::build), which constructs
/// the transport and propagates its errors unmodified. `build` borrows the
/// builder, so one builder can produce any number of independent clients.
pub struct SforceClientBuilder {
    wsdl: String,
    username: String,
    password: String,
    token: String,
    options: HashMap<String, Value>,
    logger: Option<Arc<dyn Logger>>,
}

impl SforceClientBuilder {
    /// Create a builder from an endpoint descriptor, credentials, and
    /// transport options.
    ///
    /// `options` keys recognized by the transport are resolved at build
    /// time; the rest are carried through opaquely.
    pub fn new(
        wsdl: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        token: impl Into<String>,
        options: HashMap<String, Value>,
    ) -> Self {
        Self {
            wsdl: wsdl.into(),
            username: username.into(),
            password: password.into(),
            token: token.into(),
            options,
            logger: None,
        }
    }

    /// Attach a logger; built clients get a [`LogPlugin`] bound to it.
    ///
    /// Calling this more than once replaces the previous logger (last write
    /// wins).
    pub fn with_log(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Build a configured client.
    ///
    /// Constructs the SOAP transport from the WSDL and options (transport
    /// errors propagate unmodified), wraps it in a client carrying the
    /// credentials, and — if a logger was attached — registers a fresh
    /// [`LogPlugin`] on the client's dispatcher for every event in the
    /// plugin's subscribed-events table. Without a logger the dispatcher
    /// stays empty.
    pub fn build(&self) -> SoapResult<SforceClient> {
        let transport = SoapTransport::from_wsdl(&self.wsdl, &self.options)?;
        let mut client = SforceClient::new(
            transport,
            self.username.clone(),
            self.password.clone(),
            self.token.clone(),
        );

        if let Some(logger) = &self.logger {
            let plugin = Arc::new(LogPlugin::new(Arc::clone(logger)));
            client
                .event_dispatcher_mut()
                .add_subscriber(plugin as Arc<dyn EventSubscriber>);
        }

        tracing::debug!(
            username = %self.username,
            transport = %client.transport().connection_info(),
            instrumented = self.logger.is_some(),
            "built client"
        );

        Ok(client)
    }
}

impl std::fmt::Debug for SforceClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SforceClientBuilder")
            .field("wsdl", &self.wsdl)
            .field("username", &self.username)
            .field("options", &self.options.len())
            .field("logger", &self.logger.is_some())
            .finish_non_exhaustive()
    }
}

pub type ClientBuilder = SforceClientBuilder;
