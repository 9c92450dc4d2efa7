// ! SOAP transport construction
// !
// ! Module builds the transport a client wraps: it loads the service
// ! definition (WSDL), locates the SOAP endpoint address, and resolves the
// ! caller-supplied option map into typed connection settings. Invoking
// ! remote operations is out of scope here; the transport only carries the
// ! configured state a call layer would need.

use quick_xml::Reader;
use quick_xml::events::Event;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use url::Url;

use crate::core::error::{SoapError, SoapResult};

/// User-Agent string advertised by transports
pub const USER_AGENT: &str = concat!("sforce-soap-rs/", env!("CARGO_PKG_VERSION"));

/// SOAP protocol version selected for the transport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SoapVersion {
    /// SOAP 1.1 (the version the enterprise WSDL binds)
    #[default]
    V1_1,
    /// SOAP 1.2
    V1_2,
}

impl SoapVersion {
    fn parse(s: &str) -> SoapResult<Self> {
        match s {
            "1.1" => Ok(SoapVersion::V1_1),
            "1.2" => Ok(SoapVersion::V1_2),
            other => Err(SoapError::config(format!(
                "unsupported soap_version \"{other}\" (expected \"1.1\" or \"1.2\")"
            ))),
        }
    }
}

/// Typed connection settings resolved from the transport option map.
///
/// Keys the transport does not recognize stay in the raw map and remain
/// readable through [`SoapTransport::option`].
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectOptions {
    /// Connection timeout in milliseconds
    pub connection_timeout_ms: u64,
    /// User-Agent header value
    pub user_agent: String,
    /// SOAP protocol version
    pub soap_version: SoapVersion,
    /// Whether to retain request/response envelopes for inspection
    pub trace: bool,
    /// Whether to request compressed responses
    pub compression: bool,
}

impl Default for ConnectOptions {
    fn default() -> Self {
        Self {
            connection_timeout_ms: 30000,
            user_agent: USER_AGENT.to_string(),
            soap_version: SoapVersion::default(),
            trace: false,
            compression: false,
        }
    }
}

impl ConnectOptions {
    /// Resolve recognized keys from an option map, leaving the rest opaque.
    ///
    /// A recognized key carrying a value of the wrong JSON type is a
    /// configuration error; unknown keys are never an error.
    pub fn from_map(options: &HashMap<String, Value>) -> SoapResult<Self> {
        let mut resolved = Self::default();

        if let Some(value) = options.get("connection_timeout") {
            resolved.connection_timeout_ms = value.as_u64().ok_or_else(|| {
                SoapError::config("connection_timeout must be a non-negative number")
            })?;
        }
        if let Some(value) = options.get("user_agent") {
            resolved.user_agent = value
                .as_str()
                .ok_or_else(|| SoapError::config("user_agent must be a string"))?
                .to_string();
        }
        if let Some(value) = options.get("soap_version") {
            let version = value
                .as_str()
                .ok_or_else(|| SoapError::config("soap_version must be a string"))?;
            resolved.soap_version = SoapVersion::parse(version)?;
        }
        if let Some(value) = options.get("trace") {
            resolved.trace = value
                .as_bool()
                .ok_or_else(|| SoapError::config("trace must be a boolean"))?;
        }
        if let Some(value) = options.get("compression") {
            resolved.compression = value
                .as_bool()
                .ok_or_else(|| SoapError::config("compression must be a boolean"))?;
        }

        Ok(resolved)
    }
}

/// Configured SOAP transport wrapped by a built client.
///
/// Construction reads the WSDL eagerly and fails on unreadable or malformed
/// descriptors, so a successfully built client always carries a resolved
/// endpoint.
#[derive(Debug, Clone)]
pub struct SoapTransport {
    wsdl_path: PathBuf,
    service_name: Option<String>,
    endpoint: Url,
    options: ConnectOptions,
    raw_options: HashMap<String, Value>,
}

impl SoapTransport {
    /// Construct a transport from a WSDL path and an option map.
    ///
    /// The descriptor must be a local file; remote descriptors are rejected
    /// before any I/O since fetching them would require a network layer this
    /// crate does not provide.
    pub fn from_wsdl(wsdl: impl AsRef<Path>, options: &HashMap<String, Value>) -> SoapResult<Self> {
        let wsdl_path = wsdl.as_ref();
        if let Some(s) = wsdl_path.to_str() {
            if s.starts_with("http://") || s.starts_with("https://") {
                return Err(SoapError::config(
                    "remote WSDL locations are not supported; provide a local service definition file",
                ));
            }
        }

        let contents = std::fs::read_to_string(wsdl_path)?;
        let scanned = scan_wsdl(&contents)?;
        let endpoint = Url::parse(&scanned.location)?;
        let resolved = ConnectOptions::from_map(options)?;

        tracing::debug!(
            wsdl = %wsdl_path.display(),
            endpoint = %endpoint,
            service = scanned.service_name.as_deref().unwrap_or("<unnamed>"),
            timeout_ms = resolved.connection_timeout_ms,
            "loaded service definition"
        );

        Ok(Self {
            wsdl_path: wsdl_path.to_path_buf(),
            service_name: scanned.service_name,
            endpoint,
            options: resolved,
            raw_options: options.clone(),
        })
    }

    /// Path of the WSDL this transport was built from
    pub fn wsdl_path(&self) -> &Path {
        &self.wsdl_path
    }

    /// Endpoint URL declared by the WSDL's soap:address
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Service name declared by the WSDL, if any
    pub fn service_name(&self) -> Option<&str> {
        self.service_name.as_deref()
    }

    /// Resolved connection settings
    pub fn options(&self) -> &ConnectOptions {
        &self.options
    }

    /// Raw option value by key, recognized or not
    pub fn option(&self, key: &str) -> Option<&Value> {
        self.raw_options.get(key)
    }

    /// Connection description for diagnostics
    pub fn connection_info(&self) -> String {
        format!(
            "soap {} @ {} (wsdl: {})",
            self.service_name.as_deref().unwrap_or("<unnamed>"),
            self.endpoint,
            self.wsdl_path.display()
        )
    }
}

struct ScannedWsdl {
    service_name: Option<String>,
    location: String,
}

/// Scan a WSDL document for the service name and the soap:address location.
///
/// This is deliberately not a WSDL model: the transport only needs the
/// endpoint, and a streaming pass over element names is enough to find it
/// while still rejecting documents that are not service definitions.
fn scan_wsdl(contents: &str) -> SoapResult<ScannedWsdl> {
    let mut reader = Reader::from_str(contents);
    let mut saw_root = false;
    let mut service_name: Option<String> = None;
    let mut location: Option<String> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) => {
                let name = e.local_name();
                if !saw_root {
                    if name.as_ref() != b"definitions" {
                        return Err(SoapError::wsdl(format!(
                            "root element is not wsdl:definitions (found \"{}\")",
                            String::from_utf8_lossy(name.as_ref())
                        )));
                    }
                    saw_root = true;
                } else if name.as_ref() == b"service" && service_name.is_none() {
                    if let Some(attr) = e
                        .try_get_attribute("name")
                        .map_err(|err| SoapError::wsdl(err.to_string()))?
                    {
                        let value = attr
                            .unescape_value()
                            .map_err(|err| SoapError::wsdl(err.to_string()))?;
                        service_name = Some(value.into_owned());
                    }
                } else if name.as_ref() == b"address" && location.is_none() {
                    if let Some(attr) = e
                        .try_get_attribute("location")
                        .map_err(|err| SoapError::wsdl(err.to_string()))?
                    {
                        let value = attr
                            .unescape_value()
                            .map_err(|err| SoapError::wsdl(err.to_string()))?;
                        location = Some(value.into_owned());
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_root {
        return Err(SoapError::wsdl("document has no root element"));
    }
    let location =
        location.ok_or_else(|| SoapError::wsdl("no soap:address location declared"))?;

    Ok(ScannedWsdl {
        service_name,
        location,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SANDBOX_WSDL: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<definitions xmlns="http://schemas.xmlsoap.org/wsdl/"
             xmlns:soap="http://schemas.xmlsoap.org/wsdl/soap/"
             xmlns:tns="urn:enterprise.soap.sforce.com"
             targetNamespace="urn:enterprise.soap.sforce.com">
  <service name="SforceService">
    <port binding="tns:SoapBinding" name="Soap">
      <soap:address location="https://test.salesforce.com/services/Soap/c/65.0"/>
    </port>
  </service>
</definitions>
"#;

    fn write_wsdl(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_from_wsdl_resolves_endpoint_and_service() {
        let wsdl = write_wsdl(SANDBOX_WSDL);
        let transport = SoapTransport::from_wsdl(wsdl.path(), &HashMap::new()).unwrap();

        assert_eq!(
            transport.endpoint().as_str(),
            "https://test.salesforce.com/services/Soap/c/65.0"
        );
        assert_eq!(transport.service_name(), Some("SforceService"));
        assert_eq!(transport.wsdl_path(), wsdl.path());
        assert_eq!(transport.options(), &ConnectOptions::default());
    }

    #[test]
    fn test_missing_wsdl_is_io_error() {
        let err =
            SoapTransport::from_wsdl("/definitely/not/here.wsdl", &HashMap::new()).unwrap_err();
        assert!(matches!(err, SoapError::Io(_)), "got {err:?}");
    }

    #[test]
    fn test_remote_wsdl_is_rejected() {
        let err = SoapTransport::from_wsdl(
            "https://login.salesforce.com/enterprise.wsdl",
            &HashMap::new(),
        )
        .unwrap_err();
        assert!(matches!(err, SoapError::Config(_)), "got {err:?}");
    }

    #[test]
    fn test_non_wsdl_root_is_rejected() {
        let wsdl = write_wsdl("<html><body>not a wsdl</body></html>");
        let err = SoapTransport::from_wsdl(wsdl.path(), &HashMap::new()).unwrap_err();
        assert!(matches!(err, SoapError::Wsdl(_)), "got {err:?}");
        assert!(err.to_string().contains("html"));
    }

    #[test]
    fn test_document_without_elements_is_rejected() {
        let wsdl = write_wsdl("just some text, no markup");
        let err = SoapTransport::from_wsdl(wsdl.path(), &HashMap::new()).unwrap_err();
        assert!(matches!(err, SoapError::Wsdl(_)), "got {err:?}");
    }

    #[test]
    fn test_missing_address_is_rejected() {
        let wsdl = write_wsdl(
            r#"<definitions xmlns="http://schemas.xmlsoap.org/wsdl/">
                 <service name="SforceService"/>
               </definitions>"#,
        );
        let err = SoapTransport::from_wsdl(wsdl.path(), &HashMap::new()).unwrap_err();
        assert!(matches!(err, SoapError::Wsdl(_)), "got {err:?}");
        assert!(err.to_string().contains("soap:address"));
    }

    #[test]
    fn test_malformed_endpoint_url_is_rejected() {
        let wsdl = write_wsdl(
            r#"<definitions xmlns:soap="http://schemas.xmlsoap.org/wsdl/soap/">
                 <soap:address location="not a url"/>
               </definitions>"#,
        );
        let err = SoapTransport::from_wsdl(wsdl.path(), &HashMap::new()).unwrap_err();
        assert!(matches!(err, SoapError::Url(_)), "got {err:?}");
    }

    #[test]
    fn test_recognized_options_are_resolved() {
        let wsdl = write_wsdl(SANDBOX_WSDL);
        let options = HashMap::from([
            ("connection_timeout".to_string(), json!(5000)),
            ("user_agent".to_string(), json!("custom-agent/1.0")),
            ("soap_version".to_string(), json!("1.2")),
            ("trace".to_string(), json!(true)),
            ("compression".to_string(), json!(true)),
        ]);
        let transport = SoapTransport::from_wsdl(wsdl.path(), &options).unwrap();

        let resolved = transport.options();
        assert_eq!(resolved.connection_timeout_ms, 5000);
        assert_eq!(resolved.user_agent, "custom-agent/1.0");
        assert_eq!(resolved.soap_version, SoapVersion::V1_2);
        assert!(resolved.trace);
        assert!(resolved.compression);
    }

    #[test]
    fn test_unknown_options_stay_opaque() {
        let wsdl = write_wsdl(SANDBOX_WSDL);
        let options = HashMap::from([("test-option".to_string(), json!("test-value"))]);
        let transport = SoapTransport::from_wsdl(wsdl.path(), &options).unwrap();

        assert_eq!(transport.option("test-option"), Some(&json!("test-value")));
        assert_eq!(transport.option("absent"), None);
        assert_eq!(transport.options(), &ConnectOptions::default());
    }

    #[test]
    fn test_wrongly_typed_option_is_config_error() {
        let options = HashMap::from([("connection_timeout".to_string(), json!("soon"))]);
        let err = ConnectOptions::from_map(&options).unwrap_err();
        assert!(matches!(err, SoapError::Config(_)), "got {err:?}");

        let options = HashMap::from([("trace".to_string(), json!("yes"))]);
        assert!(ConnectOptions::from_map(&options).is_err());

        let options = HashMap::from([("compression".to_string(), json!(1))]);
        assert!(ConnectOptions::from_map(&options).is_err());

        let options = HashMap::from([("soap_version".to_string(), json!("2.0"))]);
        assert!(ConnectOptions::from_map(&options).is_err());
    }

    #[test]
    fn test_default_options() {
        let resolved = ConnectOptions::default();
        assert_eq!(resolved.connection_timeout_ms, 30000);
        assert_eq!(resolved.soap_version, SoapVersion::V1_1);
        assert!(resolved.user_agent.starts_with("sforce-soap-rs/"));
        assert!(!resolved.trace);
        assert!(!resolved.compression);
    }

    #[test]
    fn test_connection_info_mentions_endpoint() {
        let wsdl = write_wsdl(SANDBOX_WSDL);
        let transport = SoapTransport::from_wsdl(wsdl.path(), &HashMap::new()).unwrap();
        let info = transport.connection_info();
        assert!(info.contains("SforceService"));
        assert!(info.contains("test.salesforce.com"));
    }
}
