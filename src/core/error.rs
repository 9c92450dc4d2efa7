// ! Error types for the Salesforce SOAP client layer
// !
// ! Module defines all error types that can occur while configuring and
// ! constructing clients, providing structured error handling with context.

use thiserror::Error;

/// The main error type for the SOAP client layer
#[derive(Error, Debug, Clone)]
pub enum SoapError {
    /// WSDL-related errors (unreadable, malformed, missing endpoint)
    #[error("WSDL error: {0}")]
    Wsdl(String),

    /// Transport-related errors (connection, endpoint state)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Configuration errors (invalid option values, unsupported settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors from the standard library
    #[error("I/O error: {0}")]
    Io(String),

    /// URL parsing errors
    #[error("URL error: {0}")]
    Url(String),

    /// Internal errors that shouldn't normally occur
    #[error("Internal error: {0}")]
    Internal(String),
}

// Manual From implementations for types that don't implement Clone
impl From<serde_json::Error> for SoapError {
    fn from(err: serde_json::Error) -> Self {
        SoapError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for SoapError {
    fn from(err: std::io::Error) -> Self {
        SoapError::Io(err.to_string())
    }
}

impl From<url::ParseError> for SoapError {
    fn from(err: url::ParseError) -> Self {
        SoapError::Url(err.to_string())
    }
}

impl From<quick_xml::Error> for SoapError {
    fn from(err: quick_xml::Error) -> Self {
        SoapError::Wsdl(err.to_string())
    }
}

/// Result type alias for SOAP client operations
pub type SoapResult<T> = Result<T, SoapError>;

impl SoapError {
    /// Create a new WSDL error
    pub fn wsdl<S: Into<String>>(message: S) -> Self {
        Self::Wsdl(message.into())
    }

    /// Create a new transport error
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport(message.into())
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Create a new internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Get the error category as a string for diagnostics
    pub fn category(&self) -> &'static str {
        match self {
            SoapError::Wsdl(_) => "wsdl",
            SoapError::Transport(_) => "transport",
            SoapError::Config(_) => "config",
            SoapError::Serialization(_) => "serialization",
            SoapError::Io(_) => "io",
            SoapError::Url(_) => "url",
            SoapError::Internal(_) => "internal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_display() {
        let err = SoapError::wsdl("root element is not definitions");
        assert_eq!(
            err.to_string(),
            "WSDL error: root element is not definitions"
        );

        let err = SoapError::config("connection_timeout must be a number");
        assert_eq!(
            err.to_string(),
            "Configuration error: connection_timeout must be a number"
        );
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(SoapError::wsdl("x").category(), "wsdl");
        assert_eq!(SoapError::transport("x").category(), "transport");
        assert_eq!(SoapError::config("x").category(), "config");
        assert_eq!(SoapError::internal("x").category(), "internal");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: SoapError = io_err.into();
        assert!(matches!(err, SoapError::Io(_)));
        assert_eq!(err.category(), "io");
    }

    #[test]
    fn test_from_url_error() {
        let parse_err = url::Url::parse("not a url").unwrap_err();
        let err: SoapError = parse_err.into();
        assert!(matches!(err, SoapError::Url(_)));
    }

    #[test]
    fn test_errors_are_cloneable() {
        let err = SoapError::transport("endpoint unreachable");
        let cloned = err.clone();
        assert_eq!(err.to_string(), cloned.to_string());
    }
}
