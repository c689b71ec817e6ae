//! All error types for the resjs crate.
//!
//! These are returned from all fallible operations (bundle loading, discovery,
//! serialization, resx lookup). An absent localized value is deliberately not
//! represented here: it is a normal outcome surfaced through the not-found
//! sentinel, never an error.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot load resource bundle `{path}`: {source}")]
    ModuleLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("discovery error: {0}")]
    Discovery(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML parse error: {0}")]
    XmlParse(#[from] quick_xml::Error),

    #[error("invalid document: {0}")]
    InvalidDocument(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Creates a module-load error for the given bundle path.
    pub fn module_load(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::ModuleLoad {
            path: path.into(),
            source,
        }
    }

    /// Creates a discovery error.
    pub fn discovery(message: impl Into<String>) -> Self {
        Error::Discovery(message.into())
    }

    /// Creates an invalid-argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }
}

impl From<serde_json::Error> for Error {
    /// Bundle shape errors are introspection failures, not load failures.
    fn from(value: serde_json::Error) -> Self {
        Error::Discovery(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_module_load_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = Error::module_load("Resources.bundle.json", io_error);
        let display = error.to_string();
        assert!(display.contains("cannot load resource bundle"));
        assert!(display.contains("Resources.bundle.json"));
    }

    #[test]
    fn test_discovery_error() {
        let error = Error::discovery("group `Common` has no entries array");
        assert_eq!(
            error.to_string(),
            "discovery error: group `Common` has no entries array"
        );
    }

    #[test]
    fn test_discovery_error_from_serde_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{ nope }").unwrap_err();
        let error = Error::from(json_error);
        assert!(matches!(error, Error::Discovery(_)));
        assert!(error.to_string().starts_with("discovery error:"));
    }

    #[test]
    fn test_io_error() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let error = Error::Io(io_error);
        assert!(error.to_string().contains("I/O error"));
    }

    #[test]
    fn test_invalid_argument_error() {
        let error = Error::invalid_argument("culture list must not be empty");
        assert_eq!(
            error.to_string(),
            "invalid argument: culture list must not be empty"
        );
    }

    #[test]
    fn test_invalid_document_error() {
        let error = Error::InvalidDocument("data tag missing 'name'".to_string());
        assert_eq!(
            error.to_string(),
            "invalid document: data tag missing 'name'"
        );
    }

    #[test]
    fn test_error_debug() {
        let error = Error::Discovery("test".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Discovery"));
        assert!(debug.contains("test"));
    }
}
