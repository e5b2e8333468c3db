//! Error types for the secretvalue plugin

use std::path::PathBuf;

use kube::config::KubeconfigError;
use thiserror::Error;

/// Result type for the plugin
pub type Result<T> = std::result::Result<T, Error>;

/// Exit code for a failed retrieval
pub const EXIT_RETRIEVAL: u8 = 1;

/// Exit code for malformed command-line arguments
pub const EXIT_USAGE: u8 = 2;

/// Command-line parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The namespace option was given more than once
    #[error("Duplicate option")]
    DuplicateOption,
    /// A flag that the plugin does not recognize
    #[error("unknown option : {0}")]
    UnknownOption(String),
    /// Missing SECRET_NAME / KEY, or too many positionals
    #[error("wrong number of parameters")]
    WrongNumberOfParameters,
    /// An option that takes a value was the last token
    #[error("missing value for option {0}")]
    MissingValue(String),
}

/// Failures while fetching the secret value from the cluster
#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("unable to determine the user home directory")]
    HomeDirUnavailable,

    #[error("unable to load kubeconfig {}: {source}", path.display())]
    Kubeconfig {
        path: PathBuf,
        #[source]
        source: KubeconfigError,
    },

    #[error("invalid cluster configuration: {0}")]
    ConnectionConfig(#[source] KubeconfigError),

    #[error("unable to create Kubernetes client: {0}")]
    Connection(#[source] kube::Error),

    /// Errors from the API server are passed through untouched
    #[error(transparent)]
    Api(#[from] kube::Error),

    #[error("Key {key} is missing in Secret {secret}")]
    KeyMissing { key: String, secret: String },

    #[error("value of key {key} is not valid UTF-8")]
    InvalidUtf8 { key: String },
}

/// Top-level error for one plugin invocation
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Retrieval(#[from] RetrievalError),
}

impl Error {
    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Parse(_) => EXIT_USAGE,
            Error::Retrieval(_) => EXIT_RETRIEVAL,
        }
    }
}
