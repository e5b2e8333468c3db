//! kubectl secretvalue
//!
//! A kubectl plugin printing the decoded value of one key of a Kubernetes
//! Secret, read with the credentials of the local kubeconfig.

pub mod adapters;
pub mod cli;
pub mod error;
pub mod retriever;

pub use error::{Error, ParseError, Result, RetrievalError};
