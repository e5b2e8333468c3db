//! Adapters between the plugin and the Kubernetes API

pub mod kubeconfig;
pub mod secrets;

pub use kubeconfig::ClusterAccess;
pub use secrets::{get_secret_key, KubeSecretSource, SecretSource};
