//! Kubernetes secret fetching utilities

use std::future::Future;

use k8s_openapi::api::core::v1::Secret;
use kube::{Api, Client};
use tracing::debug;

use crate::error::RetrievalError;

/// Anything able to read a secret by namespace and name
pub trait SecretSource {
    fn fetch_secret(
        &self,
        namespace: &str,
        name: &str,
    ) -> impl Future<Output = Result<Secret, RetrievalError>>;
}

/// Reads secrets from the API server
#[derive(Clone)]
pub struct KubeSecretSource {
    client: Client,
}

impl KubeSecretSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl SecretSource for KubeSecretSource {
    async fn fetch_secret(&self, namespace: &str, name: &str) -> Result<Secret, RetrievalError> {
        let secrets: Api<Secret> = Api::namespaced(self.client.clone(), namespace);
        debug!(namespace, name, "Fetching secret");
        // Not found, forbidden and transport errors are surfaced as-is
        Ok(secrets.get(name).await?)
    }
}

/// Get a specific key from a secret as text.
///
/// A secret without a `data` section has no keys.
pub fn get_secret_key(
    secret: &Secret,
    secret_name: &str,
    key: &str,
) -> Result<String, RetrievalError> {
    let value = secret
        .data
        .as_ref()
        .and_then(|data| data.get(key))
        .ok_or_else(|| RetrievalError::KeyMissing {
            key: key.to_string(),
            secret: secret_name.to_string(),
        })?;

    String::from_utf8(value.0.clone()).map_err(|_| RetrievalError::InvalidUtf8 {
        key: key.to_string(),
    })
}
