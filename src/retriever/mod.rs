//! Retrieval of a single secret value

use tracing::{debug, instrument};

use crate::adapters::{get_secret_key, ClusterAccess, KubeSecretSource, SecretSource};
use crate::cli::Request;
use crate::error::RetrievalError;

/// Namespace used when none is given on the command line
pub const DEFAULT_NAMESPACE: &str = "default";

/// Namespace to read from: the requested one, or `default` when unset or empty
pub fn resolve_namespace(request: &Request) -> &str {
    request
        .namespace
        .as_deref()
        .filter(|ns| !ns.is_empty())
        .unwrap_or(DEFAULT_NAMESPACE)
}

/// Read the secret through `source` and extract the requested key
#[instrument(skip(source, request), fields(secret = %request.secret_name, namespace = resolve_namespace(request)))]
pub async fn lookup_value<S: SecretSource>(
    source: &S,
    request: &Request,
) -> Result<String, RetrievalError> {
    let namespace = resolve_namespace(request);
    let secret = source
        .fetch_secret(namespace, &request.secret_name)
        .await?;
    debug!(key = %request.key_name, "Secret fetched, looking up key");
    get_secret_key(&secret, &request.secret_name, &request.key_name)
}

/// Connect using the kubeconfig under `access` and fetch the requested value
pub async fn get_value(access: &ClusterAccess, request: &Request) -> Result<String, RetrievalError> {
    let client = access.connect().await?;
    lookup_value(&KubeSecretSource::new(client), request).await
}
