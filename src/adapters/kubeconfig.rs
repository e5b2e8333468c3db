//! Kubeconfig loading and client construction

use std::path::{Path, PathBuf};

use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};
use tracing::debug;

use crate::error::RetrievalError;

/// Where the cluster-access configuration lives, relative to the home directory
const KUBECONFIG_RELATIVE_PATH: [&str; 2] = [".kube", "config"];

/// Location of the cluster-access configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterAccess {
    /// Home directory of the calling user
    pub home_dir: Option<PathBuf>,
}

impl ClusterAccess {
    /// Use an explicit home directory
    pub fn with_home_dir(home_dir: impl Into<PathBuf>) -> Self {
        Self {
            home_dir: Some(home_dir.into()),
        }
    }

    /// Resolve the home directory of the current user
    pub fn from_env() -> Self {
        Self {
            home_dir: dirs::home_dir(),
        }
    }

    /// Path of the kubeconfig file, `<home>/.kube/config`
    pub fn kubeconfig_path(&self) -> Result<PathBuf, RetrievalError> {
        let home = self
            .home_dir
            .as_deref()
            .ok_or(RetrievalError::HomeDirUnavailable)?;
        Ok(KUBECONFIG_RELATIVE_PATH
            .iter()
            .fold(home.to_path_buf(), |path, part| path.join(part)))
    }

    /// Read and parse the kubeconfig file
    pub fn load_kubeconfig(&self) -> Result<Kubeconfig, RetrievalError> {
        let path = self.kubeconfig_path()?;
        debug!(path = %path.display(), "Loading kubeconfig");
        read_kubeconfig(&path)
    }

    /// Build an authenticated client for the kubeconfig's current context
    pub async fn connect(&self) -> Result<Client, RetrievalError> {
        let kubeconfig = self.load_kubeconfig()?;
        let config = Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
            .await
            .map_err(RetrievalError::ConnectionConfig)?;
        debug!(cluster_url = %config.cluster_url, "Creating Kubernetes client");
        Client::try_from(config).map_err(RetrievalError::Connection)
    }
}

fn read_kubeconfig(path: &Path) -> Result<Kubeconfig, RetrievalError> {
    Kubeconfig::read_from(path).map_err(|source| RetrievalError::Kubeconfig {
        path: path.to_path_buf(),
        source,
    })
}
