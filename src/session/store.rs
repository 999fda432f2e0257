//! Session token persistence

use async_trait::async_trait;
use directories::ProjectDirs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::account::AuthError;

/// Store for the opaque session token handed over after sign-in.
///
/// The token's contents are never inspected here.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Persist the token, replacing any previous one.
    async fn save(&self, token: &str) -> Result<(), AuthError>;

    /// Retrieve the previously saved token, if any.
    async fn load(&self) -> Result<Option<String>, AuthError>;
}

/// Token store backed by a file under the platform data directory.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Store at the default location, `<data dir>/session-token`.
    pub fn new() -> Option<Self> {
        ProjectDirs::from("io", "authflow", "authflow")
            .map(|dirs| Self::at(dirs.data_dir().join("session-token")))
    }

    /// Store at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn save(&self, token: &str) -> Result<(), AuthError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|err| {
                warn!("failed to create token directory: {err}");
                AuthError::Unexpected
            })?;
        }
        tokio::fs::write(&self.path, token).await.map_err(|err| {
            warn!("failed to write token: {err}");
            AuthError::Unexpected
        })
    }

    async fn load(&self) -> Result<Option<String>, AuthError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(token) => Ok(Some(token)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => {
                warn!("failed to read token: {err}");
                Err(AuthError::Unexpected)
            }
        }
    }
}
