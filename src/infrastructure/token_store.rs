// Token persistence - the client's local credential storage
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::sync::RwLock;

use crate::error::Result;

/// Source of the bearer token attached to outgoing requests.
///
/// The token is read fresh on every request: one replaced mid-flight simply
/// takes effect on the next call. The token itself is an opaque string with
/// no structure and no expiry handling.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn current(&self) -> Result<Option<String>>;
    async fn store(&self, token: &str) -> Result<()>;
    async fn clear(&self) -> Result<()>;
}

/// Token persisted as a single line in a local file.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TokenProvider for FileTokenStore {
    async fn current(&self) -> Result<Option<String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => {
                let token = raw.trim();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token.to_string()))
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn store(&self, token: &str) -> Result<()> {
        tokio::fs::write(&self.path, token).await?;
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory token store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

#[async_trait]
impl TokenProvider for MemoryTokenStore {
    async fn current(&self) -> Result<Option<String>> {
        Ok(self.token.read().await.clone())
    }

    async fn store(&self, token: &str) -> Result<()> {
        *self.token.write().await = Some(token.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.token.write().await = None;
        Ok(())
    }
}
