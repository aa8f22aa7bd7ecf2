use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::{Session, SessionError};
use crate::utils::{atomic_write, now_iso};

/// Owner of the [`Session`], optionally backed by a file.
#[derive(Debug)]
pub struct SessionStore {
    path: Option<PathBuf>,
    state: Mutex<Session>,
}

impl SessionStore {
    /// Read the session persisted at `path`. A missing file is a signed-out
    /// session.
    pub async fn init(path: impl Into<PathBuf>) -> Result<Self, SessionError> {
        let path = path.into();
        let session = if fs::try_exists(&path).await? {
            let content = fs::read_to_string(&path).await?;
            serde_json::from_str(&content)?
        } else {
            debug!("No session file at {}, starting signed out", path.display());
            Session::default()
        };
        Ok(Self {
            path: Some(path),
            state: Mutex::new(session),
        })
    }

    /// A store that never touches the disk.
    #[must_use]
    pub fn in_memory(session: Session) -> Self {
        Self {
            path: None,
            state: Mutex::new(session),
        }
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub async fn snapshot(&self) -> Session {
        self.state.lock().await.clone()
    }

    pub async fn token(&self) -> Option<String> {
        self.state.lock().await.token.clone()
    }

    pub async fn login(&self, token: &str) -> Result<(), SessionError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(SessionError::EmptyToken);
        }
        let mut state = self.state.lock().await;
        state.token = Some(token.to_string());
        self.persist(&mut state).await?;
        info!("Signed in");
        Ok(())
    }

    /// Teardown: forget the token, keep UI preferences.
    pub async fn logout(&self) -> Result<(), SessionError> {
        let mut state = self.state.lock().await;
        state.token = None;
        self.persist(&mut state).await?;
        info!("Signed out");
        Ok(())
    }

    /// Drop credentials the backend refused. Persistence failures are logged
    /// only; the in-memory token is gone either way.
    pub async fn invalidate(&self) {
        let mut state = self.state.lock().await;
        if state.token.take().is_none() {
            return;
        }
        warn!("Session rejected by the server, credentials cleared");
        if let Err(e) = self.persist(&mut state).await {
            warn!("Failed to persist cleared session: {}", e);
        }
    }

    /// Flip the sidebar preference and return the new value.
    pub async fn toggle_sidebar(&self) -> Result<bool, SessionError> {
        let mut state = self.state.lock().await;
        state.sidebar_collapsed = !state.sidebar_collapsed;
        self.persist(&mut state).await?;
        Ok(state.sidebar_collapsed)
    }

    async fn persist(&self, state: &mut Session) -> Result<(), SessionError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        state.updated_at = Some(now_iso());
        let content = serde_json::to_string_pretty(&*state)?;
        atomic_write(path, &content).await?;
        Ok(())
    }
}
