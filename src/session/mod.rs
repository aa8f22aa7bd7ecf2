//! The signed-in session: bearer token and sidebar preference.
//!
//! A [`SessionStore`] is created once at start-up and handed to whoever needs
//! it; nothing reads the session file behind its back.

mod store;

pub use store::SessionStore;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::utils::flora_home;

pub const SESSION_FILENAME: &str = "session.json";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid session file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not determine home directory")]
    HomeDirNotFound,

    #[error("Token must not be empty")]
    EmptyToken,
}

/// Persisted session state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default)]
    pub sidebar_collapsed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Session {
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.token.is_some()
    }
}

/// `~/.flora-admin/session.json`
pub fn default_session_path() -> Result<PathBuf, SessionError> {
    flora_home()
        .map(|home| home.join(SESSION_FILENAME))
        .ok_or(SessionError::HomeDirNotFound)
}

#[cfg(test)]
#[path = "../session_tests.rs"]
mod session_tests;
