//! Persisted session store.
//!
//! Single source of truth for "am I logged in, and with what token,"
//! durable across restarts. Two tiers mirror the deployment reality:
//! a durable JSON file shared by every process using the same home
//! directory (last-write-wins, no locking), and an ephemeral in-memory
//! fallback scoped to this process.
//!
//! Key properties:
//! - The ephemeral token copy is zeroed via `Zeroize` on clear/drop
//! - A corrupt durable file behaves as "logged out", never as an error
//! - Reads always consult the durable tier first

use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::config;
use crate::models::UserIdentity;

// ═══════════════════════════════════════════════════════════
// Session — the persisted blob
// ═══════════════════════════════════════════════════════════

/// What the durable file holds. Created on successful login; cleared to
/// `None`s on logout or detected expiry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<UserIdentity>,
}

// ═══════════════════════════════════════════════════════════
// EphemeralToken — zeroed on drop
// ═══════════════════════════════════════════════════════════

/// Process-local raw token fallback, zeroed on drop so a cleared
/// session leaves no copy behind in memory.
#[derive(Zeroize)]
#[zeroize(drop)]
struct EphemeralToken {
    value: String,
}

// ═══════════════════════════════════════════════════════════
// SessionStore
// ═══════════════════════════════════════════════════════════

/// Durable + ephemeral session storage.
pub struct SessionStore {
    /// Durable JSON file, shared across processes.
    path: PathBuf,
    /// Per-process fallback holding just the raw token.
    ephemeral: Mutex<Option<EphemeralToken>>,
}

impl SessionStore {
    /// Store rooted at the default platform location.
    pub fn new() -> Self {
        Self::with_path(config::session_file())
    }

    /// Store rooted at an explicit file path.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            ephemeral: Mutex::new(None),
        }
    }

    // ── Reads ────────────────────────────────────────────

    /// Current bearer token: durable file first, ephemeral fallback.
    /// `None` when both tiers are empty, never an error.
    pub fn token(&self) -> Option<String> {
        if let Some(token) = self.load().and_then(|s| s.token) {
            return Some(token);
        }
        self.ephemeral
            .lock()
            .ok()
            .and_then(|guard| guard.as_ref().map(|t| t.value.clone()))
    }

    /// Token as a header-ready value; empty string when unauthenticated.
    pub fn bearer_token(&self) -> String {
        self.token().unwrap_or_default()
    }

    /// Identity captured at login, if any.
    pub fn user(&self) -> Option<UserIdentity> {
        self.load().and_then(|s| s.user)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    // ── Writes ───────────────────────────────────────────

    /// Persist a fresh session. Called exactly once per successful login;
    /// the write is synchronous so the token is durable before the caller
    /// proceeds.
    pub fn set_session(
        &self,
        token: &str,
        user: Option<UserIdentity>,
    ) -> Result<(), SessionStoreError> {
        let session = Session {
            token: Some(token.to_string()),
            user,
        };
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let serialized = serde_json::to_vec_pretty(&session)?;
        std::fs::write(&self.path, serialized)?;
        self.set_ephemeral_token(token);
        Ok(())
    }

    /// Stash a raw token in the process-local tier only. Used before the
    /// durable write lands (or by shells that opt out of durability).
    pub fn set_ephemeral_token(&self, token: &str) {
        if let Ok(mut guard) = self.ephemeral.lock() {
            *guard = Some(EphemeralToken {
                value: token.to_string(),
            });
        }
    }

    /// Remove both tiers and reset to the initial defaults. Called on
    /// logout and on detected session expiry. Never fails: a missing
    /// file is already the desired state, anything else is logged.
    pub fn clear_session(&self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to remove session file");
            }
        }
        if let Ok(mut guard) = self.ephemeral.lock() {
            // EphemeralToken zeroes itself on drop.
            *guard = None;
        }
    }

    // ── Internal ─────────────────────────────────────────

    /// Read the durable tier. Unreadable or corrupt content is treated
    /// as absent so a damaged file degrades to "logged out".
    fn load(&self) -> Option<Session> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to read session file");
                return None;
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Corrupt session file ignored");
                None
            }
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════
// Error type
// ═══════════════════════════════════════════════════════════

/// Errors from persisting the session.
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Session I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Session serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
