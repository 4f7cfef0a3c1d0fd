//! Transient toast surface.
//!
//! Decouples "a noteworthy thing happened" from "what the UI shows".
//! Toasts are fire-and-forget, auto-dismiss after a TTL, and any number
//! can be visible at once. Durable domain notifications live in
//! [`crate::feed`], not here.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use uuid::Uuid;

use crate::config;

/// Success or error styling for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// One visible toast message.
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
    raised_at: Instant,
}

/// Process-wide toast list.
pub struct ToastBus {
    ttl: Duration,
    toasts: Mutex<Vec<Toast>>,
}

impl ToastBus {
    pub fn new() -> Self {
        Self::with_ttl(config::TOAST_TTL)
    }

    /// Bus with an explicit time-to-live (tests use a tiny one).
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            toasts: Mutex::new(Vec::new()),
        }
    }

    /// Publish a success toast. Fire-and-forget.
    pub fn success(&self, message: impl Into<String>) {
        self.publish(ToastKind::Success, message.into());
    }

    /// Publish an error toast. Fire-and-forget.
    pub fn error(&self, message: impl Into<String>) {
        self.publish(ToastKind::Error, message.into());
    }

    fn publish(&self, kind: ToastKind, message: String) {
        tracing::debug!(?kind, %message, "toast");
        if let Ok(mut toasts) = self.toasts.lock() {
            toasts.push(Toast {
                id: Uuid::new_v4(),
                kind,
                message,
                raised_at: Instant::now(),
            });
        }
    }

    /// Currently visible toasts; expired entries are pruned on read.
    pub fn active(&self) -> Vec<Toast> {
        match self.toasts.lock() {
            Ok(mut toasts) => {
                toasts.retain(|t| t.raised_at.elapsed() < self.ttl);
                toasts.clone()
            }
            Err(_) => Vec::new(),
        }
    }

    /// Dismiss a single toast early.
    pub fn dismiss(&self, id: Uuid) {
        if let Ok(mut toasts) = self.toasts.lock() {
            toasts.retain(|t| t.id != id);
        }
    }
}

impl Default for ToastBus {
    fn default() -> Self {
        Self::new()
    }
}
