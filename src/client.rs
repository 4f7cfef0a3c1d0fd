//! Request client factory and response guard.
//!
//! Every outgoing call gets a freshly built client so a token rotated
//! mid-session is always picked up from the session store. Every response
//! passes through one guard that centralizes the cross-cutting concerns:
//! session expiry (401), message normalization, and toast publication.
//! Call-specific handling stays with the calling view, which receives the
//! error after the guard has run.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::Value;

use crate::config;
use crate::error::{
    is_status_echo, normalize_failure, ClientError, TransportError, GENERIC_FALLBACK,
    SESSION_EXPIRED_MESSAGE,
};
use crate::notify::ToastBus;
use crate::route::{Navigator, Route};
use crate::session::SessionStore;

/// Endpoints expected to be callable pre-auth: a 401 from these never
/// triggers the global session-expiry flow.
const PREAUTH_ALLOWLIST: &[&str] = &["login", "register", "notifications"];

fn is_preauth(path: &str) -> bool {
    let path = path.trim_start_matches('/');
    PREAUTH_ALLOWLIST
        .iter()
        .any(|prefix| path.starts_with(prefix))
}

// ═══════════════════════════════════════════════════════════
// Transport seam
// ═══════════════════════════════════════════════════════════

/// HTTP verbs used against the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// A fully prepared outgoing request: URL resolved, token attached.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: String,
    /// Raw token; sent as `Authorization: Bearer <bearer>`. Empty when
    /// unauthenticated; the call still proceeds.
    pub bearer: String,
    pub body: Option<Value>,
}

impl PreparedRequest {
    /// The Authorization header value this request carries.
    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.bearer)
    }
}

/// Status + raw body, before any interpretation.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn json(status: u16, body: &Value) -> Self {
        Self {
            status,
            body: serde_json::to_vec(body).unwrap_or_default(),
        }
    }

    pub fn empty(status: u16) -> Self {
        Self {
            status,
            body: Vec::new(),
        }
    }
}

/// The wire seam. The real implementation wraps reqwest; tests script a
/// mock and inspect what would have gone out.
pub trait Transport: Send + Sync {
    fn send(&self, request: &PreparedRequest) -> Result<RawResponse, TransportError>;
}

// ═══════════════════════════════════════════════════════════
// HttpTransport — reqwest
// ═══════════════════════════════════════════════════════════

/// reqwest-backed transport. Cookies are kept so the backend's
/// cross-origin session cookies ride along with the bearer token.
pub struct HttpTransport {
    inner: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        let inner = reqwest::blocking::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .cookie_store(true)
            .build()
            .expect("Failed to create HTTP client");
        Self { inner }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &PreparedRequest) -> Result<RawResponse, TransportError> {
        let mut builder = match request.method {
            Method::Get => self.inner.get(&request.url),
            Method::Post => self.inner.post(&request.url),
            Method::Put => self.inner.put(&request.url),
            Method::Patch => self.inner.patch(&request.url),
            Method::Delete => self.inner.delete(&request.url),
        };

        builder = builder
            .header(reqwest::header::AUTHORIZATION, request.authorization())
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().map_err(|e| {
            if e.is_connect() {
                TransportError::Connect(request.url.clone())
            } else if e.is_timeout() {
                TransportError::Timeout
            } else {
                TransportError::Http(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .map_err(|e| TransportError::Http(e.to_string()))?
            .to_vec();
        Ok(RawResponse { status, body })
    }
}

// ═══════════════════════════════════════════════════════════
// MockTransport — scripted responses for tests
// ═══════════════════════════════════════════════════════════

/// Scripted transport: responses are consumed in order, every outgoing
/// request is recorded for inspection.
pub struct MockTransport {
    script: Mutex<VecDeque<Result<RawResponse, TransportError>>>,
    seen: Mutex<Vec<PreparedRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn push_response(&self, response: RawResponse) {
        if let Ok(mut script) = self.script.lock() {
            script.push_back(Ok(response));
        }
    }

    pub fn push_json(&self, status: u16, body: Value) {
        self.push_response(RawResponse::json(status, &body));
    }

    pub fn push_error(&self, error: TransportError) {
        if let Ok(mut script) = self.script.lock() {
            script.push_back(Err(error));
        }
    }

    /// Everything that was sent, in order.
    pub fn requests(&self) -> Vec<PreparedRequest> {
        self.seen
            .lock()
            .map(|seen| seen.clone())
            .unwrap_or_default()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for MockTransport {
    fn send(&self, request: &PreparedRequest) -> Result<RawResponse, TransportError> {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(request.clone());
        }
        self.script
            .lock()
            .ok()
            .and_then(|mut script| script.pop_front())
            .unwrap_or_else(|| Err(TransportError::Http("mock transport script exhausted".into())))
    }
}

// ═══════════════════════════════════════════════════════════
// ApiContext — long-lived handle, factory for per-call clients
// ═══════════════════════════════════════════════════════════

/// Shared context behind every call: where the backend is, the session
/// store the token is read from, and the surfaces the guard publishes to.
pub struct ApiContext {
    base_url: String,
    session: Arc<SessionStore>,
    toasts: Arc<ToastBus>,
    navigator: Arc<Navigator>,
    transport: Arc<dyn Transport>,
}

impl ApiContext {
    /// Production context: default backend origin, platform session file,
    /// reqwest transport.
    pub fn new() -> Self {
        Self::with_parts(
            config::DEFAULT_BASE_URL,
            Arc::new(SessionStore::new()),
            Arc::new(ToastBus::new()),
            Arc::new(Navigator::new()),
            Arc::new(HttpTransport::new()),
        )
    }

    pub fn with_parts(
        base_url: impl Into<String>,
        session: Arc<SessionStore>,
        toasts: Arc<ToastBus>,
        navigator: Arc<Navigator>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            session,
            toasts,
            navigator,
            transport,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn toasts(&self) -> &ToastBus {
        &self.toasts
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Build a fresh client for one call. The token is snapshotted here,
    /// so every call site sees the store's current token and nothing is
    /// shared between calls.
    pub fn request(&self) -> RequestClient {
        RequestClient {
            base_url: self.base_url.clone(),
            bearer: self.session.bearer_token(),
            session: Arc::clone(&self.session),
            toasts: Arc::clone(&self.toasts),
            navigator: Arc::clone(&self.navigator),
            transport: Arc::clone(&self.transport),
            quiet: false,
        }
    }
}

impl Default for ApiContext {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════
// RequestClient — one configured client per call
// ═══════════════════════════════════════════════════════════

/// A single-use client. Construct via [`ApiContext::request`].
pub struct RequestClient {
    base_url: String,
    bearer: String,
    session: Arc<SessionStore>,
    toasts: Arc<ToastBus>,
    navigator: Arc<Navigator>,
    transport: Arc<dyn Transport>,
    quiet: bool,
}

impl RequestClient {
    /// Suppress toast publication for this call. Used by background
    /// polling so its failures are logged, never shown.
    pub fn quiet(mut self) -> Self {
        self.quiet = true;
        self
    }

    pub fn get(&self, path: &str) -> Result<Value, ClientError> {
        self.execute(Method::Get, path, None)
    }

    pub fn post(&self, path: &str, body: &impl serde::Serialize) -> Result<Value, ClientError> {
        self.execute(Method::Post, path, Some(serde_json::to_value(body)?))
    }

    /// POST with no body (action endpoints like room occupy).
    pub fn post_empty(&self, path: &str) -> Result<Value, ClientError> {
        self.execute(Method::Post, path, None)
    }

    pub fn put(&self, path: &str, body: &impl serde::Serialize) -> Result<Value, ClientError> {
        self.execute(Method::Put, path, Some(serde_json::to_value(body)?))
    }

    pub fn patch(&self, path: &str, body: &impl serde::Serialize) -> Result<Value, ClientError> {
        self.execute(Method::Patch, path, Some(serde_json::to_value(body)?))
    }

    pub fn delete(&self, path: &str) -> Result<Value, ClientError> {
        self.execute(Method::Delete, path, None)
    }

    fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, ClientError> {
        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        let request = PreparedRequest {
            method,
            url,
            bearer: self.bearer.clone(),
            body,
        };

        tracing::debug!(method = request.method.as_str(), url = %request.url, "request");

        let response = match self.transport.send(&request) {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(url = %request.url, error = %e, "transport failure");
                if !self.quiet {
                    self.toasts.error(GENERIC_FALLBACK);
                }
                return Err(ClientError::Transport(e));
            }
        };

        self.guard(path, response)
    }

    /// The single chokepoint every response passes through.
    fn guard(&self, path: &str, response: RawResponse) -> Result<Value, ClientError> {
        if (200..300).contains(&response.status) {
            if response.body.is_empty() {
                return Ok(Value::Null);
            }
            return serde_json::from_slice(&response.body).map_err(ClientError::Decode);
        }

        if response.status == 401 && !is_preauth(path) {
            // Terminal for the session, not just the call: evict all
            // persisted auth material and send the shell back to login.
            tracing::info!(path, "session expired, clearing session");
            self.session.clear_session();
            self.toasts.error(SESSION_EXPIRED_MESSAGE);
            self.navigator.navigate(Route::Login);
            return Err(ClientError::SessionExpired);
        }

        let message = normalize_failure(response.status, &response.body);
        if self.quiet || is_status_echo(&message) {
            tracing::debug!(status = response.status, %message, "error toast suppressed");
        } else {
            self.toasts.error(message.clone());
        }
        Err(ClientError::Api {
            status: response.status,
            message,
        })
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
