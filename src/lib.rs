//! Client-side data access and session layer for the PrognoSys backend.
//!
//! Everything flows through one pipeline: a per-call request client built
//! by [`client::ApiContext`] attaches the bearer token from the persisted
//! [`session::SessionStore`], and a single response guard centralizes
//! session expiry, error-message normalization, and toast publication.
//! Typed endpoint wrappers live under [`api`], the polled domain
//! notification feed in [`feed`], and representative view controllers
//! under [`views`].

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod feed;
pub mod models;
pub mod notify;
pub mod route;
pub mod session;
pub mod views;

pub use client::{ApiContext, HttpTransport, MockTransport, RequestClient, Transport};
pub use error::{ClientError, TransportError};
pub use feed::{NotificationFeed, PollerHandle};
pub use notify::{Toast, ToastBus, ToastKind};
pub use route::{Navigator, PredictionSource, Route};
pub use session::{Session, SessionStore};
