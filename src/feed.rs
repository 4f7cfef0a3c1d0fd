//! Domain notification feed.
//!
//! Polls the backend on a fixed interval, replaces the local list
//! wholesale on every refresh, and tracks the unread count. Mark-seen
//! operations round-trip to the backend before any local mutation, so a
//! failed call leaves the local copy stale but consistent.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use crate::api;
use crate::client::ApiContext;
use crate::error::ClientError;
use crate::models::Notification;

// ═══════════════════════════════════════════════════════════
// NotificationFeed
// ═══════════════════════════════════════════════════════════

struct FeedState {
    notifications: Vec<Notification>,
    unread: usize,
}

/// Local mirror of the backend's notification list.
pub struct NotificationFeed {
    ctx: Arc<ApiContext>,
    state: Mutex<FeedState>,
}

impl NotificationFeed {
    pub fn new(ctx: Arc<ApiContext>) -> Self {
        Self {
            ctx,
            state: Mutex::new(FeedState {
                notifications: Vec::new(),
                unread: 0,
            }),
        }
    }

    /// Fetch the current list and replace the local copy wholesale.
    /// Failures are logged, never toasted: background polling must not
    /// spam the user.
    pub fn refresh(&self) {
        match api::notifications::list(&self.ctx) {
            Ok(notifications) => {
                let unread = notifications.iter().filter(|n| !n.seen).count();
                if let Ok(mut state) = self.state.lock() {
                    state.notifications = notifications;
                    state.unread = unread;
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "notification refresh failed");
            }
        }
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.state
            .lock()
            .map(|state| state.notifications.clone())
            .unwrap_or_default()
    }

    pub fn unread_count(&self) -> usize {
        self.state.lock().map(|state| state.unread).unwrap_or(0)
    }

    /// Mark one notification seen. Backend first; the local flag flips
    /// only after the call resolves.
    pub fn mark_seen(&self, notification_id: i64) -> Result<(), ClientError> {
        api::notifications::mark_seen(&self.ctx, notification_id)?;
        if let Ok(mut state) = self.state.lock() {
            for notification in &mut state.notifications {
                if notification.id == notification_id {
                    notification.seen = true;
                }
            }
            state.unread = state.notifications.iter().filter(|n| !n.seen).count();
        }
        Ok(())
    }

    /// Mark everything seen. Backend first, local after.
    pub fn mark_all_seen(&self) -> Result<(), ClientError> {
        api::notifications::mark_all_seen(&self.ctx)?;
        if let Ok(mut state) = self.state.lock() {
            for notification in &mut state.notifications {
                notification.seen = true;
            }
            state.unread = 0;
        }
        Ok(())
    }

    /// Start polling at the application's standard cadence.
    pub fn start(feed: &Arc<Self>) -> PollerHandle {
        Self::spawn_poller(feed, crate::config::NOTIFICATION_POLL_INTERVAL)
    }

    /// Start the background poller: one refresh immediately, then one per
    /// interval until the handle is stopped or dropped.
    pub fn spawn_poller(feed: &Arc<Self>, interval: Duration) -> PollerHandle {
        let stop = Arc::new(AtomicBool::new(false));
        let thread = std::thread::spawn({
            let feed = Arc::clone(feed);
            let stop = Arc::clone(&stop);
            move || {
                feed.refresh();
                while !stop.load(Ordering::Relaxed) {
                    // Sleep in short slices so teardown is prompt even
                    // with a long interval.
                    let mut slept = Duration::ZERO;
                    while slept < interval && !stop.load(Ordering::Relaxed) {
                        let slice = Duration::from_millis(50).min(interval - slept);
                        std::thread::sleep(slice);
                        slept += slice;
                    }
                    if stop.load(Ordering::Relaxed) {
                        break;
                    }
                    feed.refresh();
                }
            }
        });
        PollerHandle {
            stop,
            thread: Some(thread),
        }
    }
}

// ═══════════════════════════════════════════════════════════
// PollerHandle
// ═══════════════════════════════════════════════════════════

/// Owns the polling thread; stopping (or dropping) clears the interval.
pub struct PollerHandle {
    stop: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl PollerHandle {
    /// Stop polling and wait for the thread to exit.
    pub fn stop(self) {
        // Drop does the work.
    }

    pub fn is_running(&self) -> bool {
        self.thread.as_ref().is_some_and(|t| !t.is_finished())
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{MockTransport, Transport};
    use crate::notify::ToastBus;
    use crate::route::Navigator;
    use crate::session::SessionStore;
    use serde_json::json;

    fn test_feed() -> (Arc<NotificationFeed>, Arc<MockTransport>, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let transport = Arc::new(MockTransport::new());
        let ctx = Arc::new(ApiContext::with_parts(
            "http://backend.test/api/",
            Arc::new(SessionStore::with_path(dir.path().join("session.json"))),
            Arc::new(ToastBus::new()),
            Arc::new(Navigator::new()),
            transport.clone() as Arc<dyn Transport>,
        ));
        (Arc::new(NotificationFeed::new(ctx)), transport, dir)
    }

    fn notification_row(id: i64, seen: bool) -> serde_json::Value {
        json!({
            "id": id,
            "message": format!("Notification {id}"),
            "notification_type": "patient_update",
            "created": "2025-02-01T10:00:00Z",
            "seen": seen,
            "priority": "medium",
            "patient_name": null
        })
    }

    #[test]
    fn refresh_replaces_list_and_counts_unread() {
        let (feed, transport, _dir) = test_feed();
        transport.push_json(
            200,
            json!([notification_row(1, false), notification_row(2, true), notification_row(3, false)]),
        );

        feed.refresh();

        assert_eq!(feed.notifications().len(), 3);
        assert_eq!(feed.unread_count(), 2);
    }

    #[test]
    fn refresh_is_wholesale_not_a_merge() {
        let (feed, transport, _dir) = test_feed();
        transport.push_json(200, json!([notification_row(1, false)]));
        feed.refresh();

        transport.push_json(200, json!([notification_row(9, true)]));
        feed.refresh();

        let notifications = feed.notifications();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].id, 9);
        assert_eq!(feed.unread_count(), 0);
    }

    #[test]
    fn refresh_failure_keeps_previous_list_and_stays_silent() {
        let (feed, transport, _dir) = test_feed();
        transport.push_json(200, json!([notification_row(1, false)]));
        feed.refresh();

        transport.push_json(500, json!({"trace": "x"}));
        feed.refresh();

        assert_eq!(feed.notifications().len(), 1);
        assert_eq!(feed.unread_count(), 1);
        assert!(feed.ctx.toasts().active().is_empty());
    }

    #[test]
    fn mark_seen_flips_local_flag_after_round_trip() {
        let (feed, transport, _dir) = test_feed();
        transport.push_json(200, json!([notification_row(1, false), notification_row(2, false)]));
        feed.refresh();

        transport.push_json(200, json!({"id": 1, "seen": true}));
        feed.mark_seen(1).unwrap();

        assert_eq!(feed.unread_count(), 1);
        let sent = transport.requests();
        assert_eq!(sent[1].url, "http://backend.test/api/notifications/1/");
    }

    #[test]
    fn failed_mark_seen_leaves_local_state_unchanged() {
        let (feed, transport, _dir) = test_feed();
        transport.push_json(200, json!([notification_row(1, false)]));
        feed.refresh();

        transport.push_json(400, json!({"error": "Notification not found"}));
        let result = feed.mark_seen(1);

        assert!(result.is_err());
        assert_eq!(feed.unread_count(), 1, "local state stays stale-but-consistent");
        // Mark-seen failures do surface, unlike polling failures.
        assert_eq!(feed.ctx.toasts().active().len(), 1);
    }

    #[test]
    fn mark_all_then_refresh_reports_zero_unread() {
        let (feed, transport, _dir) = test_feed();
        transport.push_json(200, json!([notification_row(1, false), notification_row(2, false)]));
        feed.refresh();

        transport.push_json(200, json!({"message": "All notifications marked as read"}));
        feed.mark_all_seen().unwrap();
        assert_eq!(feed.unread_count(), 0);

        transport.push_json(200, json!([notification_row(1, true), notification_row(2, true)]));
        feed.refresh();
        assert_eq!(feed.unread_count(), 0);
    }

    #[test]
    fn poller_refreshes_on_start_and_stops_on_teardown() {
        let (feed, transport, _dir) = test_feed();
        transport.push_json(200, json!([notification_row(1, false)]));

        let handle = NotificationFeed::spawn_poller(&feed, Duration::from_secs(60));
        // The mount-time refresh runs immediately.
        let deadline = std::time::Instant::now() + Duration::from_secs(2);
        while feed.notifications().is_empty() && std::time::Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(10));
        }
        assert_eq!(feed.notifications().len(), 1);
        assert!(handle.is_running());

        handle.stop();
        // One request total: the interval never elapsed.
        assert_eq!(transport.requests().len(), 1);
    }
}
