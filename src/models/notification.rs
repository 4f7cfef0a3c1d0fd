use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::enums::{NotificationPriority, NotificationType};

/// Durable, backend-owned record of a domain event, distinct from the
/// transient toasts in [`crate::notify`].
#[derive(Debug, Clone, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub message: String,
    pub notification_type: NotificationType,
    pub created: DateTime<Utc>,
    pub seen: bool,
    pub priority: NotificationPriority,
    #[serde(default)]
    pub patient_name: Option<String>,
}
