//! Domain notification endpoints.
//!
//! `list` runs quiet: it is the background poller's call, and polling
//! failures must not toast. The mark-seen calls use the normal pipeline
//! so their failures surface like any other user action.

use crate::api::decode;
use crate::client::ApiContext;
use crate::error::ClientError;
use crate::models::Notification;

pub fn list(ctx: &ApiContext) -> Result<Vec<Notification>, ClientError> {
    decode(ctx.request().quiet().get("notifications/")?)
}

pub fn mark_seen(ctx: &ApiContext, notification_id: i64) -> Result<(), ClientError> {
    ctx.request().patch(
        &format!("notifications/{notification_id}/"),
        &serde_json::json!({ "seen": true }),
    )?;
    Ok(())
}

pub fn mark_all_seen(ctx: &ApiContext) -> Result<(), ClientError> {
    ctx.request().post_empty("notifications/mark-all-read/")?;
    Ok(())
}
