//! Per-user settings.

use crate::api::decode;
use crate::client::ApiContext;
use crate::error::ClientError;
use crate::models::{UserSettings, UserSettingsPatch};

pub fn get(ctx: &ApiContext) -> Result<UserSettings, ClientError> {
    decode(ctx.request().get("settings/")?)
}

/// Partial update; the backend echoes the full settings record back.
pub fn update(ctx: &ApiContext, patch: &UserSettingsPatch) -> Result<UserSettings, ClientError> {
    decode(ctx.request().patch("settings/", patch)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{MockTransport, Transport};
    use crate::models::Theme;
    use crate::notify::ToastBus;
    use crate::route::Navigator;
    use crate::session::SessionStore;
    use serde_json::json;
    use std::sync::Arc;

    fn test_ctx() -> (ApiContext, Arc<MockTransport>, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let transport = Arc::new(MockTransport::new());
        let ctx = ApiContext::with_parts(
            "http://backend.test/api/",
            Arc::new(SessionStore::with_path(dir.path().join("session.json"))),
            Arc::new(ToastBus::new()),
            Arc::new(Navigator::new()),
            transport.clone() as Arc<dyn Transport>,
        );
        (ctx, transport, dir)
    }

    fn settings_row(theme: &str) -> serde_json::Value {
        json!({
            "email_notifications": true,
            "push_notifications": true,
            "room_updates": true,
            "system_updates": false,
            "theme": theme,
            "compact_mode": false,
            "phone": "",
            "department": ""
        })
    }

    #[test]
    fn get_decodes_settings() {
        let (ctx, transport, _dir) = test_ctx();
        transport.push_json(200, settings_row("light"));

        let settings = get(&ctx).unwrap();
        assert_eq!(settings.theme, Theme::Light);
    }

    #[test]
    fn patch_sends_only_changed_fields() {
        let (ctx, transport, _dir) = test_ctx();
        transport.push_json(200, settings_row("dark"));

        let patch = UserSettingsPatch {
            theme: Some(Theme::Dark),
            ..Default::default()
        };
        let updated = update(&ctx, &patch).unwrap();

        assert_eq!(updated.theme, Theme::Dark);
        let sent = transport.requests();
        let body = sent[0].body.as_ref().unwrap().as_object().unwrap();
        assert_eq!(body.len(), 1);
        assert!(body.contains_key("theme"));
    }
}
