//! Profile read/update for the logged-in user.

use crate::api::decode;
use crate::client::ApiContext;
use crate::error::ClientError;
use crate::models::{UserIdentity, UserProfile};

pub fn get_profile(ctx: &ApiContext) -> Result<UserProfile, ClientError> {
    decode(ctx.request().get("get_profile/")?)
}

/// Update name/email/phone; the backend echoes the stored profile back.
pub fn update_profile(ctx: &ApiContext, profile: &UserProfile) -> Result<UserProfile, ClientError> {
    decode(ctx.request().put("update_profile/", profile)?)
}

/// Identity of the logged-in user, as the navbar shows it.
pub fn user_info(ctx: &ApiContext) -> Result<UserIdentity, ClientError> {
    decode(ctx.request().get("user-info/")?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{MockTransport, Transport};
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

    #[test]
    fn profile_round_trip() {
        let (ctx, transport, _dir) = test_ctx();
        transport.push_json(
            200,
            json!({"name": "Grace Kim", "email": "grace@example.com", "phone": "0711"}),
        );

        let profile = get_profile(&ctx).unwrap();
        assert_eq!(profile.name, "Grace Kim");
        assert_eq!(profile.phone.as_deref(), Some("0711"));
    }

    #[test]
    fn update_sends_put_to_backend_path() {
        let (ctx, transport, _dir) = test_ctx();
        transport.push_json(
            200,
            json!({"name": "Grace A. Kim", "email": "grace@example.com", "phone": null}),
        );

        let updated = update_profile(
            &ctx,
            &UserProfile {
                name: "Grace A. Kim".into(),
                email: "grace@example.com".into(),
                phone: None,
            },
        )
        .unwrap();

        assert_eq!(updated.name, "Grace A. Kim");
        let sent = transport.requests();
        assert_eq!(sent[0].url, "http://backend.test/api/update_profile/");
        assert_eq!(sent[0].method.as_str(), "PUT");
    }
}
