//! Admin dashboards: system stats, user management, resources, model ops.

use serde::Serialize;

use crate::api::{decode, Acknowledgment};
use crate::client::ApiContext;
use crate::error::ClientError;
use crate::models::{ManagedUser, Resource, SystemStats, UserRole};

/// New user record as the admin console creates it.
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub user_role: UserRole,
}

pub fn system_stats(ctx: &ApiContext) -> Result<SystemStats, ClientError> {
    decode(ctx.request().get("admin/stats/")?)
}

/// User roster, optionally filtered server-side.
pub fn list_users(
    ctx: &ApiContext,
    search: Option<&str>,
    role: Option<UserRole>,
) -> Result<Vec<ManagedUser>, ClientError> {
    let mut path = String::from("admin/users/");
    let mut query = Vec::new();
    if let Some(search) = search {
        query.push(format!("search={search}"));
    }
    if let Some(role) = role {
        query.push(format!("role={}", role.as_str()));
    }
    if !query.is_empty() {
        path = format!("{path}?{}", query.join("&"));
    }
    decode(ctx.request().get(&path)?)
}

pub fn create_user(ctx: &ApiContext, user: &NewUser) -> Result<ManagedUser, ClientError> {
    decode(ctx.request().post("admin/users/", user)?)
}

pub fn resources(ctx: &ApiContext) -> Result<Vec<Resource>, ClientError> {
    decode(ctx.request().get("admin/resources/")?)
}

pub fn add_resource(ctx: &ApiContext, resource: &Resource) -> Result<Resource, ClientError> {
    decode(ctx.request().post("admin/resources/", resource)?)
}

/// Kick off a model retraining run; completion is asynchronous
/// server-side and lands as a notification.
pub fn retrain_model(ctx: &ApiContext) -> Result<Acknowledgment, ClientError> {
    decode(ctx.request().post_empty("admin/model/retrain/")?)
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
    fn stats_decode_nested_sections() {
        let (ctx, transport, _dir) = test_ctx();
        transport.push_json(
            200,
            json!({
                "users": {"total": 40, "doctors": 9, "patients": 30},
                "resources": {"total": 15, "available": 11},
                "model_performance": {"accuracy": 88.4, "total_predictions": 260}
            }),
        );

        let stats = system_stats(&ctx).unwrap();
        assert_eq!(stats.users.total, 40);
    }

    #[test]
    fn user_filters_become_query_params() {
        let (ctx, transport, _dir) = test_ctx();
        transport.push_json(200, json!([]));

        list_users(&ctx, Some("grace"), Some(UserRole::HealthProfessional)).unwrap();

        let sent = transport.requests();
        assert_eq!(
            sent[0].url,
            "http://backend.test/api/admin/users/?search=grace&role=Health Professional"
        );
    }

    #[test]
    fn unfiltered_listing_has_no_query_string() {
        let (ctx, transport, _dir) = test_ctx();
        transport.push_json(200, json!([]));

        list_users(&ctx, None, None).unwrap();

        let sent = transport.requests();
        assert_eq!(sent[0].url, "http://backend.test/api/admin/users/");
    }

    #[test]
    fn create_user_round_trips_role_token() {
        let (ctx, transport, _dir) = test_ctx();
        transport.push_json(
            201,
            json!({
                "id": 41, "email": "new@example.com", "name": "New User",
                "phone": null, "user_role": "admin"
            }),
        );

        let created = create_user(
            &ctx,
            &NewUser {
                email: "new@example.com".into(),
                phone: None,
                user_role: UserRole::Admin,
            },
        )
        .unwrap();

        assert_eq!(created.id, 41);
        let sent = transport.requests();
        assert_eq!(sent[0].body.as_ref().unwrap()["user_role"], "admin");
    }

    #[test]
    fn retrain_returns_ack_message() {
        let (ctx, transport, _dir) = test_ctx();
        transport.push_json(
            200,
            json!({"message": "Model retraining initiated successfully", "status": "pending"}),
        );

        let ack = retrain_model(&ctx).unwrap();
        assert!(ack.message.contains("retraining"));
    }
}
