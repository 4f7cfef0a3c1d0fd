//! Login, registration, and password management.

use crate::api::profile::user_info;
use crate::api::{decode, Acknowledgment};
use crate::client::ApiContext;
use crate::error::ClientError;
use crate::models::{
    ChangePasswordRequest, Credentials, LoginResponse, RegisterRequest, RegisterResponse,
    UserIdentity,
};
use crate::route::Route;

/// Authenticate and persist the session.
///
/// The issued access token is staged in the ephemeral tier first so the
/// follow-up identity fetch can carry it, then the session is persisted
/// durably in a single write. A failed identity fetch downgrades to a
/// token-only session (`Ok(None)`) rather than failing the login.
pub fn login(
    ctx: &ApiContext,
    credentials: &Credentials,
) -> Result<Option<UserIdentity>, ClientError> {
    let value = ctx.request().post("login/", credentials)?;
    let tokens: LoginResponse = decode(value)?;

    ctx.session().set_ephemeral_token(&tokens.access);
    let identity = match user_info(ctx) {
        Ok(identity) => Some(identity),
        // The guard already tore the session down; do not re-persist.
        Err(ClientError::SessionExpired) => return Err(ClientError::SessionExpired),
        Err(e) => {
            tracing::warn!(error = %e, "identity fetch after login failed");
            None
        }
    };
    ctx.session().set_session(&tokens.access, identity.clone())?;

    ctx.navigator().navigate(Route::Dashboard);
    Ok(identity)
}

/// Create a new account. Does not log in; the caller routes to login.
pub fn register(ctx: &ApiContext, request: &RegisterRequest) -> Result<RegisterResponse, ClientError> {
    decode(ctx.request().post("register/", request)?)
}

pub fn change_password(
    ctx: &ApiContext,
    request: &ChangePasswordRequest,
) -> Result<Acknowledgment, ClientError> {
    decode(ctx.request().put("change_password/", request)?)
}

/// Clear the session and return the shell to the login view. Purely
/// client-side: bearer tokens are not revocable server-side.
pub fn logout(ctx: &ApiContext) {
    ctx.session().clear_session();
    ctx.navigator().navigate(Route::Login);
}
