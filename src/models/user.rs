use serde::{Deserialize, Serialize};

use super::enums::{Gender, UserRole};

/// Who is logged in, as reported by the `user-info/` endpoint and held in
/// the persisted session alongside the bearer token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

/// Login request body.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// JWT pair issued on login. `access` becomes the session bearer token.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

/// Registration body. The backend reads these keys in camelCase.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "userRole", skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    pub gender: Gender,
    #[serde(rename = "dateOfBirth")]
    pub date_of_birth: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    /// Id of the newly created user.
    pub user: i64,
}

/// Profile as returned by `get_profile/` and echoed back by `update_profile/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// A user row in the admin user-management table.
#[derive(Debug, Clone, Deserialize)]
pub struct ManagedUser {
    pub id: i64,
    pub email: String,
    /// Display name; doctors arrive prefixed with "Dr. ".
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub user_role: UserRole,
}
