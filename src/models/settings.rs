use serde::{Deserialize, Serialize};

use super::enums::Theme;

/// Per-user preferences (`settings/`). PATCHed partially: serialize only
/// the fields being changed by building the body with
/// [`UserSettingsPatch`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub room_updates: bool,
    pub system_updates: bool,
    pub theme: Theme,
    pub compact_mode: bool,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub department: String,
}

/// Partial settings update; unset fields are left untouched server-side.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserSettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_notifications: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub push_notifications: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_updates: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_updates: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compact_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}
