use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{RoomStatus, RoomType};

/// Hospital room record. Occupy/unoccupy transitions are backend business
/// rules; the client only reads `status` and issues the action calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    #[serde(default, skip_serializing)]
    pub id: i64,
    pub name: String,
    pub room_type: RoomType,
    #[serde(default)]
    pub description: String,
    pub floor: i32,
    pub capacity: i32,
    #[serde(default)]
    pub equipment: String,
    pub status: RoomStatus,
    #[serde(default, skip_serializing)]
    pub current_occupant: Option<i64>,
    #[serde(default, skip_serializing)]
    pub patient: Option<i64>,
    #[serde(default, skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Room {
    pub fn is_available(&self) -> bool {
        self.status == RoomStatus::Available
    }
}
