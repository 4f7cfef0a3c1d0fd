use serde::{Deserialize, Serialize};

/// Allocatable hospital resource (equipment, supplies).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    #[serde(default, skip_serializing)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub quantity: i32,
    pub available: bool,
}
