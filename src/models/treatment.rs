use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Treatment plan synthesized by the backend for one prediction.
/// The serializer exposes the model verbatim, so related records arrive
/// as foreign-key ids.
#[derive(Debug, Clone, Deserialize)]
pub struct TreatmentPlan {
    pub id: i64,
    pub prediction: i64,
    pub patient: i64,
    #[serde(default)]
    pub doctor: Option<i64>,
    pub primary_recommendation: String,
    #[serde(default)]
    pub detailed_plan: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub doctor_notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
