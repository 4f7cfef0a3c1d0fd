use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

/// One row of the patients list (`patients/`).
#[derive(Debug, Clone, Deserialize)]
pub struct PatientSummary {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// Backend formats this as a bare date.
    pub created_at: NaiveDate,
    pub status: String,
}

/// Doctor entry nested in patient details.
#[derive(Debug, Clone, Deserialize)]
pub struct AssignedDoctor {
    pub id: i64,
    pub name: String,
    pub specialization: String,
}

/// Full detail view of one patient (`patient/{id}/`).
#[derive(Debug, Clone, Deserialize)]
pub struct PatientDetails {
    pub name: String,
    pub age: i32,
    pub emergency_contact: String,
    #[serde(default)]
    pub medical_history: Option<String>,
    pub created_at: DateTime<Utc>,
    pub doctors: Vec<AssignedDoctor>,
}
