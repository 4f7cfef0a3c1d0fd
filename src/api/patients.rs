//! Patient roster and per-patient detail.

use serde::Serialize;

use crate::api::{decode, Acknowledgment};
use crate::client::ApiContext;
use crate::error::ClientError;
use crate::models::{PatientDetails, PatientSummary};

/// Additional profile details captured after registration.
#[derive(Debug, Clone, Serialize)]
pub struct NewPatientProfile {
    pub age: i32,
    pub emergency_contact: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_history: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

pub fn list(ctx: &ApiContext) -> Result<Vec<PatientSummary>, ClientError> {
    decode(ctx.request().get("patients/")?)
}

pub fn details(ctx: &ApiContext, patient_id: i64) -> Result<PatientDetails, ClientError> {
    decode(ctx.request().get(&format!("patient/{patient_id}/"))?)
}

pub fn create_patient_profile(
    ctx: &ApiContext,
    profile: &NewPatientProfile,
) -> Result<Acknowledgment, ClientError> {
    decode(ctx.request().post("create-patient-profile/", profile)?)
}

pub fn assign_doctor(ctx: &ApiContext, patient_id: i64) -> Result<Acknowledgment, ClientError> {
    decode(
        ctx.request()
            .post_empty(&format!("patient/{patient_id}/assign-doctor/"))?,
    )
}

pub fn remove_doctor(ctx: &ApiContext, patient_id: i64) -> Result<Acknowledgment, ClientError> {
    decode(
        ctx.request()
            .post_empty(&format!("patient/{patient_id}/remove-doctor/"))?,
    )
}
