//! Treatment plans synthesized from predictions.

use crate::api::decode;
use crate::client::ApiContext;
use crate::error::ClientError;
use crate::models::TreatmentPlan;

pub fn list_plans(ctx: &ApiContext) -> Result<Vec<TreatmentPlan>, ClientError> {
    decode(ctx.request().get("treatment-plans/")?)
}

pub fn get_plan(ctx: &ApiContext, plan_id: i64) -> Result<TreatmentPlan, ClientError> {
    decode(ctx.request().get(&format!("treatment-plans/{plan_id}/"))?)
}

/// The plan attached to a prediction, if the backend has synthesized one.
pub fn for_prediction(ctx: &ApiContext, prediction_id: i64) -> Result<TreatmentPlan, ClientError> {
    decode(
        ctx.request()
            .get(&format!("predictions/{prediction_id}/treatment-plan/"))?,
    )
}

/// Ask the backend to synthesize a plan for a prediction.
pub fn create_for_prediction(
    ctx: &ApiContext,
    prediction_id: i64,
) -> Result<TreatmentPlan, ClientError> {
    decode(
        ctx.request()
            .post_empty(&format!("predictions/{prediction_id}/treatment-plan/"))?,
    )
}

/// Update doctor notes on an existing plan.
pub fn update_notes(
    ctx: &ApiContext,
    plan_id: i64,
    doctor_notes: &str,
) -> Result<TreatmentPlan, ClientError> {
    decode(ctx.request().put(
        &format!("treatment-plans/{plan_id}/"),
        &serde_json::json!({ "doctor_notes": doctor_notes }),
    )?)
}
