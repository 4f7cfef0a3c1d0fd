//! Lab test entry and retrieval.

use crate::api::decode;
use crate::client::ApiContext;
use crate::error::ClientError;
use crate::models::{SubmitOutcome, TestResult, TestResultDetail, TestResultForm};

/// Submit a lab entry. The backend stores the result, generates
/// predictions from it, and returns both in one response.
pub fn submit(
    ctx: &ApiContext,
    patient_id: i64,
    form: &TestResultForm,
) -> Result<SubmitOutcome, ClientError> {
    decode(
        ctx.request()
            .post(&format!("patient/{patient_id}/submit-test-results/"), form)?,
    )
}

pub fn list_for_patient(ctx: &ApiContext, patient_id: i64) -> Result<Vec<TestResult>, ClientError> {
    decode(
        ctx.request()
            .get(&format!("patient/{patient_id}/test-results/"))?,
    )
}

pub fn detail(
    ctx: &ApiContext,
    patient_id: i64,
    test_id: i64,
) -> Result<TestResultDetail, ClientError> {
    decode(
        ctx.request()
            .get(&format!("patient/{patient_id}/test-results/{test_id}/"))?,
    )
}
