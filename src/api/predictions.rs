//! Disease-risk predictions.

use serde::Deserialize;

use crate::api::decode;
use crate::client::ApiContext;
use crate::error::ClientError;
use crate::models::{Prediction, PredictionStatus};

#[derive(Debug, Clone, Deserialize)]
struct GeneratedPredictions {
    predictions: Vec<Prediction>,
}

pub fn list(ctx: &ApiContext) -> Result<Vec<Prediction>, ClientError> {
    decode(ctx.request().get("predictions/")?)
}

pub fn get(ctx: &ApiContext, prediction_id: i64) -> Result<Prediction, ClientError> {
    decode(ctx.request().get(&format!("predictions/{prediction_id}/"))?)
}

/// All predictions derived from one test result.
pub fn for_test_result(
    ctx: &ApiContext,
    test_result_id: i64,
) -> Result<Vec<Prediction>, ClientError> {
    decode(
        ctx.request()
            .get(&format!("test-results/{test_result_id}/predictions/"))?,
    )
}

/// Ask the backend to run its models over a stored test result.
pub fn generate_for_test_result(
    ctx: &ApiContext,
    test_result_id: i64,
) -> Result<Vec<Prediction>, ClientError> {
    let value = ctx
        .request()
        .post_empty(&format!("test-results/{test_result_id}/predict/"))?;
    let generated: GeneratedPredictions = decode(value)?;
    Ok(generated.predictions)
}

/// Doctor's verdict on a prediction (confirmed / incorrect).
pub fn update_status(
    ctx: &ApiContext,
    prediction_id: i64,
    status: PredictionStatus,
) -> Result<Prediction, ClientError> {
    decode(ctx.request().put(
        &format!("predictions/{prediction_id}/"),
        &serde_json::json!({ "status": status }),
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{MockTransport, Transport};
    use crate::notify::ToastBus;
    use crate::route::Navigator;
    use crate::session::SessionStore;
    use serde_json::json;
    use std::sync::Arc;

    fn test_ctx() -> (ApiContext, Arc<MockTransport>, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let transport = Arc::new(MockTransport::new());
        let ctx = ApiContext::with_parts(
            "http://backend.test/api/",
            Arc::new(SessionStore::with_path(dir.path().join("session.json"))),
            Arc::new(ToastBus::new()),
            Arc::new(Navigator::new()),
            transport.clone() as Arc<dyn Transport>,
        );
        (ctx, transport, dir)
    }

    fn prediction_row(id: i64, condition: &str, confidence: f64) -> serde_json::Value {
        json!({
            "id": id, "condition": condition, "confidence": confidence,
            "created_at": "2025-02-01T10:00:00Z", "status": "pending",
            "patient_name": "Amina Yusuf"
        })
    }

    #[test]
    fn generate_unwraps_predictions_envelope() {
        let (ctx, transport, _dir) = test_ctx();
        transport.push_json(
            201,
            json!({"predictions": [prediction_row(9, "Diabetes", 87.5)]}),
        );

        let predictions = generate_for_test_result(&ctx, 40).unwrap();

        assert_eq!(predictions.len(), 1);
        let sent = transport.requests();
        assert_eq!(
            sent[0].url,
            "http://backend.test/api/test-results/40/predict/"
        );
    }

    #[test]
    fn update_status_sends_wire_token() {
        let (ctx, transport, _dir) = test_ctx();
        transport.push_json(200, {
            let mut row = prediction_row(9, "Diabetes", 87.5);
            row["status"] = json!("confirmed");
            row
        });

        let updated = update_status(&ctx, 9, PredictionStatus::Confirmed).unwrap();

        assert_eq!(updated.status, PredictionStatus::Confirmed);
        let sent = transport.requests();
        assert_eq!(sent[0].body.as_ref().unwrap()["status"], "confirmed");
    }

    #[test]
    fn for_test_result_decodes_list() {
        let (ctx, transport, _dir) = test_ctx();
        transport.push_json(
            200,
            json!([
                prediction_row(9, "Diabetes", 87.5),
                prediction_row(10, "Heart Disease", 62.0)
            ]),
        );

        let predictions = for_test_result(&ctx, 40).unwrap();
        assert_eq!(predictions.len(), 2);
    }
}
