use std::sync::Arc;

use crate::api;
use crate::client::ApiContext;
use crate::models::{Prediction, TreatmentPlan};
use crate::route::{PredictionSource, Route};

/// Predictions list + detail. The detail view's data source depends on
/// who opened it; that context arrives typed in the route instead of
/// through a mutable page flag.
pub struct PredictionsController {
    ctx: Arc<ApiContext>,
    pub predictions: Vec<Prediction>,
    pub detail: Option<Prediction>,
    pub treatment_plan: Option<TreatmentPlan>,
    pub loading: bool,
}

impl PredictionsController {
    pub fn new(ctx: Arc<ApiContext>) -> Self {
        Self {
            ctx,
            predictions: Vec::new(),
            detail: None,
            treatment_plan: None,
            loading: false,
        }
    }

    pub fn load_list(&mut self) {
        self.loading = true;
        match api::predictions::list(&self.ctx) {
            Ok(predictions) => self.predictions = predictions,
            Err(e) => tracing::debug!(error = %e, "predictions list load failed"),
        }
        self.loading = false;
    }

    /// Navigate to the detail view, carrying the caller context in the
    /// route itself.
    pub fn open_detail(&self, id: i64, source: PredictionSource) {
        self.ctx
            .navigator()
            .navigate(Route::PredictionDetail { id, source });
    }

    /// Load the detail for the current route. From the list the id names
    /// one prediction; from a test result it names the result whose
    /// highest-confidence prediction is shown.
    pub fn load_detail(&mut self, id: i64, source: PredictionSource) {
        self.loading = true;
        let loaded = match source {
            PredictionSource::List => api::predictions::get(&self.ctx, id).ok(),
            PredictionSource::TestResult => api::predictions::for_test_result(&self.ctx, id)
                .ok()
                .and_then(Prediction::highest_confidence),
        };
        self.detail = loaded;
        self.load_treatment_plan();
        self.loading = false;
    }

    /// A missing plan is normal (not yet synthesized): logged, no toast.
    fn load_treatment_plan(&mut self) {
        self.treatment_plan = None;
        if let Some(prediction) = &self.detail {
            match api::treatment::for_prediction(&self.ctx, prediction.id) {
                Ok(plan) => self.treatment_plan = Some(plan),
                Err(e) => tracing::debug!(error = %e, "no treatment plan for prediction"),
            }
        }
    }
}
