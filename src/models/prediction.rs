use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::enums::PredictionStatus;

/// AI-generated disease-risk prediction for one test result.
#[derive(Debug, Clone, Deserialize)]
pub struct Prediction {
    pub id: i64,
    /// e.g. "Diabetes", "Heart Disease", "Healthy".
    pub condition: String,
    /// Confidence percentage in [0, 100].
    pub confidence: f64,
    pub created_at: DateTime<Utc>,
    pub status: PredictionStatus,
    #[serde(default)]
    pub patient_name: Option<String>,
}

impl Prediction {
    /// Pick the prediction the detail view leads with: highest confidence
    /// wins, matching what the backend's clients have always displayed.
    pub fn highest_confidence(mut predictions: Vec<Prediction>) -> Option<Prediction> {
        predictions.sort_by(|a, b| {
            a.confidence
                .partial_cmp(&b.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        predictions.pop()
    }
}
