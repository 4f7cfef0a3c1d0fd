use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::{ChestPainType, RestingEcg, YesNo};
use super::prediction::Prediction;

/// Lab test entry form. Submitted to
/// `patient/{id}/submit-test-results/`; the backend reads camelCase keys.
#[derive(Debug, Clone, Serialize)]
pub struct TestResultForm {
    pub glucose: f64,
    #[serde(rename = "bloodPressure")]
    pub blood_pressure: f64,
    #[serde(rename = "skinThickness")]
    pub skin_thickness: f64,
    pub insulin: f64,
    pub bmi: f64,
    pub cholesterol: f64,
    #[serde(rename = "fastingBS")]
    pub fasting_bs: YesNo,
    #[serde(rename = "restingECG")]
    pub resting_ecg: RestingEcg,
    #[serde(rename = "maxHR")]
    pub max_hr: i32,
    #[serde(rename = "exerciseAngina")]
    pub exercise_angina: YesNo,
    #[serde(rename = "chestPainType")]
    pub chest_pain_type: ChestPainType,
}

/// A stored test result (`patient/{id}/test-results/`), snake_case.
#[derive(Debug, Clone, Deserialize)]
pub struct TestResult {
    pub id: i64,
    pub date: NaiveDate,
    pub glucose: f64,
    pub blood_pressure: f64,
    pub skin_thickness: f64,
    pub insulin: f64,
    pub bmi: f64,
    pub cholesterol: f64,
    pub fasting_bs: YesNo,
    pub resting_ecg: RestingEcg,
    pub max_hr: i32,
    pub exercise_angina: YesNo,
    pub chest_pain_type: ChestPainType,
}

/// Detail view of one result; adds the capture time and a link to the
/// prediction generated from it, when one exists.
#[derive(Debug, Clone, Deserialize)]
pub struct TestResultDetail {
    pub id: i64,
    pub date: NaiveDate,
    pub time: String,
    pub glucose: f64,
    pub blood_pressure: f64,
    pub skin_thickness: f64,
    pub insulin: f64,
    pub bmi: f64,
    pub cholesterol: f64,
    pub fasting_bs: YesNo,
    pub resting_ecg: RestingEcg,
    pub max_hr: i32,
    pub exercise_angina: YesNo,
    pub chest_pain_type: ChestPainType,
    #[serde(default)]
    pub prediction_id: Option<i64>,
}

/// Response of a successful submission: the new result id plus the
/// predictions the backend generated from it in the same transaction.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitOutcome {
    pub message: String,
    #[serde(rename = "testResultId")]
    pub test_result_id: i64,
    pub predictions: Vec<Prediction>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_serializes_backend_field_names() {
        let form = TestResultForm {
            glucose: 148.0,
            blood_pressure: 72.0,
            skin_thickness: 35.0,
            insulin: 94.0,
            bmi: 33.6,
            cholesterol: 210.0,
            fasting_bs: YesNo::Yes,
            resting_ecg: RestingEcg::Normal,
            max_hr: 168,
            exercise_angina: YesNo::No,
            chest_pain_type: ChestPainType::AtypicalAngina,
        };
        let value = serde_json::to_value(&form).unwrap();
        assert_eq!(value["bloodPressure"], 72.0);
        assert_eq!(value["fastingBS"], "Y");
        assert_eq!(value["restingECG"], "Normal");
        assert_eq!(value["maxHR"], 168);
        assert_eq!(value["chestPainType"], "ATA");
    }

    #[test]
    fn stored_result_parses_snake_case_row() {
        let body = r#"{
            "id": 4,
            "date": "2025-01-20",
            "glucose": 120.0,
            "blood_pressure": 80.0,
            "skin_thickness": 20.0,
            "insulin": 85.0,
            "bmi": 27.1,
            "cholesterol": 180.0,
            "fasting_bs": "N",
            "resting_ecg": "ST",
            "max_hr": 150,
            "exercise_angina": "N",
            "chest_pain_type": "NAP"
        }"#;
        let parsed: TestResult = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.resting_ecg, RestingEcg::StAbnormality);
        assert_eq!(parsed.chest_pain_type, ChestPainType::NonAnginalPain);
    }
}
