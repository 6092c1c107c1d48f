use serde::{Deserialize, Serialize};

/// Validated request body for the prediction endpoint.
///
/// Field names are part of the wire contract and must match
/// [`crate::domain::BiomarkerField::wire_name`] verbatim. All values are
/// non-negative and finite; the validator is the only producer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictRequest {
    pub serum_creatinine: f64,
    pub hemoglobin: f64,
    pub triglyceride: f64,
    pub tot_chole: f64,
}

/// Successful response body from the prediction endpoint.
///
/// Only the `prediction` field is interpreted; a label outside {0, 1} is a
/// decode failure at the predictor-client boundary, never passed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub prediction: i64,
}
