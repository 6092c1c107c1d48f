use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use shared::{
    domain::Classification,
    protocol::{PredictRequest, PredictResponse},
};
use thiserror::Error;
use url::Url;

/// Failure between issuing the prediction request and obtaining a usable
/// label. Variants exist for logging; callers treat them uniformly and must
/// not surface the detail to end users.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("invalid prediction endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("prediction service returned status {0}")]
    Status(StatusCode),
    #[error("unexpected response body: {0}")]
    MalformedResponse(String),
    #[error("unexpected prediction label {0}")]
    UnknownLabel(i64),
}

/// Seam for the remote predictor so the frontend and tests can substitute the
/// HTTP client.
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, payload: &PredictRequest) -> Result<Classification, ClassifyError>;
}

/// HTTP client for the prediction service.
///
/// One request per call, no retry, no caching; timeouts are whatever the
/// underlying transport defaults to. The base URL is injected at
/// construction, never hardcoded.
pub struct PredictorClient {
    http: Client,
    base_url: Url,
}

impl PredictorClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            http: Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl Classifier for PredictorClient {
    async fn classify(&self, payload: &PredictRequest) -> Result<Classification, ClassifyError> {
        let endpoint = self.base_url.join("predict/")?;
        tracing::debug!(%endpoint, "dispatching prediction request");

        let response = self.http.post(endpoint).json(payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "prediction service rejected request");
            return Err(ClassifyError::Status(status));
        }

        let body: PredictResponse = response
            .json()
            .await
            .map_err(|err| ClassifyError::MalformedResponse(err.to_string()))?;

        Classification::from_label(body.prediction).ok_or_else(|| {
            tracing::warn!(label = body.prediction, "prediction label out of range");
            ClassifyError::UnknownLabel(body.prediction)
        })
    }
}

#[cfg(test)]
#[path = "tests/predictor_tests.rs"]
mod tests;
