use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::{UiConfig, DEFAULT_ENDPOINT};
use crate::errors::{SymptomError, SymptomResult};
use crate::types::{DiagnosisResult, SymptomQuery};

/// Anything that can turn a symptom query into a diagnosis
#[async_trait]
pub trait DiagnosisSource: Send + Sync {
    async fn check_symptoms(&self, query: &SymptomQuery) -> SymptomResult<DiagnosisResult>;
}

/// Client for the check-symptoms classification endpoint
#[derive(Debug, Clone)]
pub struct SymptomClient {
    client: Client,
    endpoint: String,
}

impl Default for SymptomClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl SymptomClient {
    /// Create a client posting to the given endpoint URL
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &UiConfig) -> Self {
        Self::new(config.endpoint.clone())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl DiagnosisSource for SymptomClient {
    /// POSTs `{"symptoms": ...}` once. Non-2xx, transport and decode
    /// failures all come back as errors; nothing is retried.
    #[instrument(skip(self, query))]
    async fn check_symptoms(&self, query: &SymptomQuery) -> SymptomResult<DiagnosisResult> {
        debug!(endpoint = %self.endpoint, symptoms = query.symptoms(), "Sending symptom query");

        let response = self
            .client
            .post(&self.endpoint)
            .json(query)
            .send()
            .await
            .map_err(|e| SymptomError::RequestError(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.map_err(|e| {
                SymptomError::ResponseError(format!("Failed to read error response: {}", e))
            })?;

            return Err(SymptomError::HttpError {
                status_code: status.as_u16(),
                message: format!("Symptom check failed: {}", error_body),
            });
        }

        let result = response
            .json::<DiagnosisResult>()
            .await
            .map_err(|e| SymptomError::ParsingError(format!("Failed to parse response: {}", e)))?;

        debug!(diagnosis = %result.diagnosis, confidence = result.confidence, "Received diagnosis");
        Ok(result)
    }
}
