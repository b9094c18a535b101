use crate::errors::AppError;
use crate::models::{PersonaScores, QuestionResponses};
use std::time::Duration;

/// Client for the remote persona scoring service.
///
/// The scoring computation itself is opaque to this service: we submit the
/// five enumerations and receive the five scores. One request per
/// submission, no retries, at-most-once semantics.
#[derive(Clone)]
pub struct ScoringClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl ScoringClient {
    /// Creates a new `ScoringClient`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the scoring service.
    /// * `token` - The API token for authentication.
    pub fn new(base_url: String, token: String) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                AppError::ExternalApiError(format!("Failed to create scoring client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    /// Submits the question responses and returns the persona scores.
    ///
    /// # Arguments
    ///
    /// * `responses` - The five categorical enumerations to score.
    ///
    /// # Returns
    ///
    /// * `Result<PersonaScores, AppError>` - The five persona scores.
    pub async fn calculate_persona_scores(
        &self,
        responses: &QuestionResponses,
    ) -> Result<PersonaScores, AppError> {
        let url = format!("{}/api/v1/scores/calculate", self.base_url);
        tracing::info!("Submitting question responses to scoring service: {}", url);

        // Transport failures convert straight into ExternalApiError.
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .json(responses)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::ExternalApiError(format!(
                "Scoring service returned {}: {}",
                status, error_text
            )));
        }

        let scores: PersonaScores = response.json().await.map_err(|e| {
            AppError::ExternalApiError(format!("Failed to parse scoring response: {}", e))
        })?;

        tracing::info!("✓ Persona scores received");
        Ok(scores)
    }

    /// Diagnostic no-op call against the scoring service.
    ///
    /// Exercises the wire path without submitting real responses; any
    /// non-success status is surfaced like a scoring failure.
    pub async fn test_calculate_scores(&self) -> Result<(), AppError> {
        let url = format!("{}/api/v1/scores/test", self.base_url);
        tracing::info!("Running scoring service diagnostic: {}", url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::ExternalApiError(format!(
                "Scoring diagnostic returned {}: {}",
                status, error_text
            )));
        }

        tracing::info!("✓ Scoring service diagnostic passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ScoringClient::new("https://example.com".to_string(), "token".to_string());
        assert!(client.is_ok());
    }
}
