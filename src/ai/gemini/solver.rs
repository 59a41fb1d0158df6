use super::client::GeminiHttpClient;
use super::types::{Content, GenerateContentResponse};
use crate::ai::SolutionService;
use crate::solution::{self, SolutionPayload};
use crate::{Error, Result};
use async_trait::async_trait;
use serde::Serialize;

/// Fixed multimodal model identity for solution generation.
pub const SOLVER_MODEL: &str = "gemini-2.5-flash";

/// Fixed sampling temperature: enough variation in phrasing and approach
/// while keeping the four fields well-formed.
pub const SOLVER_TEMPERATURE: f64 = 0.7;

#[derive(Debug, Serialize)]
struct SolveRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: SolveGenerationConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveGenerationConfig {
    temperature: f64,
    response_mime_type: String,
    response_schema: serde_json::Value,
}

/// Schema-constrained generator backed by Gemini's `generateContent` with a
/// `responseSchema`. One attempt per call; no retry.
pub struct GeminiSolverClient {
    http: GeminiHttpClient,
}

impl GeminiSolverClient {
    pub fn new() -> Self {
        Self::new_with_client(reqwest::Client::new())
    }

    pub fn new_with_client(client: reqwest::Client) -> Self {
        Self {
            http: GeminiHttpClient::new(SOLVER_MODEL.to_string(), client),
        }
    }

    #[cfg(test)]
    fn with_base_url(mut self, base_url: String) -> Self {
        self.http = self.http.with_base_url(base_url);
        self
    }
}

impl Default for GeminiSolverClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SolutionService for GeminiSolverClient {
    async fn generate_solution(
        &self,
        api_key: &str,
        message: &Content,
    ) -> Result<SolutionPayload> {
        tracing::debug!(
            "Requesting solution from Gemini ({} part(s), model {})",
            message.parts.len(),
            self.http.model()
        );

        let request = SolveRequest {
            contents: vec![message.clone()],
            generation_config: SolveGenerationConfig {
                temperature: SOLVER_TEMPERATURE,
                response_mime_type: "application/json".to_string(),
                response_schema: solution::response_schema(),
            },
        };

        let response: GenerateContentResponse =
            self.http.generate_content(api_key, &request).await?;

        let text = response
            .first_text()
            .ok_or_else(|| Error::Upstream("No text in Gemini solve response".to_string()))?;

        serde_json::from_str(text).map_err(|e| {
            tracing::error!("Gemini returned off-schema solution: {}\nBody: {}", e, text);
            Error::SchemaViolation(format!("Provider output failed validation: {}", e))
        })
    }
}
