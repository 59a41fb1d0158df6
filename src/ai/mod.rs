//! AI service integration for schema-constrained solution generation.
//!
//! The [`SolutionService`] trait is the seam between the pipeline and the
//! provider; the Gemini client is the only real implementation, with a mock
//! for tests and host harnesses.

pub mod gemini;
pub mod mime;
pub mod mock;

pub use gemini::GeminiSolverClient;
pub use mock::MockSolverClient;

use crate::ai::gemini::types::Content;
use crate::solution::SolutionPayload;
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait SolutionService: Send + Sync {
    /// Submit the assembled message and return a payload satisfying the
    /// solution schema. The API key comes from the configuration snapshot
    /// captured by the calling pipeline.
    async fn generate_solution(&self, api_key: &str, message: &Content)
        -> Result<SolutionPayload>;
}
