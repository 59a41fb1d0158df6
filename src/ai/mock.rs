use super::SolutionService;
use crate::ai::gemini::types::Content;
use crate::solution::SolutionPayload;
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// What the mock hands back on each call.
#[derive(Debug, Clone)]
enum MockOutcome {
    Solution(SolutionPayload),
    SchemaViolation,
    UpstreamFailure,
}

/// Canned [`SolutionService`] for pipeline tests and offline harnesses.
///
/// Queued responses are served in order and cycle once exhausted; with no
/// queue a default solution is returned.
pub struct MockSolverClient {
    outcomes: Arc<Mutex<Vec<MockOutcome>>>,
    call_count: Arc<Mutex<usize>>,
    seen_messages: Arc<Mutex<Vec<Content>>>,
}

impl MockSolverClient {
    pub fn new() -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
            seen_messages: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_solution(self, payload: SolutionPayload) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push(MockOutcome::Solution(payload));
        self
    }

    pub fn with_schema_violation(self) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push(MockOutcome::SchemaViolation);
        self
    }

    pub fn with_upstream_failure(self) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push(MockOutcome::UpstreamFailure);
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Messages received so far, in call order.
    pub fn seen_messages(&self) -> Vec<Content> {
        self.seen_messages.lock().unwrap().clone()
    }
}

impl Default for MockSolverClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SolutionService for MockSolverClient {
    async fn generate_solution(
        &self,
        _api_key: &str,
        message: &Content,
    ) -> Result<SolutionPayload> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;
        self.seen_messages.lock().unwrap().push(message.clone());

        let outcomes = self.outcomes.lock().unwrap();
        if outcomes.is_empty() {
            return Ok(SolutionPayload {
                approach: "We scan the input once and track what we need as we go".to_string(),
                code: "def solve(xs):\n    return max(xs)".to_string(),
                time_complexity: "O(n): one pass over the input".to_string(),
                space_complexity: "O(1): a few variables".to_string(),
            });
        }

        let index = (*count - 1) % outcomes.len();
        match &outcomes[index] {
            MockOutcome::Solution(payload) => Ok(payload.clone()),
            MockOutcome::SchemaViolation => Err(Error::SchemaViolation(
                "mock: field 'spaceComplexity' missing".to_string(),
            )),
            MockOutcome::UpstreamFailure => {
                Err(Error::Upstream("mock: provider unavailable".to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::gemini::types::Part;

    fn message(text: &str) -> Content {
        Content {
            role: Some("user".to_string()),
            parts: vec![Part::Text {
                text: text.to_string(),
            }],
        }
    }

    #[tokio::test]
    async fn test_default_solution_has_all_fields() {
        let client = MockSolverClient::new();
        let payload = client.generate_solution("k", &message("q")).await.unwrap();
        assert!(!payload.approach.is_empty());
        assert!(!payload.code.is_empty());
        assert!(!payload.time_complexity.is_empty());
        assert!(!payload.space_complexity.is_empty());
    }

    #[tokio::test]
    async fn test_queued_outcomes_cycle() {
        let client = MockSolverClient::new()
            .with_upstream_failure()
            .with_schema_violation();

        let first = client.generate_solution("k", &message("q")).await;
        assert!(matches!(first, Err(Error::Upstream(_))));

        let second = client.generate_solution("k", &message("q")).await;
        assert!(matches!(second, Err(Error::SchemaViolation(_))));

        let third = client.generate_solution("k", &message("q")).await;
        assert!(matches!(third, Err(Error::Upstream(_))));
        assert_eq!(client.get_call_count(), 3);
    }
}
