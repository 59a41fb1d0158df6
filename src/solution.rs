//! Solution types and the structural contract the provider must satisfy.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Wire-level payload parsed from the provider's structured output.
///
/// All four fields are required; a response missing any of them fails to
/// deserialize and is reported as a schema violation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionPayload {
    pub approach: String,
    pub code: String,
    pub time_complexity: String,
    pub space_complexity: String,
}

/// The validated solution handed back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedSolution {
    pub approach: String,
    pub code: String,
    pub time_complexity: String,
    pub space_complexity: String,
}

/// Maps the wire payload into the public result type.
///
/// This is the one place allowed to assume the payload and result fields
/// correspond, and where the post-call shape check lives: every field must
/// be non-empty after trimming.
impl TryFrom<SolutionPayload> for ProcessedSolution {
    type Error = Error;

    fn try_from(payload: SolutionPayload) -> Result<Self> {
        let empty_field = [
            ("approach", &payload.approach),
            ("code", &payload.code),
            ("timeComplexity", &payload.time_complexity),
            ("spaceComplexity", &payload.space_complexity),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty());

        if let Some((name, _)) = empty_field {
            return Err(Error::SchemaViolation(format!(
                "field '{}' is empty",
                name
            )));
        }

        Ok(Self {
            approach: payload.approach,
            code: payload.code,
            time_complexity: payload.time_complexity,
            space_complexity: payload.space_complexity,
        })
    }
}

/// Gemini `responseSchema` constraining generation to the four solution
/// fields. Field descriptions steer the model; `required` enforces presence.
pub fn response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "approach": {
                "type": "STRING",
                "description": "Detailed approach to solve the problem, phrased so the interviewee can speak it out loud in easy explanatory words"
            },
            "code": {
                "type": "STRING",
                "description": "The complete solution code"
            },
            "timeComplexity": {
                "type": "STRING",
                "description": "Big O analysis of time complexity with the reason"
            },
            "spaceComplexity": {
                "type": "STRING",
                "description": "Big O analysis of space complexity with the reason"
            }
        },
        "required": ["approach", "code", "timeComplexity", "spaceComplexity"]
    })
}
