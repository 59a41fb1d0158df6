//! Multimodal request assembly.
//!
//! Pure construction: given the target language and the encoded screenshots,
//! produce the single user-role message the generator submits. The framing
//! text is fixed; only the language is substituted.

use crate::ai::gemini::types::{Content, InlineData, Part};
use crate::prompts;
use crate::screenshots::EncodedImage;

/// Assemble the solver message: system framing, task framing, then every
/// screenshot in submission order.
pub fn build_solver_message(language: &str, images: &[EncodedImage]) -> Content {
    let mut parts = Vec::with_capacity(images.len() + 2);
    parts.push(Part::Text {
        text: prompts::render(prompts::SOLVER_SYSTEM, &[("language", language)]),
    });
    parts.push(Part::Text {
        text: prompts::SOLVER_USER.to_string(),
    });
    parts.extend(images.iter().map(|image| Part::InlineData {
        inline_data: InlineData {
            mime_type: image.mime_type.to_string(),
            data: image.data.clone(),
        },
    }));

    Content {
        role: Some("user".to_string()),
        parts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(data: &str) -> EncodedImage {
        EncodedImage {
            mime_type: "image/png",
            data: data.to_string(),
        }
    }

    #[test]
    fn test_message_layout_is_text_text_then_images() {
        let message = build_solver_message("Go", &[image("AA=="), image("BB==")]);

        assert_eq!(message.role.as_deref(), Some("user"));
        assert_eq!(message.parts.len(), 4);
        assert!(matches!(&message.parts[0], Part::Text { text } if text.contains("Go")));
        assert!(matches!(&message.parts[1], Part::Text { text } if text.contains("1)")));
        assert!(
            matches!(&message.parts[2], Part::InlineData { inline_data } if inline_data.data == "AA==")
        );
        assert!(
            matches!(&message.parts[3], Part::InlineData { inline_data } if inline_data.data == "BB==")
        );
    }

    #[test]
    fn test_message_is_deterministic() {
        let images = [image("AA==")];
        let a = serde_json::to_string(&build_solver_message("Rust", &images)).unwrap();
        let b = serde_json::to_string(&build_solver_message("Rust", &images)).unwrap();
        assert_eq!(a, b);
    }
}
