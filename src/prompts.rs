pub const SOLVER_SYSTEM: &str = include_str!("../data/prompts/solver_system.txt");
pub const SOLVER_USER: &str = include_str!("../data/prompts/solver_user.txt");

/// Replace `{{key}}` placeholders in a template string.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        result = result.replace(&format!("{{{{{}}}}}", key), value);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_language() {
        assert_eq!(
            render("solve it in {{language}}", &[("language", "Go")]),
            "solve it in Go"
        );
    }

    #[test]
    fn test_prompts_are_non_empty() {
        assert!(!SOLVER_SYSTEM.is_empty());
        assert!(!SOLVER_USER.is_empty());
    }

    #[test]
    fn test_system_prompt_has_language_placeholder() {
        assert!(SOLVER_SYSTEM.contains("{{language}}"));
    }

    #[test]
    fn test_user_prompt_enumerates_four_facets() {
        for marker in ["1)", "2)", "3)", "4)"] {
            assert!(SOLVER_USER.contains(marker));
        }
        assert!(SOLVER_USER.contains("time complexity"));
        assert!(SOLVER_USER.contains("space complexity"));
    }
}
