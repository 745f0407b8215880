//! Identifier conversion helpers
//!
//! Name conversions shared by the parser and the emitter: case conversion,
//! Rust keyword escaping, and the suffix strippers that recover a service or
//! action name from one of its derived message names.

use heck::{ToSnakeCase, ToUpperCamelCase};
use regex::Regex;
use std::sync::LazyLock;

static SRV_MSG_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_(?:Request|Response)$").unwrap());

static ACTION_MSG_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"_(?:Goal|Result|Feedback|SendGoal_Request|SendGoal_Response|GetResult_Request|GetResult_Response|FeedbackMessage)$",
    )
    .unwrap()
});

static ACTION_SRV_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_(?:SendGoal|GetResult)$").unwrap());

/// Upper-case the first character of a string.
#[must_use]
pub fn upper_case_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert an identifier to the `UpperCamelCase` form used for type names.
#[must_use]
pub fn type_name(s: &str) -> String {
    s.to_upper_camel_case()
}

/// Convert an identifier to the `snake_case` form used for module names.
#[must_use]
pub fn module_name(s: &str) -> String {
    s.to_snake_case()
}

/// Sanitize an identifier for use in emitted code.
///
/// Rust keywords are escaped with an `r#` prefix, invalid characters become
/// underscores, and a leading digit gets an underscore prepended.
#[must_use]
pub fn sanitize_identifier(name: &str) -> String {
    if RUST_KEYWORDS.contains(&name) {
        return format!("r#{name}");
    }

    let sanitized: String = name
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    if sanitized.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        format!("_{sanitized}")
    } else {
        sanitized
    }
}

const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
    "pub", "ref", "return", "static", "struct", "super", "trait", "true", "try", "type", "unsafe",
    "use", "where", "while", "yield",
];

/// Recover a service name from one of its `_Request`/`_Response` message names.
#[must_use]
pub fn service_name_from_message_name(name: &str) -> String {
    SRV_MSG_SUFFIX.replace(name, "").into_owned()
}

/// Recover an action name from one of its derived message names.
#[must_use]
pub fn action_name_from_message_name(name: &str) -> String {
    ACTION_MSG_SUFFIX.replace(name, "").into_owned()
}

/// Recover an action name from one of its derived service names.
#[must_use]
pub fn action_name_from_service_name(name: &str) -> String {
    ACTION_SRV_SUFFIX.replace(name, "").into_owned()
}

/// Convert a native return-code symbol to an emitted type name.
///
/// `RCL_RET_` prefixes are stripped; `RMW_RET_` prefixes keep an `Rmw` marker
/// so the two code spaces do not collide. Unrecognized prefixes pass through
/// the plain case conversion.
#[must_use]
pub fn return_code_type_name(symbol: &str) -> String {
    if let Some(rest) = symbol.strip_prefix("RCL_RET_") {
        rest.to_lowercase().to_upper_camel_case()
    } else if let Some(rest) = symbol.strip_prefix("RMW_RET_") {
        format!("RMW_{rest}").to_lowercase().to_upper_camel_case()
    } else {
        symbol.to_lowercase().to_upper_camel_case()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upper_case_first() {
        assert_eq!(upper_case_first("int32"), "Int32");
        assert_eq!(upper_case_first("bool"), "Bool");
        assert_eq!(upper_case_first(""), "");
        assert_eq!(upper_case_first("Already"), "Already");
    }

    #[test]
    fn test_type_name_stable_under_repeated_application() {
        let once = type_name("goal_id");
        assert_eq!(once, "GoalId");
        assert_eq!(type_name(&once), once);

        let once = type_name("navigate_to_pose");
        assert_eq!(once, "NavigateToPose");
        assert_eq!(type_name(&once), once);
    }

    #[test]
    fn test_module_name_acronym_runs() {
        // Trailing single-capital run vs. multi-capital acronym run.
        assert_eq!(module_name("ColorRGBA"), "color_rgba");
        assert_eq!(module_name("GoalID"), "goal_id");
        assert_eq!(module_name("GoalId"), "goal_id");
        assert_eq!(module_name("HTTPServer"), "http_server");
        assert_eq!(module_name("NavigateToPose"), "navigate_to_pose");
    }

    #[test]
    fn test_sanitize_keywords() {
        assert_eq!(sanitize_identifier("type"), "r#type");
        assert_eq!(sanitize_identifier("match"), "r#match");
        assert_eq!(sanitize_identifier("r#ok_name"), "r_ok_name");
        assert_eq!(sanitize_identifier("plain"), "plain");
    }

    #[test]
    fn test_sanitize_invalid_chars_and_digits() {
        assert_eq!(sanitize_identifier("invalid-name"), "invalid_name");
        assert_eq!(sanitize_identifier("123name"), "_123name");
    }

    #[test]
    fn test_service_name_from_message_name() {
        assert_eq!(service_name_from_message_name("AddTwoInts_Request"), "AddTwoInts");
        assert_eq!(service_name_from_message_name("AddTwoInts_Response"), "AddTwoInts");
        assert_eq!(service_name_from_message_name("Empty"), "Empty");
    }

    #[test]
    fn test_action_name_from_message_name() {
        for suffix in [
            "_Goal",
            "_Result",
            "_Feedback",
            "_SendGoal_Request",
            "_SendGoal_Response",
            "_GetResult_Request",
            "_GetResult_Response",
            "_FeedbackMessage",
        ] {
            let name = format!("Fibonacci{suffix}");
            assert_eq!(action_name_from_message_name(&name), "Fibonacci");
        }
        assert_eq!(
            action_name_from_message_name("Fibonacci_SomethingElse"),
            "Fibonacci_SomethingElse"
        );
    }

    #[test]
    fn test_action_name_from_service_name() {
        assert_eq!(action_name_from_service_name("Fibonacci_SendGoal"), "Fibonacci");
        assert_eq!(action_name_from_service_name("Fibonacci_GetResult"), "Fibonacci");
        assert_eq!(
            action_name_from_service_name("Fibonacci_SendGoalX"),
            "Fibonacci_SendGoalX"
        );
    }

    #[test]
    fn test_return_code_type_name() {
        assert_eq!(return_code_type_name("RCL_RET_OK"), "Ok");
        assert_eq!(return_code_type_name("RCL_RET_INVALID_ARGUMENT"), "InvalidArgument");
        assert_eq!(return_code_type_name("RMW_RET_OK"), "RmwOk");
        assert_eq!(return_code_type_name("RMW_RET_TIMEOUT"), "RmwTimeout");
        assert_eq!(return_code_type_name("RCUTILS_RET_OK"), "RcutilsRetOk");
    }
}
