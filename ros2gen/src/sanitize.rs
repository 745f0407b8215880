//! Default value sanitization
//!
//! Raw default values arrive exactly as written in the definition file, with
//! either quoting style and optional escapes. These helpers normalize them
//! into valid Rust literal text for the emitter.

use regex::Regex;
use std::sync::LazyLock;

static STRIP_DOUBLE_QUOTE_EDGES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^"|"$"#).unwrap());

static STRIP_SINGLE_QUOTE_EDGES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^'|'$").unwrap());

static ESCAPE_DOUBLE_QUOTES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"\\?""#).unwrap());

static UNESCAPE_SINGLE_QUOTES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\\?'").unwrap());

fn is_string_type(ros_type: &str) -> bool {
    matches!(ros_type, "string" | "wstring" | "U16String")
}

/// Normalize a single raw default value into Rust literal text.
///
/// Non-string types are trimmed and passed through. String types get their
/// quoting style normalized: surrounding single or double quotes are removed,
/// inner double quotes are escaped, inner single quote escapes are dropped,
/// and the result is wrapped in double quotes.
#[must_use]
pub fn sanitize_default_value(ros_type: &str, raw: &str) -> String {
    let trimmed = raw.trim();
    if !is_string_type(ros_type) {
        return trimmed.to_string();
    }
    if trimmed.is_empty() {
        return "\"\"".to_string();
    }
    let s = STRIP_DOUBLE_QUOTE_EDGES.replace_all(trimmed, "");
    let s = STRIP_SINGLE_QUOTE_EDGES.replace_all(&s, "");
    let s = ESCAPE_DOUBLE_QUOTES.replace_all(&s, "\\\"");
    let s = UNESCAPE_SINGLE_QUOTES.replace_all(&s, "'");
    format!("\"{s}\"")
}

/// Split a raw array default into its sanitized element literals.
///
/// The surrounding brackets are removed structurally, then the body is split
/// on commas outside quote spans. Both quoting styles open a span, and a
/// backslash inside a span escapes the next character. Each element is
/// trimmed and, for string element types, sanitized like a scalar default.
#[must_use]
pub fn split_default_array_values(ros_type: &str, raw: &str) -> Vec<String> {
    let mut body = raw.trim();
    body = body.strip_prefix('[').unwrap_or(body);
    body = body.strip_suffix(']').unwrap_or(body);
    let body = body.trim();
    if body.is_empty() {
        return Vec::new();
    }

    let mut values = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut escaped = false;
    for c in body.chars() {
        if escaped {
            current.push(c);
            escaped = false;
            continue;
        }
        match c {
            '\\' if quote.is_some() => {
                current.push(c);
                escaped = true;
            }
            '\'' | '"' => {
                match quote {
                    None => quote = Some(c),
                    Some(q) if q == c => quote = None,
                    Some(_) => {}
                }
                current.push(c);
            }
            ',' if quote.is_none() => {
                values.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    values.push(current);

    values
        .iter()
        .map(|v| {
            if is_string_type(ros_type) {
                sanitize_default_value(ros_type, v)
            } else {
                v.trim().to_string()
            }
        })
        .collect()
}
