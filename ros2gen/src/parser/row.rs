//! Row classification
//!
//! Each body line of a definition file is classified into exactly one row
//! kind. The constant grammar is tried before the field grammar because a
//! constant row also satisfies the looser field grammar.

use crate::model::ArrayShape;
use regex::Regex;
use std::sync::LazyLock;

static COMMENT_ROW: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#\s*(.*)$").unwrap());

static CONSTANT_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?P<package>\w+)/)?(?P<type>\w+)(?P<array>\[(?P<bounded><=)?(?P<size>\d*)\])?\s+(?P<field>\w+)\s*=\s*(?P<default>[^#]+)?(?:\s*#\s*(?P<comment>.*))?$",
    )
    .unwrap()
});

static FIELD_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?P<package>\w+)/)?(?P<type>\w+)(?P<string_bound><=\d*)?(?P<array>\[(?P<bounded><=)?(?P<size>\d*)\])?\s+(?P<field>\w+)\s*(?P<default>[^#]+)?(?:\s+#\s*(?P<comment>.*))?$",
    )
    .unwrap()
});

/// A classified body line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// A standalone comment line, with the leading marker stripped
    Comment(String),
    /// An empty line
    Blank,
    /// A constant declaration
    Constant(ConstantRow),
    /// A field declaration
    Field(FieldRow),
    /// A non-empty line matching no grammar
    Invalid,
}

/// The raw parts of a constant row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantRow {
    /// Explicit package qualifier, if written
    pub package: Option<String>,
    /// Raw type token
    pub ros_type: String,
    /// Constant name
    pub name: String,
    /// Raw value text
    pub value: String,
    /// Trailing line comment
    pub comment: String,
}

/// The raw parts of a field row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRow {
    /// Explicit package qualifier, if written
    pub package: Option<String>,
    /// Raw type token
    pub ros_type: String,
    /// Capacity bound of a bounded string, if written
    pub string_bound: Option<u32>,
    /// Array shape derived from the bracket suffix
    pub shape: ArrayShape,
    /// Field name
    pub name: String,
    /// Raw default value text, if written
    pub default: Option<String>,
    /// Trailing line comment
    pub comment: String,
}

/// Derive the array shape from the bracket capture groups. `None` means the
/// size literal does not fit the size type and the row is invalid.
fn capture_shape(caps: &regex::Captures<'_>) -> Option<ArrayShape> {
    if caps.name("array").is_none() {
        return Some(ArrayShape::Scalar);
    }
    let size = caps.name("size").map_or("", |m| m.as_str());
    if caps.name("bounded").is_some() {
        if size.is_empty() {
            Some(ArrayShape::BoundedSequence(0))
        } else {
            size.parse().ok().map(ArrayShape::BoundedSequence)
        }
    } else if size.is_empty() {
        Some(ArrayShape::Sequence)
    } else {
        size.parse().ok().map(ArrayShape::FixedArray)
    }
}

fn capture_str(caps: &regex::Captures<'_>, name: &str) -> String {
    caps.name(name).map_or("", |m| m.as_str()).to_string()
}

/// Classify one trimmed body line.
#[must_use]
pub fn classify(line: &str) -> Row {
    if line.is_empty() {
        return Row::Blank;
    }
    if let Some(caps) = COMMENT_ROW.captures(line) {
        return Row::Comment(caps[1].trim().to_string());
    }
    if let Some(caps) = CONSTANT_ROW.captures(line) {
        return Row::Constant(ConstantRow {
            package: caps.name("package").map(|m| m.as_str().to_string()),
            ros_type: capture_str(&caps, "type"),
            name: capture_str(&caps, "field"),
            value: capture_str(&caps, "default").trim().to_string(),
            comment: capture_str(&caps, "comment").trim().to_string(),
        });
    }
    if let Some(caps) = FIELD_ROW.captures(line) {
        let string_bound = match caps.name("string_bound") {
            None => None,
            Some(m) => {
                let digits = m.as_str().trim_start_matches("<=");
                if digits.is_empty() {
                    Some(0)
                } else {
                    match digits.parse() {
                        Ok(n) => Some(n),
                        Err(_) => return Row::Invalid,
                    }
                }
            }
        };
        let Some(shape) = capture_shape(&caps) else {
            return Row::Invalid;
        };
        let default = caps
            .name("default")
            .map(|m| m.as_str().trim().to_string())
            .filter(|d| !d.is_empty());
        return Row::Field(FieldRow {
            package: caps.name("package").map(|m| m.as_str().to_string()),
            ros_type: capture_str(&caps, "type"),
            string_bound,
            shape,
            name: capture_str(&caps, "field"),
            default,
            comment: capture_str(&caps, "comment").trim().to_string(),
        });
    }
    Row::Invalid
}
