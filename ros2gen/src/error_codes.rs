//! Native return-code extraction
//!
//! Scans native headers for `#define RCL_RET_*` and `#define RMW_RET_*` rows
//! and turns them into error-code entries. Comment lines above a define
//! attach to it the same way definition file comments attach to fields.

use crate::comments;
use crate::model::ErrorCode;
use regex::Regex;
use std::collections::HashMap;
use std::fmt::Write;
use std::sync::LazyLock;

static DEFINE_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^#define\s+(?P<name>(?:RCL|RMW)_RET_\w+)\s+(?:(?P<int>\d+)|(?P<reference>\w+))\s*(?://\s*(?P<comment>.+))?\s*$",
    )
    .unwrap()
});

static COMMENT_ROW: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*//+\s*(.+)$").unwrap());

/// Extracts return-code entries from native header text.
pub struct ErrorCodeExtractor {
    file_pattern: Option<Regex>,
    pending_comments: String,
    seen_values: HashMap<String, String>,
    dedup_filter: HashMap<String, String>,
}

impl ErrorCodeExtractor {
    /// Create an extractor scanning files that match any of the given name
    /// patterns. An empty pattern set matches no files.
    ///
    /// # Errors
    ///
    /// Returns the regex error when a pattern is invalid.
    pub fn new(file_patterns: &[String]) -> Result<Self, regex::Error> {
        let file_pattern = if file_patterns.is_empty() {
            None
        } else {
            let mut union = String::new();
            for (i, p) in file_patterns.iter().enumerate() {
                if i > 0 {
                    union.push('|');
                }
                let _ = write!(union, "(?:{p})");
            }
            Some(Regex::new(&union)?)
        };
        Ok(Self {
            file_pattern,
            pending_comments: String::new(),
            seen_values: HashMap::new(),
            dedup_filter: HashMap::new(),
        })
    }

    /// Whether a header path should be scanned.
    #[must_use]
    pub fn matches_file(&self, path: &str) -> bool {
        self.file_pattern.as_ref().is_some_and(|p| p.is_match(path))
    }

    /// Extract all return-code entries from one header's text.
    ///
    /// Comments never carry over from a previously scanned header.
    pub fn extract(&mut self, content: &str) -> Vec<ErrorCode> {
        self.pending_comments.clear();
        let mut codes = Vec::new();
        for raw in content.lines() {
            let line = raw.trim_end();
            if let Some(caps) = DEFINE_ROW.captures(line) {
                let name = caps["name"].to_string();
                let value = caps.name("int").map_or("", |m| m.as_str()).to_string();
                let reference = caps.name("reference").map_or("", |m| m.as_str()).to_string();
                let line_comment = caps.name("comment").map_or("", |m| m.as_str().trim());
                let comment = comments::take_pending(&mut self.pending_comments, line_comment);
                self.note_value(&name, &value);
                codes.push(ErrorCode {
                    name,
                    value,
                    reference,
                    comment,
                });
            } else if let Some(caps) = COMMENT_ROW.captures(line) {
                comments::push_pending(&mut self.pending_comments, caps[1].trim());
            } else {
                self.pending_comments.clear();
            }
        }
        codes
    }

    /// Names that duplicate an earlier entry's value, mapped to that value.
    /// Backends skip these to keep the generated enum free of discriminant
    /// collisions.
    #[must_use]
    pub fn dedup_filter(&self) -> &HashMap<String, String> {
        &self.dedup_filter
    }

    /// Whether a name was filtered out as a duplicate of an earlier value.
    #[must_use]
    pub fn is_aliased(&self, name: &str) -> bool {
        self.dedup_filter.contains_key(name)
    }

    fn note_value(&mut self, name: &str, value: &str) {
        if value.is_empty() {
            return;
        }
        if let Some(earlier) = self.seen_values.get(value) {
            log::warn!(
                "return code {name} duplicates the value {value} of {earlier}, skipping it"
            );
            self.dedup_filter
                .insert(name.to_string(), value.to_string());
        } else {
            self.seen_values
                .insert(value.to_string(), name.to_string());
        }
    }
}
