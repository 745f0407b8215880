//! Interface blacklist
//!
//! Interfaces whose `package/kind/Name` path matches a configured pattern are
//! skipped by generation. The rules are compiled into a single union regex
//! with one named group per rule so a match can be traced back to the rule
//! that caused it.

use crate::config::Config;
use regex::Regex;
use std::fmt::Write;

/// A compiled set of blacklist rules.
#[derive(Debug, Clone)]
pub struct Blacklist {
    rules: Vec<String>,
    pattern: Option<Regex>,
}

impl Blacklist {
    /// Compile a rule set. An empty set matches nothing.
    ///
    /// # Errors
    ///
    /// Returns the regex error when a rule is not a valid pattern.
    pub fn new(rules: &[String]) -> Result<Self, regex::Error> {
        if rules.is_empty() {
            return Ok(Self {
                rules: Vec::new(),
                pattern: None,
            });
        }
        let mut union = String::new();
        for (i, rule) in rules.iter().enumerate() {
            if i > 0 {
                union.push('|');
            }
            // Infallible, writing to a String.
            let _ = write!(union, "(?P<r{i}>{rule})");
        }
        Ok(Self {
            rules: rules.to_vec(),
            pattern: Some(Regex::new(&union)?),
        })
    }

    /// Compile the rule set carried by a configuration.
    ///
    /// # Errors
    ///
    /// Returns the regex error when a configured rule is not a valid pattern.
    pub fn from_config(config: &Config) -> Result<Self, regex::Error> {
        Self::new(&config.blacklist)
    }

    /// Whether an interface path is blacklisted, and by which rule.
    ///
    /// The returned rule text is empty when no rule matched or the matching
    /// group could not be recovered.
    #[must_use]
    pub fn is_blacklisted(&self, path: &str) -> (bool, String) {
        let Some(pattern) = &self.pattern else {
            return (false, String::new());
        };
        let Some(caps) = pattern.captures(path) else {
            return (false, String::new());
        };
        for i in (0..self.rules.len()).rev() {
            if caps.name(&format!("r{i}")).is_some() {
                let rule = self.rules[i].clone();
                log::debug!("interface {path} is blacklisted by rule {rule}");
                return (true, rule);
            }
        }
        (true, String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_blacklist_matches_nothing() {
        let bl = Blacklist::new(&[]).unwrap();
        assert_eq!(bl.is_blacklisted("std_msgs/msg/Header"), (false, String::new()));
    }

    #[test]
    fn test_match_reports_rule() {
        let rules = vec![
            "other_msgs/.*".to_string(),
            "test_msgs/msg/Skip.*".to_string(),
        ];
        let bl = Blacklist::new(&rules).unwrap();
        let (hit, rule) = bl.is_blacklisted("test_msgs/msg/SkipThis");
        assert!(hit);
        assert_eq!(rule, "test_msgs/msg/Skip.*");

        let (hit, _) = bl.is_blacklisted("test_msgs/msg/Keep");
        assert!(!hit);
    }

    #[test]
    fn test_default_rules_compile() {
        let bl = Blacklist::from_config(&Config::default()).unwrap();
        let (hit, _) = bl.is_blacklisted("libstatistics_collector/msg/DummyMessage");
        assert!(hit);
        let (hit, _) = bl.is_blacklisted("std_msgs/msg/Header");
        assert!(!hit);
    }

    #[test]
    fn test_invalid_rule_is_an_error() {
        assert!(Blacklist::new(&["(unclosed".to_string()]).is_err());
    }
}
