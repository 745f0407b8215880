//! Generator configuration

/// Interface paths that are never generated, as anchored regex patterns.
pub const DEFAULT_BLACKLIST: &[&str] = &[
    "libstatistics_collector/msg/DummyMessage",
    "this-is-a-test-blacklist-entry-do-not-remove-used-for-internal-testing",
];

/// Native headers scanned for return-code definitions by default.
pub const DEFAULT_ERROR_CODE_HEADERS: &[&str] =
    &["rcl/types.h", "rmw/ret_types.h", "rcl_action/types.h"];

/// Configuration shared by the parser and the code generation backends.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// Module path prefix under which generated message modules are rooted
    pub message_module_prefix: String,
    /// Name of the runtime support crate referenced by emitted code
    pub runtime_crate: String,
    /// Regex patterns for interface paths to skip
    pub blacklist: Vec<String>,
    /// File name patterns of headers to scan for error codes
    pub error_code_headers: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            message_module_prefix: "crate::msgs".to_string(),
            runtime_crate: "ros2gen_runtime".to_string(),
            blacklist: DEFAULT_BLACKLIST.iter().map(ToString::to_string).collect(),
            error_code_headers: DEFAULT_ERROR_CODE_HEADERS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.message_module_prefix, "crate::msgs");
        assert_eq!(config.runtime_crate, "ros2gen_runtime");
        assert_eq!(config.blacklist.len(), DEFAULT_BLACKLIST.len());
        assert!(config
            .error_code_headers
            .iter()
            .any(|h| h == "rcl/types.h"));
    }
}
