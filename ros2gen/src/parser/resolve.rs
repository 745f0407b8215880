//! Type resolution
//!
//! Decides which package a type token belongs to: primitive/builtin, local to
//! the owning entity, a well-known `std_msgs` type, or a foreign package.

use crate::mapping;
use crate::model::{InterfaceKind, Metadata};

/// Message type names that resolve to `std_msgs` when referenced without a
/// package qualifier from another package.
const WELL_KNOWN_STD_MSGS: &[&str] = &[
    "Bool",
    "Byte",
    "ByteMultiArray",
    "Char",
    "ColorRGBA",
    "Duration",
    "Empty",
    "Float32",
    "Float32MultiArray",
    "Float64",
    "Float64MultiArray",
    "Header",
    "Int16",
    "Int16MultiArray",
    "Int32",
    "Int32MultiArray",
    "Int64",
    "Int64MultiArray",
    "Int8",
    "Int8MultiArray",
    "MultiArrayDimension",
    "MultiArrayLayout",
    "String",
    "Time",
    "UInt16",
    "UInt16MultiArray",
    "UInt32",
    "UInt32MultiArray",
    "UInt64",
    "UInt64MultiArray",
    "UInt8",
    "UInt8MultiArray",
];

/// A resolved type token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedType {
    /// Package classification: `""`, `"time"`, `"primitives"`, `"."` for a
    /// local composite, or a foreign package name
    pub package: String,
    /// Normalized ROS type name
    pub ros_type: String,
    /// Native Rust type name
    pub rust_type: String,
    /// Byte-level struct name
    pub native_struct: String,
}

fn composite(package: &str, ros_type: &str) -> ResolvedType {
    ResolvedType {
        package: package.to_string(),
        ros_type: ros_type.to_string(),
        rust_type: ros_type.to_string(),
        native_struct: ros_type.to_string(),
    }
}

/// Resolve a type token against the entity that declares it.
///
/// A primitive mapping hit wins even over an explicit package qualifier.
/// Unqualified composite references inside service and action bodies resolve
/// to the owning package; inside message bodies a well-known `std_msgs` name
/// resolves to `std_msgs` and anything else stays local.
#[must_use]
pub fn resolve_type(
    explicit_package: Option<&str>,
    ros_type: &str,
    owning: &Metadata,
) -> ResolvedType {
    if let Some(m) = mapping::primitive_mapping(ros_type) {
        return ResolvedType {
            package: m.package.to_string(),
            ros_type: m.ros_type.to_string(),
            rust_type: m.rust_type.to_string(),
            native_struct: m.native_struct.to_string(),
        };
    }

    match explicit_package {
        Some(pkg) if pkg == owning.package => composite(".", ros_type),
        Some(pkg) => composite(pkg, ros_type),
        None => {
            if owning.kind != InterfaceKind::Message {
                return composite(&owning.package, ros_type);
            }
            if owning.package != "std_msgs" && WELL_KNOWN_STD_MSGS.contains(&ros_type) {
                composite("std_msgs", ros_type)
            } else {
                composite(".", ros_type)
            }
        }
    }
}
