//! Primitive type mapping table
//!
//! Maps each ROS primitive type name to its native Rust representation, its
//! byte-level struct name, and a package classification that drives import
//! registration and the emitter's primitive/composite split.

/// Package classification for types whose conversion helpers live in the
/// runtime's `primitives` module.
pub const PRIMITIVES_PACKAGE: &str = "primitives";

/// Package classification for the builtin time types.
pub const TIME_PACKAGE: &str = "time";

/// One entry of the primitive type mapping table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMapping {
    /// Normalized ROS-level type name (e.g. `wstring` normalizes to `U16String`)
    pub ros_type: &'static str,
    /// Native Rust type name
    pub rust_type: &'static str,
    /// Byte-level struct name used by the native representation
    pub native_struct: &'static str,
    /// Package classification: `""`, `"time"`, or `"primitives"`
    pub package: &'static str,
}

const fn entry(
    ros_type: &'static str,
    rust_type: &'static str,
    native_struct: &'static str,
    package: &'static str,
) -> TypeMapping {
    TypeMapping {
        ros_type,
        rust_type,
        native_struct,
        package,
    }
}

/// Look up a raw type token in the primitive mapping table.
///
/// Returns `None` for composite (message) types.
#[must_use]
pub fn primitive_mapping(ros_type: &str) -> Option<TypeMapping> {
    let mapping = match ros_type {
        "string" => entry("string", "String", "String", PRIMITIVES_PACKAGE),
        "wstring" => entry("U16String", "String", "U16String", PRIMITIVES_PACKAGE),
        "char" => entry("char", "u8", "char", PRIMITIVES_PACKAGE),
        "time" => entry("time", "Time", "Time", TIME_PACKAGE),
        "duration" => entry("duration", "Duration", "Duration", TIME_PACKAGE),
        "bool" => entry("bool", "bool", "boolean", ""),
        "byte" => entry("byte", "u8", "octet", ""),
        "float32" => entry("float32", "f32", "float", ""),
        "float64" => entry("float64", "f64", "double", ""),
        "int8" => entry("int8", "i8", "int8", ""),
        "int16" => entry("int16", "i16", "int16", ""),
        "int32" => entry("int32", "i32", "int32", ""),
        "int64" => entry("int64", "i64", "int64", ""),
        "uint8" => entry("uint8", "u8", "uint8", ""),
        "uint16" => entry("uint16", "u16", "uint16", ""),
        "uint32" => entry("uint32", "u32", "uint32", ""),
        "uint64" => entry("uint64", "u64", "uint64", ""),
        _ => return None,
    };
    Some(mapping)
}

/// Whether a field package reference denotes a primitive/builtin type rather
/// than a composite message reference.
#[must_use]
pub fn is_primitive_package(package: &str) -> bool {
    matches!(package, "" | TIME_PACKAGE | PRIMITIVES_PACKAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_mappings() {
        let m = primitive_mapping("int32").unwrap();
        assert_eq!(m.rust_type, "i32");
        assert_eq!(m.native_struct, "int32");
        assert_eq!(m.package, "");

        let m = primitive_mapping("float64").unwrap();
        assert_eq!(m.rust_type, "f64");
        assert_eq!(m.native_struct, "double");
    }

    #[test]
    fn test_string_family_classifies_as_primitives() {
        assert_eq!(primitive_mapping("string").unwrap().package, "primitives");
        assert_eq!(primitive_mapping("char").unwrap().package, "primitives");
        let w = primitive_mapping("wstring").unwrap();
        assert_eq!(w.ros_type, "U16String");
        assert_eq!(w.package, "primitives");
    }

    #[test]
    fn test_time_family() {
        assert_eq!(primitive_mapping("time").unwrap().package, "time");
        assert_eq!(primitive_mapping("duration").unwrap().rust_type, "Duration");
    }

    #[test]
    fn test_composite_is_unmapped() {
        assert!(primitive_mapping("Pose").is_none());
        assert!(primitive_mapping("Header").is_none());
    }

    #[test]
    fn test_primitive_package_predicate() {
        assert!(is_primitive_package(""));
        assert!(is_primitive_package("time"));
        assert!(is_primitive_package("primitives"));
        assert!(!is_primitive_package("."));
        assert!(!is_primitive_package("std_msgs"));
    }
}
