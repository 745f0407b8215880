//! Code fragment emission
//!
//! Computes the per-field statements a generation backend splices into the
//! native conversion, clone, and default-value bodies. Fragments are plain
//! strings without trailing semicolons; multi-statement fragments carry their
//! own internal punctuation.

use crate::model::{ArrayShape, Field, FieldCodegen};
use crate::names::upper_case_first;
use crate::sanitize::{sanitize_default_value, split_default_array_values};

fn is_string_family(ros_type: &str) -> bool {
    matches!(ros_type, "string" | "U16String")
}

/// The literal a primitive type falls back to when no default was written.
///
/// Panics on a type missing from the table. The parser only produces fields
/// whose types passed the mapping table, so a panic here is an engine defect.
fn primitive_common_default(ros_type: &str) -> &'static str {
    match ros_type {
        "string" | "wstring" | "U16String" => "String::new()",
        "bool" => "false",
        "float32" | "float64" => "0.0",
        "byte" | "char" | "int8" | "int16" | "int32" | "int64" | "uint8" | "uint16" | "uint32"
        | "uint64" => "0",
        "time" | "duration" => "Default::default()",
        t => panic!("common default value for ROS type {t} is not defined"),
    }
}

fn to_native(field: &Field) -> String {
    let n = &field.rust_name;
    let ty = upper_case_first(&field.ros_type);
    let path = field.package_reference();
    if field.is_composite() {
        match field.shape {
            ArrayShape::FixedArray(_) => {
                format!("{path}{ty}::array_to_native(&mut mem.{n}, &m.{n})")
            }
            ArrayShape::Sequence | ArrayShape::BoundedSequence(_) => {
                format!("{path}{ty}::sequence_to_native(&mut mem.{n}, &m.{n})")
            }
            ArrayShape::Scalar => format!("{path}{ty}::to_native(&mut mem.{n}, &m.{n})"),
        }
    } else {
        match field.shape {
            ArrayShape::FixedArray(_) => {
                format!("primitives::{ty}::array_to_native(&mut mem.{n}, &m.{n})")
            }
            ArrayShape::Sequence | ArrayShape::BoundedSequence(_) => {
                format!("primitives::{ty}::sequence_to_native(&mut mem.{n}, &m.{n})")
            }
            ArrayShape::Scalar => match field.ros_type.as_str() {
                "string" => format!("primitives::string_to_native(&mut mem.{n}, &m.{n})"),
                "U16String" => format!("primitives::u16string_to_native(&mut mem.{n}, &m.{n})"),
                _ => format!("mem.{n} = m.{n}"),
            },
        }
    }
}

fn from_native(field: &Field) -> String {
    let n = &field.rust_name;
    let ty = upper_case_first(&field.ros_type);
    let path = field.package_reference();
    if field.is_composite() {
        match field.shape {
            ArrayShape::FixedArray(_) => {
                format!("{path}{ty}::array_to_owned(&mut m.{n}, &mem.{n})")
            }
            ArrayShape::Sequence | ArrayShape::BoundedSequence(_) => {
                format!("{path}{ty}::sequence_to_owned(&mut m.{n}, &mem.{n})")
            }
            ArrayShape::Scalar => format!("{path}{ty}::from_native(&mut m.{n}, &mem.{n})"),
        }
    } else {
        match field.shape {
            ArrayShape::FixedArray(_) => {
                format!("primitives::{ty}::array_to_owned(&mut m.{n}, &mem.{n})")
            }
            ArrayShape::Sequence | ArrayShape::BoundedSequence(_) => {
                format!("primitives::{ty}::sequence_to_owned(&mut m.{n}, &mem.{n})")
            }
            ArrayShape::Scalar => match field.ros_type.as_str() {
                "string" => format!("primitives::string_to_owned(&mut m.{n}, &mem.{n})"),
                "U16String" => format!("primitives::u16string_to_owned(&mut m.{n}, &mem.{n})"),
                _ => format!("m.{n} = mem.{n}"),
            },
        }
    }
}

fn clone(field: &Field) -> String {
    let n = &field.rust_name;
    if field.is_composite() {
        let ty = upper_case_first(&field.ros_type);
        let path = field.package_reference();
        match field.shape {
            ArrayShape::Sequence | ArrayShape::BoundedSequence(_) => {
                format!("c.{n} = t.{n}.iter().map({path}{ty}::clone).collect()")
            }
            ArrayShape::FixedArray(_) => format!("c.{n}.clone_from(&t.{n})"),
            ArrayShape::Scalar => format!("c.{n} = t.{n}.clone()"),
        }
    } else if field.shape.is_array() || field.rust_type == "String" {
        format!("c.{n} = t.{n}.clone()")
    } else {
        format!("c.{n} = t.{n}")
    }
}

fn composite_defaults_loop(n: &str) -> String {
    format!("for v in &mut t.{n} {{\n    v.set_defaults();\n}}")
}

fn default_assignment(field: &Field) -> String {
    let n = &field.rust_name;
    if field.is_composite() {
        if !field.shape.is_array() {
            return format!("t.{n}.set_defaults()");
        }
        match &field.default_value {
            None => match field.shape {
                ArrayShape::FixedArray(_) => composite_defaults_loop(n),
                _ => format!("t.{n} = Vec::new()"),
            },
            Some(raw) => {
                let values = split_default_array_values(&field.ros_type, raw);
                if field.shape.fixed_size().is_none() && !values.is_empty() {
                    format!(
                        "t.{n}.resize_with({}, Default::default);\n{}",
                        values.len(),
                        composite_defaults_loop(n)
                    )
                } else {
                    composite_defaults_loop(n)
                }
            }
        }
    } else {
        match &field.default_value {
            Some(raw) if field.shape.is_array() => {
                let mut values = split_default_array_values(&field.ros_type, raw);
                if is_string_family(&field.ros_type) {
                    for v in &mut values {
                        v.push_str(".to_string()");
                    }
                }
                let joined = values.join(", ");
                if field.shape.fixed_size().is_some() {
                    format!("t.{n} = [{joined}]")
                } else {
                    format!("t.{n} = vec![{joined}]")
                }
            }
            Some(raw) => {
                let mut lit = sanitize_default_value(&field.ros_type, raw);
                if is_string_family(&field.ros_type) {
                    lit.push_str(".to_string()");
                }
                format!("t.{n} = {lit}")
            }
            None if field.shape.is_array() => match field.shape {
                ArrayShape::FixedArray(size) => {
                    if is_string_family(&field.ros_type) {
                        format!("t.{n} = std::array::from_fn(|_| String::new())")
                    } else {
                        format!(
                            "t.{n} = [{}; {size}]",
                            primitive_common_default(&field.ros_type)
                        )
                    }
                }
                _ => format!("t.{n} = Vec::new()"),
            },
            None => format!("t.{n} = {}", primitive_common_default(&field.ros_type)),
        }
    }
}

/// Compute all code fragments for one resolved field.
#[must_use]
pub fn field_codegen(field: &Field) -> FieldCodegen {
    FieldCodegen {
        to_native: to_native(field),
        from_native: from_native(field),
        clone: clone(field),
        default_assignment: default_assignment(field),
    }
}
