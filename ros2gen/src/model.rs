//! Parsed interface representation
//!
//! The data model produced by the parser and consumed by code generation
//! backends. Everything here is plain data; the parser fills it in and the
//! emitter attaches precomputed code fragments to each field.

use crate::mapping;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// The kind of interface a message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterfaceKind {
    /// A standalone `.msg` definition
    Message,
    /// A message derived from a `.srv` definition
    Service,
    /// A message derived from an `.action` definition
    Action,
}

impl InterfaceKind {
    /// The subdirectory name used in import paths for this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Message => "msg",
            Self::Service => "srv",
            Self::Action => "action",
        }
    }
}

/// Identity of a parsed interface entity.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Owning package name
    pub package: String,
    /// Entity name, e.g. `Pose` or `Fibonacci_Goal`
    pub name: String,
    /// What kind of interface this entity belongs to
    pub kind: InterfaceKind,
}

impl Metadata {
    /// The canonical `package/kind/Name` path of this entity.
    #[must_use]
    pub fn import_path(&self) -> String {
        format!("{}/{}/{}", self.package, self.kind.as_str(), self.name)
    }

    /// The module name the entity's generated code lives in.
    #[must_use]
    pub fn module_name(&self) -> String {
        format!("{}_{}", self.package, self.kind.as_str())
    }
}

/// The array shape of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArrayShape {
    /// A single value
    Scalar,
    /// A fixed-size array `[N]`
    FixedArray(u32),
    /// An unbounded sequence `[]`
    Sequence,
    /// A bounded sequence `[<=N]`
    BoundedSequence(u32),
}

impl ArrayShape {
    /// Whether the field holds more than a single value.
    #[must_use]
    pub fn is_array(self) -> bool {
        !matches!(self, Self::Scalar)
    }

    /// The fixed element count, for fixed-size arrays only.
    #[must_use]
    pub fn fixed_size(self) -> Option<u32> {
        match self {
            Self::FixedArray(n) => Some(n),
            _ => None,
        }
    }

    /// The sequence capacity bound, for bounded sequences only.
    #[must_use]
    pub fn upper_bound(self) -> Option<u32> {
        match self {
            Self::BoundedSequence(n) => Some(n),
            _ => None,
        }
    }
}

impl fmt::Display for ArrayShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar => Ok(()),
            Self::FixedArray(n) => write!(f, "[{n}]"),
            Self::Sequence => write!(f, "[]"),
            Self::BoundedSequence(n) => write!(f, "[<={n}]"),
        }
    }
}

/// Precomputed code fragments attached to a field by the emitter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldCodegen {
    /// Statement copying the field from the owned struct into native memory
    pub to_native: String,
    /// Statement copying the field from native memory into the owned struct
    pub from_native: String,
    /// Statement deep-copying the field between owned structs
    pub clone: String,
    /// Statement(s) assigning the field's default value
    pub default_assignment: String,
}

/// A named constant declared in an interface body.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Constant {
    /// Raw ROS type token as written
    pub ros_type: String,
    /// Native Rust type of the constant
    pub rust_type: String,
    /// Constant name as written
    pub ros_name: String,
    /// Sanitized literal value
    pub value: String,
    /// Package classification of the constant's type
    pub package: String,
    /// Attached documentation comment
    pub comment: String,
}

/// A data field declared in an interface body.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Field {
    /// Normalized ROS type name
    pub ros_type: String,
    /// Native Rust type name
    pub rust_type: String,
    /// Byte-level struct name for the native representation
    pub native_struct: String,
    /// Field name as written
    pub ros_name: String,
    /// Field name escaped for use as a Rust identifier
    pub rust_name: String,
    /// Array shape of the field
    pub shape: ArrayShape,
    /// Capacity bound for bounded strings
    pub string_upper_bound: Option<u32>,
    /// Raw default value text as written, if any
    pub default_value: Option<String>,
    /// Package classification or owning package
    pub package: String,
    /// Import alias used to reference a foreign package's module
    pub package_alias: String,
    /// Whether the type lives in the same generated module as its owner
    pub is_local_package: bool,
    /// Attached documentation comment
    pub comment: String,
    /// Precomputed code fragments for this field
    pub codegen: FieldCodegen,
}

impl Field {
    /// Whether the field's type is a composite message rather than a
    /// primitive or builtin.
    #[must_use]
    pub fn is_composite(&self) -> bool {
        !mapping::is_primitive_package(&self.package)
    }

    /// The module prefix to use when referencing the field's type, empty for
    /// local and primitive types.
    #[must_use]
    pub fn package_reference(&self) -> String {
        if self.package.is_empty() || self.is_local_package {
            String::new()
        } else {
            format!("{}::", self.package_alias)
        }
    }
}

/// A parsed message definition, either standalone or derived from a service
/// or action section.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    /// Identity of this message
    pub meta: Metadata,
    /// Data fields in declaration order
    pub fields: Vec<Field>,
    /// Constants in declaration order
    pub constants: Vec<Constant>,
    /// Import path keyed by alias, first registration wins
    pub imports: BTreeMap<String, String>,
    /// Foreign packages whose native headers the message depends on
    pub native_includes: BTreeSet<String>,
}

impl Message {
    /// Create an empty message with the given identity.
    #[must_use]
    pub fn new(package: &str, name: &str, kind: InterfaceKind) -> Self {
        Self {
            meta: Metadata {
                package: package.to_string(),
                name: name.to_string(),
                kind,
            },
            fields: Vec::new(),
            constants: Vec::new(),
            imports: BTreeMap::new(),
            native_includes: BTreeSet::new(),
        }
    }

    /// Register an import under an alias. The first registration for an alias
    /// wins; later conflicting paths are ignored.
    pub fn add_import(&mut self, alias: &str, path: &str) {
        self.imports
            .entry(alias.to_string())
            .or_insert_with(|| path.to_string());
    }

    /// Look up a field by its ROS-level name.
    #[must_use]
    pub fn get_field(&self, ros_name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.ros_name == ros_name)
    }

    /// Look up a constant by its ROS-level name.
    #[must_use]
    pub fn get_constant(&self, ros_name: &str) -> Option<&Constant> {
        self.constants.iter().find(|c| c.ros_name == ros_name)
    }

    /// Whether the message declares any data fields.
    #[must_use]
    pub fn has_fields(&self) -> bool {
        !self.fields.is_empty()
    }

    /// Whether the message declares any constants.
    #[must_use]
    pub fn has_constants(&self) -> bool {
        !self.constants.is_empty()
    }
}

/// A parsed service definition: a request/response message pair.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Service {
    /// Identity of the service itself
    pub meta: Metadata,
    /// The request message
    pub request: Message,
    /// The response message
    pub response: Message,
}

impl Service {
    /// Create an empty service with derived request and response messages.
    #[must_use]
    pub fn new(package: &str, name: &str, kind: InterfaceKind) -> Self {
        Self {
            meta: Metadata {
                package: package.to_string(),
                name: name.to_string(),
                kind,
            },
            request: Message::new(package, &format!("{name}_Request"), kind),
            response: Message::new(package, &format!("{name}_Response"), kind),
        }
    }
}

/// A parsed action definition: three user-written sections plus the derived
/// protocol entities.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Action {
    /// Identity of the action itself
    pub meta: Metadata,
    /// The goal message, from the first section
    pub goal: Message,
    /// The result message, from the second section
    pub result: Message,
    /// The feedback message, from the third section
    pub feedback: Message,
    /// Derived goal-submission service
    pub send_goal: Service,
    /// Derived result-retrieval service
    pub get_result: Service,
    /// Derived feedback stream message
    pub feedback_message: Message,
}

impl Action {
    /// Create an empty action with its three sections and derived entities.
    #[must_use]
    pub fn new(package: &str, name: &str) -> Self {
        let kind = InterfaceKind::Action;
        Self {
            meta: Metadata {
                package: package.to_string(),
                name: name.to_string(),
                kind,
            },
            goal: Message::new(package, &format!("{name}_Goal"), kind),
            result: Message::new(package, &format!("{name}_Result"), kind),
            feedback: Message::new(package, &format!("{name}_Feedback"), kind),
            send_goal: Service::new(package, &format!("{name}_SendGoal"), kind),
            get_result: Service::new(package, &format!("{name}_GetResult"), kind),
            feedback_message: Message::new(package, &format!("{name}_FeedbackMessage"), kind),
        }
    }
}

/// One extracted native error code.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorCode {
    /// The native symbol name
    pub name: String,
    /// The literal integer value, empty for symbolic aliases
    pub value: String,
    /// The referenced symbol, for symbolic aliases
    pub reference: String,
    /// Attached documentation comment
    pub comment: String,
}

/// A parsed interface of any kind.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Interface {
    /// A `.msg` definition
    Message(Message),
    /// A `.srv` definition
    Service(Service),
    /// An `.action` definition
    Action(Action),
}
