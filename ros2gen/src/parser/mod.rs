//! Definition file parsing
//!
//! Turns `.msg`, `.srv`, and `.action` definition text into the data model.
//! Service and action definitions are split on `---` separators into their
//! constituent messages; actions additionally get the derived goal-submission
//! and result-retrieval protocol entities synthesized here.

pub mod resolve;
pub mod row;

use crate::comments;
use crate::config::Config;
use crate::emit;
use crate::errors::{ParseError, ParseResult, unknown_type};
use crate::mapping;
use crate::model::{
    Action, ArrayShape, Constant, Field, FieldCodegen, Interface, InterfaceKind, Message, Metadata,
    Service,
};
use crate::names;
use crate::sanitize::sanitize_default_value;
use row::{ConstantRow, FieldRow, Row};
use std::path::Path;

/// Stateful parser for interface definition bodies.
///
/// The only state carried between lines is the pending comment buffer;
/// everything else lives in the messages being filled.
pub struct Parser<'a> {
    config: &'a Config,
    pending_comments: String,
}

impl<'a> Parser<'a> {
    /// Create a parser using the given configuration.
    #[must_use]
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            pending_comments: String::new(),
        }
    }

    /// Parse a `.msg` body.
    ///
    /// # Errors
    ///
    /// Returns an error when a line matches no grammar, a type cannot be
    /// resolved, or a `---` separator appears.
    pub fn parse_message(
        &mut self,
        package: &str,
        name: &str,
        content: &str,
    ) -> ParseResult<Message> {
        self.pending_comments.clear();
        let mut msg = Message::new(package, name, InterfaceKind::Message);
        self.parse_sections(content, &mut [&mut msg])?;
        Ok(msg)
    }

    /// Parse a `.srv` body into its request and response messages.
    ///
    /// # Errors
    ///
    /// Returns an error on invalid lines, unresolvable types, or more than
    /// one `---` separator.
    pub fn parse_service(
        &mut self,
        package: &str,
        name: &str,
        content: &str,
    ) -> ParseResult<Service> {
        self.pending_comments.clear();
        let mut srv = Service::new(package, name, InterfaceKind::Service);
        let Service {
            request, response, ..
        } = &mut srv;
        self.parse_sections(content, &mut [request, response])?;
        Ok(srv)
    }

    /// Parse an `.action` body into its three sections and synthesize the
    /// derived protocol entities.
    ///
    /// # Errors
    ///
    /// Returns an error on invalid lines, unresolvable types, or more than
    /// two `---` separators.
    pub fn parse_action(
        &mut self,
        package: &str,
        name: &str,
        content: &str,
    ) -> ParseResult<Action> {
        self.pending_comments.clear();
        let mut action = Action::new(package, name);
        {
            let Action {
                goal,
                result,
                feedback,
                ..
            } = &mut action;
            self.parse_sections(content, &mut [goal, result, feedback])?;
        }
        self.synthesize_action_protocol(&mut action)?;
        Ok(action)
    }

    fn parse_sections(
        &mut self,
        source: &str,
        sections: &mut [&mut Message],
    ) -> ParseResult<()> {
        let mut current = 0;
        for (idx, raw) in source.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim();
            if line == "---" {
                current += 1;
                self.pending_comments.clear();
                if current >= sections.len() {
                    return Err(ParseError::SectionOverflow {
                        expected: sections.len() - 1,
                    });
                }
                continue;
            }
            self.parse_line(line_no, line, &mut *sections[current])
                .map_err(|e| match e {
                    syntax @ ParseError::Syntax { .. } => syntax,
                    other => ParseError::Line {
                        line: line_no,
                        message: other.to_string(),
                    },
                })?;
        }
        Ok(())
    }

    fn parse_line(&mut self, line_no: usize, line: &str, msg: &mut Message) -> ParseResult<()> {
        match row::classify(line) {
            Row::Blank => self.pending_comments.clear(),
            Row::Comment(c) => comments::push_pending(&mut self.pending_comments, &c),
            Row::Invalid => {
                return Err(ParseError::Syntax {
                    line: line_no,
                    text: line.to_string(),
                });
            }
            Row::Constant(c) => {
                let constant = self.build_constant(c)?;
                msg.constants.push(constant);
            }
            Row::Field(f) => {
                let field = self.build_field(f, &msg.meta)?;
                self.register_field_imports(msg, &field);
                msg.fields.push(field);
            }
        }
        Ok(())
    }

    fn build_constant(&mut self, row: ConstantRow) -> ParseResult<Constant> {
        let mapping = mapping::primitive_mapping(&row.ros_type).ok_or_else(|| {
            unknown_type(&row.ros_type, "constant type must map to a primitive")
        })?;
        Ok(Constant {
            ros_type: row.ros_type,
            rust_type: mapping.rust_type.to_string(),
            ros_name: row.name,
            value: sanitize_default_value(mapping.ros_type, &row.value),
            package: mapping.package.to_string(),
            comment: comments::take_pending(&mut self.pending_comments, &row.comment),
        })
    }

    fn build_field(&mut self, row: FieldRow, owning: &Metadata) -> ParseResult<Field> {
        if let Some(bound) = row.string_bound
            && !(row.package.is_none() && row.ros_type == "string")
        {
            return Err(ParseError::BoundaryConflict {
                type_string: format!("{}<={bound}", row.ros_type),
            });
        }

        let resolved = resolve::resolve_type(row.package.as_deref(), &row.ros_type, owning);

        let mut package = resolved.package;
        let mut package_alias = String::new();
        let mut is_local_package = false;
        if !mapping::is_primitive_package(&package) {
            if package == "." {
                if owning.kind == InterfaceKind::Message {
                    is_local_package = true;
                } else {
                    // Derived service and action messages live in their own
                    // module, so a same-package message is still an import.
                    package = owning.package.clone();
                    package_alias = format!("{package}_msg");
                }
            } else {
                package_alias = format!("{package}_msg");
            }
        }

        let mut field = Field {
            ros_type: resolved.ros_type,
            rust_type: resolved.rust_type,
            native_struct: resolved.native_struct,
            rust_name: names::sanitize_identifier(&row.name),
            ros_name: row.name,
            shape: row.shape,
            string_upper_bound: row.string_bound,
            default_value: row.default,
            package,
            package_alias,
            is_local_package,
            comment: comments::take_pending(&mut self.pending_comments, &row.comment),
            codegen: FieldCodegen::default(),
        };
        field.codegen = emit::field_codegen(&field);
        Ok(field)
    }

    fn register_field_imports(&self, msg: &mut Message, field: &Field) {
        match field.package.as_str() {
            "" => {
                if field.shape.is_array() {
                    msg.add_import(
                        "primitives",
                        &format!("{}::primitives", self.config.runtime_crate),
                    );
                }
            }
            mapping::PRIMITIVES_PACKAGE => {
                msg.add_import(
                    "primitives",
                    &format!("{}::primitives", self.config.runtime_crate),
                );
            }
            mapping::TIME_PACKAGE => {
                msg.add_import("time", &format!("{}::time", self.config.runtime_crate));
                // Array fragments route through the primitives helpers.
                if field.shape.is_array() {
                    msg.add_import(
                        "primitives",
                        &format!("{}::primitives", self.config.runtime_crate),
                    );
                }
            }
            _ if field.is_local_package => {}
            pkg => {
                msg.add_import(
                    &field.package_alias,
                    &format!("{}::{pkg}::msg", self.config.message_module_prefix),
                );
                msg.native_includes.insert(pkg.to_string());
            }
        }
    }

    /// Fill in the derived goal-submission service, result-retrieval service,
    /// and feedback stream message of an action.
    fn synthesize_action_protocol(&mut self, action: &mut Action) -> ParseResult<()> {
        let package = action.meta.package.clone();
        let goal_name = action.goal.meta.name.clone();
        let result_name = action.result.meta.name.clone();
        let feedback_name = action.feedback.meta.name.clone();

        self.synthesize_field(
            Some("unique_identifier_msgs"),
            "UUID",
            "goal_id",
            &mut action.send_goal.request,
        )?;
        self.push_action_local_field(&package, &goal_name, "goal", &mut action.send_goal.request);

        self.synthesize_field(None, "bool", "accepted", &mut action.send_goal.response)?;
        self.synthesize_field(
            Some("builtin_interfaces"),
            "Time",
            "stamp",
            &mut action.send_goal.response,
        )?;

        self.synthesize_field(
            Some("unique_identifier_msgs"),
            "UUID",
            "goal_id",
            &mut action.get_result.request,
        )?;

        self.synthesize_field(None, "int8", "status", &mut action.get_result.response)?;
        self.push_action_local_field(
            &package,
            &result_name,
            "result",
            &mut action.get_result.response,
        );

        self.synthesize_field(
            Some("unique_identifier_msgs"),
            "UUID",
            "goal_id",
            &mut action.feedback_message,
        )?;
        self.push_action_local_field(
            &package,
            &feedback_name,
            "feedback",
            &mut action.feedback_message,
        );
        Ok(())
    }

    fn synthesize_field(
        &mut self,
        package: Option<&str>,
        ros_type: &str,
        name: &str,
        msg: &mut Message,
    ) -> ParseResult<()> {
        let row = FieldRow {
            package: package.map(ToString::to_string),
            ros_type: ros_type.to_string(),
            string_bound: None,
            shape: ArrayShape::Scalar,
            name: name.to_string(),
            default: None,
            comment: String::new(),
        };
        let field = self.build_field(row, &msg.meta)?;
        self.register_field_imports(msg, &field);
        msg.fields.push(field);
        Ok(())
    }

    /// Reference one of the action's own derived messages from a protocol
    /// entity in the same generated module.
    fn push_action_local_field(
        &self,
        package: &str,
        message_name: &str,
        field_name: &str,
        msg: &mut Message,
    ) {
        let mut field = Field {
            ros_type: message_name.to_string(),
            rust_type: message_name.to_string(),
            native_struct: message_name.to_string(),
            ros_name: field_name.to_string(),
            rust_name: names::sanitize_identifier(field_name),
            shape: ArrayShape::Scalar,
            string_upper_bound: None,
            default_value: None,
            package: package.to_string(),
            package_alias: format!("{package}_msg"),
            is_local_package: true,
            comment: String::new(),
            codegen: FieldCodegen::default(),
        };
        field.codegen = emit::field_codegen(&field);
        msg.fields.push(field);
    }
}

/// Parse a `.msg` body with a one-shot parser.
///
/// # Errors
///
/// See [`Parser::parse_message`].
pub fn parse_message_string(
    config: &Config,
    package: &str,
    name: &str,
    content: &str,
) -> ParseResult<Message> {
    Parser::new(config).parse_message(package, name, content)
}

/// Parse a `.srv` body with a one-shot parser.
///
/// # Errors
///
/// See [`Parser::parse_service`].
pub fn parse_service_string(
    config: &Config,
    package: &str,
    name: &str,
    content: &str,
) -> ParseResult<Service> {
    Parser::new(config).parse_service(package, name, content)
}

/// Parse an `.action` body with a one-shot parser.
///
/// # Errors
///
/// See [`Parser::parse_action`].
pub fn parse_action_string(
    config: &Config,
    package: &str,
    name: &str,
    content: &str,
) -> ParseResult<Action> {
    Parser::new(config).parse_action(package, name, content)
}

fn entity_name(path: &Path, extension: &str) -> ParseResult<String> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| ParseError::InvalidInterfaceFile {
            path: path.display().to_string(),
            reason: "file name is not valid UTF-8".to_string(),
        })?;
    file_name
        .strip_suffix(extension)
        .map(ToString::to_string)
        .ok_or_else(|| ParseError::InvalidInterfaceFile {
            path: path.display().to_string(),
            reason: format!("expected a '{extension}' file"),
        })
}

/// Parse a `.msg` file.
///
/// # Errors
///
/// Returns an error when the file cannot be read or its body is invalid.
pub fn parse_message_file(config: &Config, package: &str, path: &Path) -> ParseResult<Message> {
    let name = entity_name(path, ".msg")?;
    let content = std::fs::read_to_string(path)?;
    parse_message_string(config, package, &name, &content)
}

/// Parse a `.srv` file.
///
/// # Errors
///
/// Returns an error when the file cannot be read or its body is invalid.
pub fn parse_service_file(config: &Config, package: &str, path: &Path) -> ParseResult<Service> {
    let name = entity_name(path, ".srv")?;
    let content = std::fs::read_to_string(path)?;
    parse_service_string(config, package, &name, &content)
}

/// Parse an `.action` file.
///
/// # Errors
///
/// Returns an error when the file cannot be read or its body is invalid.
pub fn parse_action_file(config: &Config, package: &str, path: &Path) -> ParseResult<Action> {
    let name = entity_name(path, ".action")?;
    let content = std::fs::read_to_string(path)?;
    parse_action_string(config, package, &name, &content)
}

/// Parse any interface file, dispatching on its extension.
///
/// # Errors
///
/// Returns an error for unrecognized extensions, unreadable files, and
/// invalid bodies.
pub fn parse_interface_file(
    config: &Config,
    package: &str,
    path: &Path,
) -> ParseResult<Interface> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("msg") => Ok(Interface::Message(parse_message_file(config, package, path)?)),
        Some("srv") => Ok(Interface::Service(parse_service_file(config, package, path)?)),
        Some("action") => Ok(Interface::Action(parse_action_file(config, package, path)?)),
        _ => Err(ParseError::InvalidInterfaceFile {
            path: path.display().to_string(),
            reason: "expected a .msg, .srv, or .action file".to_string(),
        }),
    }
}
