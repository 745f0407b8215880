#![deny(
    unsafe_code,
    unused_must_use,
    unreachable_pub,
    rust_2018_idioms,
    missing_docs,
    clippy::pedantic
)]

//! Parser and code-generation engine for ROS2 interface definitions.
//!
//! Parses `.msg`, `.srv`, and `.action` definition files into a typed model
//! and computes the per-field code fragments a generation backend needs to
//! produce native conversion, clone, and default-value implementations.
//! Companion modules handle interface blacklisting and return-code extraction
//! from native headers.
//!
//! ```
//! use ros2gen::{Config, parser};
//!
//! let config = Config::default();
//! let msg = parser::parse_message_string(
//!     &config,
//!     "geometry_msgs",
//!     "Point",
//!     "float64 x\nfloat64 y\nfloat64 z\n",
//! )?;
//! assert_eq!(msg.fields.len(), 3);
//! assert_eq!(msg.meta.import_path(), "geometry_msgs/msg/Point");
//! # Ok::<(), ros2gen::ParseError>(())
//! ```

pub mod blacklist;
mod comments;
pub mod config;
pub mod emit;
pub mod error_codes;
pub mod errors;
pub mod mapping;
pub mod model;
pub mod names;
pub mod parser;
pub mod sanitize;

pub use blacklist::Blacklist;
pub use config::Config;
pub use error_codes::ErrorCodeExtractor;
pub use errors::{ParseError, ParseResult};
pub use model::{
    Action, ArrayShape, Constant, ErrorCode, Field, Interface, InterfaceKind, Message, Metadata,
    Service,
};
pub use parser::Parser;

/// Crate version, for embedding in generated file headers.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
