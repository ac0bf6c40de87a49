//! Generate invocation metadata from declarative command parsers.
//!
//! A console suite registers its commands in a [`CommandCatalog`]; each
//! command describes its accepted arguments as a read-only [`ParserSpec`].
//! The [`ParserIntrospector`] walks one command's parser, derives a
//! normalized [`ParameterRecord`] per accepted argument (delegating the
//! per-argument decision rules to [`ParameterExtractor`]), and assembles a
//! serializable [`CommandRecord`] that a [`MetadataSink`] writes out as one
//! YAML document per command.
//!
//! The crate performs no command execution and no argument-value
//! validation; it only describes how a command would be invoked.

pub mod catalog;
pub mod error;
pub mod extract;
pub mod introspect;
pub mod parser;
pub mod record;
pub mod sink;

pub use catalog::{CommandCatalog, CommandError, CommandHandle, ConsoleCommand};
pub use error::{ActionGenError, Result};
pub use extract::ParameterExtractor;
pub use introspect::ParserIntrospector;
pub use parser::{
    ActionDefault, ActionDescriptor, ActionKind, GroupDescriptor, GroupId, ParserSpec, ValueParser,
};
pub use record::{CommandRecord, ParameterRecord, ParameterType};
pub use sink::MetadataSink;
