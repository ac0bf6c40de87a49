//! Command catalog: the registry of introspectable commands.
//!
//! A console suite registers each command under its space-separated
//! invocation text together with a [`CommandHandle`] that can load the
//! implementation on demand. The catalog is the only discovery surface the
//! generator consumes; it knows nothing about how commands execute.

use std::collections::BTreeMap;
use std::fmt;

use crate::parser::ParserSpec;

/// Error type surfaced by command loaders and parser builders.
///
/// Failures are opaque to the introspection core and are wrapped into
/// [`crate::ActionGenError`] with the offending command name attached.
pub type CommandError = Box<dyn std::error::Error + Send + Sync>;

/// A command that can describe its own argument parser.
pub trait ConsoleCommand: Send + Sync {
    /// Documentation string used as the command record description.
    fn doc(&self) -> Option<&str> {
        None
    }

    /// Build the declarative parser for this command.
    ///
    /// `prog` is the context label of the introspecting tool; builders that
    /// embed a program name into help text should use it verbatim.
    /// Construction must have no side effects beyond creating the spec.
    fn build_parser(&self, prog: &str) -> Result<ParserSpec, CommandError>;
}

/// Constructor invoked by [`CommandHandle::load`].
pub type CommandLoader = fn() -> Result<Box<dyn ConsoleCommand>, CommandError>;

/// A loadable reference to a command implementation.
#[derive(Debug, Clone)]
pub struct CommandHandle {
    target: String,
    loader: CommandLoader,
}

impl CommandHandle {
    /// Create a handle.
    ///
    /// `target` is the fixed textual representation of the implementation
    /// (a module-path-like string); it is recorded as the `ep` parameter of
    /// every generated record.
    pub fn new(target: impl Into<String>, loader: CommandLoader) -> Self {
        Self {
            target: target.into(),
            loader,
        }
    }

    /// The textual representation of the implementation.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Instantiate the command implementation.
    pub fn load(&self) -> Result<Box<dyn ConsoleCommand>, CommandError> {
        (self.loader)()
    }
}

impl fmt::Display for CommandHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.target)
    }
}

/// Registry mapping command invocation text to loadable handles.
///
/// Iteration is in lexicographic invocation-text order, so batch runs over
/// the same catalog always process commands in the same order.
#[derive(Debug, Default)]
pub struct CommandCatalog {
    commands: BTreeMap<String, CommandHandle>,
}

impl CommandCatalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command under its space-separated invocation text.
    ///
    /// A later registration under the same text replaces the earlier one.
    pub fn register(&mut self, command: impl Into<String>, handle: CommandHandle) {
        self.commands.insert(command.into(), handle);
    }

    /// Look up a handle by invocation text.
    pub fn get(&self, command: &str) -> Option<&CommandHandle> {
        self.commands.get(command)
    }

    /// Iterate over `(invocation text, handle)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CommandHandle)> {
        self.commands
            .iter()
            .map(|(command, handle)| (command.as_str(), handle))
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the catalog has no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
