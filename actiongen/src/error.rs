//! Error types for metadata generation.

use thiserror::Error;

use crate::catalog::CommandError;

/// Errors raised while generating command metadata.
///
/// Per-command construction failures carry the offending command name; the
/// batch driver decides whether one failure aborts the run.
#[derive(Debug, Error)]
pub enum ActionGenError {
    /// The command implementation could not be loaded or instantiated.
    #[error("failed to load command '{command}'")]
    CommandLoad {
        /// Space-separated invocation text of the failing command.
        command: String,
        /// Underlying loader failure.
        #[source]
        source: CommandError,
    },

    /// The command's parser could not be built.
    #[error("failed to build parser for command '{command}'")]
    ParserBuild {
        /// Space-separated invocation text of the failing command.
        command: String,
        /// Underlying builder failure.
        #[source]
        source: CommandError,
    },

    /// A command record could not be rendered to YAML.
    #[error("failed to serialize metadata for '{name}'")]
    Serialize {
        /// Dot-normalized record name.
        name: String,
        /// Underlying serializer failure.
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// A metadata document could not be written.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for metadata generation operations.
pub type Result<T> = std::result::Result<T, ActionGenError>;
