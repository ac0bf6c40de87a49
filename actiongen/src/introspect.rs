//! Whole-parser introspection into a command record.
//!
//! One [`ParserIntrospector`] produces one complete [`CommandRecord`] for
//! one catalog entry: it loads the command, builds its parser, resolves the
//! denylisted presentation groups once, walks every action through the
//! [`ParameterExtractor`], and injects the synthetic invocation
//! identifiers. A single pass, no retained state between commands.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde_json::Value;

use crate::catalog::CommandHandle;
use crate::error::{ActionGenError, Result};
use crate::extract::ParameterExtractor;
use crate::parser::{ActionDefault, GroupId, ParserSpec};
use crate::record::{CommandRecord, ParameterRecord};

/// Runner designation stamped on every generated record.
pub const RUNNER_TYPE: &str = "run-cli";

/// Entry point the runner executes, relative to the pack root.
pub const ENTRY_POINT: &str = "scripts/wrapper.sh";

/// Context label handed to command parser builders.
pub const PARSER_CONTEXT: &str = "actiongen";

/// Synthetic parameter naming the command implementation.
pub const ENTRY_POINT_PARAMETER: &str = "ep";

/// Synthetic parameter carrying the original invocation text.
pub const BASE_COMMAND_PARAMETER: &str = "base";

/// Titles of groups that configure presentation rather than invocation
/// semantics; their members are excluded from generated schemas.
const SKIP_GROUP_TITLES: &[&str] = &[
    "output formatters",
    "table formatter",
    "shell formatter",
    "CSV Formatter",
];

/// Builds one complete [`CommandRecord`] for one command.
pub struct ParserIntrospector<'a> {
    command_text: &'a str,
    handle: &'a CommandHandle,
}

impl<'a> ParserIntrospector<'a> {
    /// An introspector for the command registered under `command_text`.
    pub fn new(command_text: &'a str, handle: &'a CommandHandle) -> Self {
        Self {
            command_text,
            handle,
        }
    }

    /// Load the command, build its parser, and assemble the record.
    ///
    /// Construction failures propagate with the command name attached;
    /// there is no partial record.
    pub fn build(&self) -> Result<CommandRecord> {
        let command = self
            .handle
            .load()
            .map_err(|source| ActionGenError::CommandLoad {
                command: self.command_text.to_owned(),
                source,
            })?;
        let parser =
            command
                .build_parser(PARSER_CONTEXT)
                .map_err(|source| ActionGenError::ParserBuild {
                    command: self.command_text.to_owned(),
                    source,
                })?;

        let parameters = self.collect_parameters(&parser);
        tracing::debug!(
            command = self.command_text,
            parameters = parameters.len(),
            "introspected parser"
        );

        Ok(CommandRecord {
            name: self.command_text.replace(' ', "."),
            runner_type: RUNNER_TYPE.to_owned(),
            entry_point: ENTRY_POINT.to_owned(),
            enabled: true,
            description: command.doc().map(str::to_owned),
            parameters,
        })
    }

    fn collect_parameters(&self, parser: &ParserSpec) -> IndexMap<String, ParameterRecord> {
        let skip_groups = resolve_skip_groups(parser);
        let extractor = ParameterExtractor::new(parser, &skip_groups);
        let mut parameters = IndexMap::new();

        for action in parser.actions() {
            // The parser's own "not user-settable" markers.
            if action.dest.is_none() || matches!(action.default, ActionDefault::Suppress) {
                continue;
            }
            let Some((name, record)) = extractor.extract(action) else {
                tracing::debug!(dest = ?action.dest, "skipping excluded action");
                continue;
            };
            // Names are unique per parser by construction of the parsing
            // library; a collision overwrites silently rather than failing
            // the command.
            parameters.insert(name, record);
        }

        parameters.insert(
            ENTRY_POINT_PARAMETER.to_owned(),
            ParameterRecord::immutable(Value::from(self.handle.target())),
        );
        parameters.insert(
            BASE_COMMAND_PARAMETER.to_owned(),
            ParameterRecord::immutable(Value::from(self.command_text)),
        );
        parameters
    }
}

/// Resolve the denylisted groups of `parser` to their identities, once per
/// parser before traversal.
fn resolve_skip_groups(parser: &ParserSpec) -> HashSet<GroupId> {
    parser
        .groups()
        .filter(|(_, group)| SKIP_GROUP_TITLES.contains(&group.title.as_str()))
        .map(|(id, _)| id)
        .collect()
}
