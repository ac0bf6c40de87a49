//! Volume commands of the wrapped suite.

use actiongen::catalog::{CommandCatalog, CommandError, CommandHandle, ConsoleCommand};
use actiongen::parser::{ActionDescriptor, ActionKind, ParserSpec, ValueParser};

use super::formatting;

pub(crate) fn register(catalog: &mut CommandCatalog) {
    catalog.register(
        "volume list",
        CommandHandle::new("commands::volume::List", || Ok(Box::new(List))),
    );
    catalog.register(
        "volume create",
        CommandHandle::new("commands::volume::Create", || Ok(Box::new(Create))),
    );
}

struct List;

impl ConsoleCommand for List {
    fn doc(&self) -> Option<&str> {
        Some("List volumes")
    }

    fn build_parser(&self, prog: &str) -> Result<ParserSpec, CommandError> {
        let mut parser = ParserSpec::new(prog);
        formatting::attach_list_output(&mut parser);
        parser.push(
            ActionDescriptor::new("all_projects")
                .with_option("--all-projects")
                .with_kind(ActionKind::StoreTrue)
                .with_help("Include volumes from all projects"),
        );
        parser.push(
            ActionDescriptor::new("status")
                .with_option("--status")
                .with_help("Filter by volume status")
                .with_choices(["available", "in-use", "error"]),
        );
        parser.push(
            ActionDescriptor::new("limit")
                .with_option("--limit")
                .with_value_parser(ValueParser::Int)
                .with_help("Maximum number of volumes to list"),
        );
        Ok(parser)
    }
}

struct Create;

impl ConsoleCommand for Create {
    fn doc(&self) -> Option<&str> {
        Some("Create a new volume")
    }

    fn build_parser(&self, prog: &str) -> Result<ParserSpec, CommandError> {
        let mut parser = ParserSpec::new(prog);
        formatting::attach_show_output(&mut parser);
        parser.push(ActionDescriptor::new("name").with_help("New volume name"));
        parser.push(
            ActionDescriptor::new("size")
                .with_option("--size")
                .with_value_parser(ValueParser::Int)
                .with_required(true)
                .with_help("Volume size in gigabytes"),
        );

        let source = parser.add_exclusive_group("volume source");
        parser.push(
            ActionDescriptor::new("snapshot")
                .with_option("--snapshot")
                .with_help("Use this snapshot as the source")
                .in_group(source),
        );
        parser.push(
            ActionDescriptor::new("source_volume")
                .with_option("--source")
                .with_help("Clone this volume as the source")
                .in_group(source),
        );

        parser.push(
            ActionDescriptor::new("property")
                .with_option("--property")
                .with_kind(ActionKind::Append)
                .with_help("Set a property on the new volume, can be repeated"),
        );
        // Accepted for backwards compatibility, no longer user-settable.
        parser.push(
            ActionDescriptor::new("pool")
                .with_option("--pool")
                .with_suppressed_default()
                .with_help("Deprecated, ignored"),
        );
        Ok(parser)
    }
}
