//! Server commands of the wrapped suite.

use actiongen::catalog::{CommandCatalog, CommandError, CommandHandle, ConsoleCommand};
use actiongen::parser::{ActionDescriptor, ActionKind, ParserSpec, ValueParser};
use serde_json::json;

use super::formatting;

pub(crate) fn register(catalog: &mut CommandCatalog) {
    catalog.register(
        "server list",
        CommandHandle::new("commands::server::List", || Ok(Box::new(List))),
    );
    catalog.register(
        "server create",
        CommandHandle::new("commands::server::Create", || Ok(Box::new(Create))),
    );
    catalog.register(
        "server delete",
        CommandHandle::new("commands::server::Delete", || Ok(Box::new(Delete))),
    );
    catalog.register(
        "server reboot",
        CommandHandle::new("commands::server::Reboot", || Ok(Box::new(Reboot))),
    );
}

struct List;

impl ConsoleCommand for List {
    fn doc(&self) -> Option<&str> {
        Some("List servers")
    }

    fn build_parser(&self, prog: &str) -> Result<ParserSpec, CommandError> {
        let mut parser = ParserSpec::new(prog);
        formatting::attach_list_output(&mut parser);
        parser.push(
            ActionDescriptor::new("all_projects")
                .with_option("--all-projects")
                .with_kind(ActionKind::StoreTrue)
                .with_help("Include servers from all projects"),
        );
        parser.push(
            ActionDescriptor::new("status")
                .with_option("--status")
                .with_help("Filter by server status")
                .with_choices(["active", "error", "paused", "shutoff"]),
        );
        parser.push(
            ActionDescriptor::new("limit")
                .with_option("--limit")
                .with_value_parser(ValueParser::Int)
                .with_help("Maximum number of servers to list"),
        );
        parser.push(
            ActionDescriptor::new("marker")
                .with_option("--marker")
                .with_help("The last server of the previous page"),
        );
        Ok(parser)
    }
}

struct Create;

impl ConsoleCommand for Create {
    fn doc(&self) -> Option<&str> {
        Some("Create a new server")
    }

    fn build_parser(&self, prog: &str) -> Result<ParserSpec, CommandError> {
        let mut parser = ParserSpec::new(prog);
        formatting::attach_show_output(&mut parser);
        parser.push(ActionDescriptor::new("name").with_help("New server name"));
        parser.push(
            ActionDescriptor::new("image")
                .with_option("--image")
                .with_required(true)
                .with_help("Create server boot disk from this image"),
        );
        parser.push(
            ActionDescriptor::new("flavor")
                .with_option("--flavor")
                .with_required(true)
                .with_help("Create server with this flavor"),
        );
        parser.push(
            ActionDescriptor::new("network")
                .with_option("--network")
                .with_kind(ActionKind::Append)
                .with_help("Attach the server to this network, can be repeated"),
        );
        parser.push(
            ActionDescriptor::new("property")
                .with_option("--property")
                .with_kind(ActionKind::Append)
                .with_help("Set a property on the new server, can be repeated"),
        );
        parser.push(
            ActionDescriptor::new("count")
                .with_option("--count")
                .with_value_parser(ValueParser::Int)
                .with_default(json!(1))
                .with_help("Number of servers to create"),
        );
        parser.push(
            ActionDescriptor::new("wait")
                .with_option("--wait")
                .with_kind(ActionKind::StoreTrue)
                .with_help("Wait for the build to complete"),
        );
        Ok(parser)
    }
}

struct Delete;

impl ConsoleCommand for Delete {
    fn doc(&self) -> Option<&str> {
        Some("Delete a server")
    }

    fn build_parser(&self, prog: &str) -> Result<ParserSpec, CommandError> {
        let mut parser = ParserSpec::new(prog);
        parser.push(ActionDescriptor::new("server").with_help("Server to delete, name or ID"));
        parser.push(
            ActionDescriptor::new("wait")
                .with_option("--wait")
                .with_kind(ActionKind::StoreTrue)
                .with_help("Wait for the deletion to complete"),
        );
        Ok(parser)
    }
}

struct Reboot;

impl ConsoleCommand for Reboot {
    fn doc(&self) -> Option<&str> {
        Some("Reboot a server")
    }

    fn build_parser(&self, prog: &str) -> Result<ParserSpec, CommandError> {
        let mut parser = ParserSpec::new(prog);
        parser.push(ActionDescriptor::new("server").with_help("Server to reboot, name or ID"));

        let kind = parser.add_exclusive_group("reboot type");
        parser.push(
            ActionDescriptor::new("soft")
                .with_option("--soft")
                .with_kind(ActionKind::StoreTrue)
                .with_help("Request the operating system to restart")
                .in_group(kind),
        );
        parser.push(
            ActionDescriptor::new("hard")
                .with_option("--hard")
                .with_kind(ActionKind::StoreTrue)
                .with_help("Power cycle the server")
                .in_group(kind),
        );
        Ok(parser)
    }
}
