//! Presentation argument groups shared by the suite commands.
//!
//! The wrapped CLI attaches these formatter groups to every command; the
//! generator excludes them from the emitted schemas, surfacing only the
//! format selector itself.

use actiongen::parser::{ActionDescriptor, ActionKind, ParserSpec, ValueParser};
use serde_json::json;

/// Formatter surface of list-style commands.
pub(crate) fn attach_list_output(parser: &mut ParserSpec) {
    let formatters = parser.add_group("output formatters");
    parser.push(
        ActionDescriptor::new("formatter")
            .with_option("-f")
            .with_option("--format")
            .with_help("The output format, defaults to table")
            .with_choices(["csv", "json", "table", "value", "yaml"])
            .with_default(json!("table"))
            .in_group(formatters),
    );
    parser.push(
        ActionDescriptor::new("columns")
            .with_option("-c")
            .with_option("--column")
            .with_kind(ActionKind::Append)
            .with_help("Specify the column(s) to include, can be repeated")
            .in_group(formatters),
    );

    let csv = parser.add_group("CSV Formatter");
    parser.push(
        ActionDescriptor::new("quote_mode")
            .with_option("--quote")
            .with_help("When to include quotes")
            .with_choices(["all", "minimal", "none", "nonnumeric"])
            .with_default(json!("nonnumeric"))
            .in_group(csv),
    );

    let table = parser.add_group("table formatter");
    parser.push(
        ActionDescriptor::new("max_width")
            .with_option("--max-width")
            .with_value_parser(ValueParser::Int)
            .with_default(json!(0))
            .with_help("Maximum display width, 0 to disable")
            .in_group(table),
    );
}

/// Formatter surface of show-style commands.
pub(crate) fn attach_show_output(parser: &mut ParserSpec) {
    let formatters = parser.add_group("output formatters");
    parser.push(
        ActionDescriptor::new("formatter")
            .with_option("-f")
            .with_option("--format")
            .with_help("The output format, defaults to table")
            .with_choices(["json", "shell", "table", "value", "yaml"])
            .with_default(json!("table"))
            .in_group(formatters),
    );

    let shell = parser.add_group("shell formatter");
    parser.push(
        ActionDescriptor::new("prefix")
            .with_option("--prefix")
            .with_default(json!(""))
            .with_help("Add a prefix to all variable names")
            .in_group(shell),
    );
}
