//! Parameter extraction from a single action descriptor.
//!
//! For one [`ActionDescriptor`] within its owning parser context, decide
//! whether it yields a parameter and, if so, compute the normalized
//! metadata fields. Suppressed actions and members of denylisted groups
//! yield nothing; everything else resolves to a record, falling back to an
//! optional string parameter when no rule applies.

use std::collections::HashSet;

use serde_json::Value;

use crate::parser::{ActionDefault, ActionDescriptor, ActionKind, GroupId, ParserSpec, ValueParser};
use crate::record::{ParameterRecord, ParameterType};

/// Destination of the output-format selector.
pub(crate) const FORMAT_SELECTOR_DEST: &str = "formatter";

/// The format choice machine invocations are pinned to.
pub(crate) const MACHINE_FORMAT: &str = "json";

/// Prefix of long-form option strings.
const LONG_OPTION_PREFIX: &str = "--";

/// Decides, for one action, whether to emit a [`ParameterRecord`] and
/// computes its fields.
pub struct ParameterExtractor<'a> {
    parser: &'a ParserSpec,
    skip_groups: &'a HashSet<GroupId>,
}

impl<'a> ParameterExtractor<'a> {
    /// An extractor for `parser` with the denylisted groups already
    /// resolved to their identities.
    pub fn new(parser: &'a ParserSpec, skip_groups: &'a HashSet<GroupId>) -> Self {
        Self {
            parser,
            skip_groups,
        }
    }

    /// Produce the `(name, record)` pair for `action`, or `None` when the
    /// action is excluded from the invocation schema.
    pub fn extract(&self, action: &ActionDescriptor) -> Option<(String, ParameterRecord)> {
        if self.is_skipped(action) {
            return None;
        }
        let dest = action.dest.as_deref()?;

        let record = ParameterRecord {
            default: resolve_default(action),
            description: compose_description(action),
            parameter_type: resolve_type(action),
            required: self.resolve_required(action),
            immutable: false,
        };
        Some((resolve_name(action, dest), record))
    }

    /// Group-membership skip test.
    ///
    /// The output-format selector is exempt: downstream invocation needs an
    /// explicit, deterministic format choice, so it is always surfaced even
    /// from inside a denylisted group.
    fn is_skipped(&self, action: &ActionDescriptor) -> bool {
        if is_format_selector(action) {
            return false;
        }
        action
            .group
            .is_some_and(|group| self.skip_groups.contains(&group))
    }

    /// An explicit required flag wins; optional arguments are never
    /// required; positionals in a mutually-exclusive group are not required
    /// (exactly one member of the group is expected, never all); any other
    /// positional is required.
    fn resolve_required(&self, action: &ActionDescriptor) -> bool {
        if let Some(required) = action.required {
            return required;
        }
        if !action.is_positional() {
            return false;
        }
        if let Some(group) = action.group {
            if self
                .parser
                .group(group)
                .is_some_and(|descriptor| descriptor.mutually_exclusive)
            {
                return false;
            }
        }
        true
    }
}

fn is_format_selector(action: &ActionDescriptor) -> bool {
    action.dest.as_deref() == Some(FORMAT_SELECTOR_DEST)
        && action
            .choices
            .as_ref()
            .is_some_and(|choices| choices.iter().any(|choice| choice == MACHINE_FORMAT))
}

/// First long-form option string with the prefix stripped, else the
/// destination identifier.
fn resolve_name(action: &ActionDescriptor, dest: &str) -> String {
    action
        .option_strings
        .iter()
        .find_map(|option| option.strip_prefix(LONG_OPTION_PREFIX))
        .map_or_else(|| dest.to_owned(), str::to_owned)
}

fn resolve_type(action: &ActionDescriptor) -> ParameterType {
    // A declared converter wins over the action's shape.
    if let Some(value_parser) = action.value_parser {
        return match value_parser {
            ValueParser::Int => ParameterType::Integer,
            ValueParser::Float => ParameterType::Number,
            ValueParser::Bool => ParameterType::Boolean,
        };
    }
    match action.kind {
        // The stored value is fixed; the parameter only picks whether to
        // flip or append it.
        ActionKind::StoreTrue | ActionKind::StoreFalse | ActionKind::AppendConst => {
            ParameterType::Boolean
        }
        ActionKind::Append => ParameterType::Array,
        ActionKind::Store => ParameterType::String,
    }
}

fn resolve_default(action: &ActionDescriptor) -> Option<Value> {
    // The selector's interactive default is useless to a machine invoker.
    if is_format_selector(action) {
        return Some(Value::from(MACHINE_FORMAT));
    }
    if let ActionDefault::Value(value) = &action.default {
        return Some(value.clone());
    }
    match action.kind {
        ActionKind::StoreTrue => Some(Value::Bool(false)),
        // "true" means "not yet flipped" / "not yet appended".
        ActionKind::StoreFalse | ActionKind::AppendConst => Some(Value::Bool(true)),
        ActionKind::Store | ActionKind::Append => None,
    }
}

/// Help text verbatim, with the choice set appended when constrained.
fn compose_description(action: &ActionDescriptor) -> Option<String> {
    match action.choices.as_deref() {
        Some(choices) if !choices.is_empty() => Some(format!(
            "{} (choices: {})",
            action.help.as_deref().unwrap_or_default(),
            choices.join(", ")
        )),
        _ => action.help.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn extract(
        parser: &ParserSpec,
        skip_groups: &HashSet<GroupId>,
        action: &ActionDescriptor,
    ) -> Option<(String, ParameterRecord)> {
        ParameterExtractor::new(parser, skip_groups).extract(action)
    }

    fn extract_plain(action: &ActionDescriptor) -> (String, ParameterRecord) {
        let parser = ParserSpec::new("test");
        extract(&parser, &HashSet::new(), action).unwrap()
    }

    #[test]
    fn name_comes_from_first_long_option() {
        let action = ActionDescriptor::new("all_projects")
            .with_option("-A")
            .with_option("--all-projects")
            .with_option("--all");
        let (name, _) = extract_plain(&action);
        assert_eq!(name, "all-projects");
    }

    #[test]
    fn positional_name_comes_from_dest() {
        let (name, record) = extract_plain(&ActionDescriptor::new("name"));
        assert_eq!(name, "name");
        assert!(record.required);
        assert!(!record.immutable);
    }

    #[test]
    fn explicit_required_flag_wins() {
        let (_, record) =
            extract_plain(&ActionDescriptor::new("name").with_required(false));
        assert!(!record.required);

        let (_, record) = extract_plain(
            &ActionDescriptor::new("image")
                .with_option("--image")
                .with_required(true),
        );
        assert!(record.required);
    }

    #[test]
    fn optional_arguments_are_not_required() {
        let (_, record) =
            extract_plain(&ActionDescriptor::new("limit").with_option("--limit"));
        assert!(!record.required);
    }

    #[test]
    fn positional_in_exclusive_group_is_not_required() {
        let mut parser = ParserSpec::new("test");
        let group = parser.add_exclusive_group("target");
        let action = ActionDescriptor::new("name").in_group(group);

        let (_, record) = extract(&parser, &HashSet::new(), &action).unwrap();
        assert!(!record.required);
    }

    #[test]
    fn positional_in_plain_group_stays_required() {
        let mut parser = ParserSpec::new("test");
        let group = parser.add_group("target");
        let action = ActionDescriptor::new("name").in_group(group);

        let (_, record) = extract(&parser, &HashSet::new(), &action).unwrap();
        assert!(record.required);
    }

    #[test]
    fn declared_converter_wins_over_kind() {
        let (_, record) = extract_plain(
            &ActionDescriptor::new("count")
                .with_option("--count")
                .with_kind(ActionKind::Append)
                .with_value_parser(ValueParser::Int),
        );
        assert_eq!(record.parameter_type, ParameterType::Integer);

        let (_, record) = extract_plain(
            &ActionDescriptor::new("ratio")
                .with_option("--ratio")
                .with_value_parser(ValueParser::Float),
        );
        assert_eq!(record.parameter_type, ParameterType::Number);

        let (_, record) = extract_plain(
            &ActionDescriptor::new("flag")
                .with_option("--flag")
                .with_value_parser(ValueParser::Bool),
        );
        assert_eq!(record.parameter_type, ParameterType::Boolean);
    }

    #[test]
    fn kind_drives_type_without_a_converter() {
        for kind in [
            ActionKind::StoreTrue,
            ActionKind::StoreFalse,
            ActionKind::AppendConst,
        ] {
            let (_, record) = extract_plain(
                &ActionDescriptor::new("flag").with_option("--flag").with_kind(kind),
            );
            assert_eq!(record.parameter_type, ParameterType::Boolean);
        }

        let (_, record) = extract_plain(
            &ActionDescriptor::new("tag")
                .with_option("--tag")
                .with_kind(ActionKind::Append),
        );
        assert_eq!(record.parameter_type, ParameterType::Array);

        let (_, record) =
            extract_plain(&ActionDescriptor::new("name").with_option("--name"));
        assert_eq!(record.parameter_type, ParameterType::String);
    }

    #[test]
    fn declared_default_is_used_verbatim() {
        let (_, record) = extract_plain(
            &ActionDescriptor::new("limit")
                .with_option("--limit")
                .with_default(json!(25)),
        );
        assert_eq!(record.default, Some(json!(25)));
    }

    #[test]
    fn flag_kinds_resolve_their_off_state_default() {
        let (_, record) = extract_plain(
            &ActionDescriptor::new("wait")
                .with_option("--wait")
                .with_kind(ActionKind::StoreTrue),
        );
        assert_eq!(record.default, Some(json!(false)));

        let (_, record) = extract_plain(
            &ActionDescriptor::new("retry")
                .with_option("--no-retry")
                .with_kind(ActionKind::StoreFalse),
        );
        assert_eq!(record.default, Some(json!(true)));

        let (_, record) = extract_plain(
            &ActionDescriptor::new("verbose")
                .with_option("--verbose")
                .with_kind(ActionKind::AppendConst),
        );
        assert_eq!(record.default, Some(json!(true)));
    }

    #[test]
    fn undefaulted_store_has_no_default() {
        let (_, record) =
            extract_plain(&ActionDescriptor::new("name").with_option("--name"));
        assert_eq!(record.default, None);
    }

    #[test]
    fn choices_are_appended_to_the_description_in_order() {
        let (_, record) = extract_plain(
            &ActionDescriptor::new("state")
                .with_option("--state")
                .with_help("Filter by state")
                .with_choices(["active", "error", "paused"]),
        );
        assert_eq!(
            record.description.as_deref(),
            Some("Filter by state (choices: active, error, paused)")
        );
    }

    #[test]
    fn description_without_choices_is_help_verbatim() {
        let (_, record) = extract_plain(
            &ActionDescriptor::new("name")
                .with_option("--name")
                .with_help("Server name"),
        );
        assert_eq!(record.description.as_deref(), Some("Server name"));

        let (_, record) =
            extract_plain(&ActionDescriptor::new("name").with_option("--name"));
        assert_eq!(record.description, None);
    }

    #[test]
    fn denylisted_group_member_is_skipped() {
        let mut parser = ParserSpec::new("test");
        let group = parser.add_group("output formatters");
        let skip_groups: HashSet<GroupId> = [group].into_iter().collect();

        let action = ActionDescriptor::new("columns")
            .with_option("--column")
            .in_group(group);
        assert_eq!(extract(&parser, &skip_groups, &action), None);
    }

    #[test]
    fn format_selector_escapes_the_skip_and_pins_json() {
        let mut parser = ParserSpec::new("test");
        let group = parser.add_group("output formatters");
        let skip_groups: HashSet<GroupId> = [group].into_iter().collect();

        let action = ActionDescriptor::new("formatter")
            .with_option("--format")
            .with_help("The output format to use")
            .with_choices(["table", "csv", "json", "yaml"])
            .with_default(json!("table"))
            .in_group(group);

        let (name, record) = extract(&parser, &skip_groups, &action).unwrap();
        assert_eq!(name, "format");
        assert_eq!(record.default, Some(json!("json")));
        assert!(!record.required);
        assert_eq!(
            record.description.as_deref(),
            Some("The output format to use (choices: table, csv, json, yaml)")
        );
    }

    #[test]
    fn format_selector_without_json_choice_is_not_special() {
        let mut parser = ParserSpec::new("test");
        let group = parser.add_group("output formatters");
        let skip_groups: HashSet<GroupId> = [group].into_iter().collect();

        let action = ActionDescriptor::new("formatter")
            .with_option("--format")
            .with_choices(["table", "csv"])
            .with_default(json!("table"))
            .in_group(group);
        assert_eq!(extract(&parser, &skip_groups, &action), None);
    }

    #[test]
    fn suppressed_destination_yields_nothing() {
        let parser = ParserSpec::new("test");
        let action = ActionDescriptor::suppressed().with_option("--help");
        assert_eq!(extract(&parser, &HashSet::new(), &action), None);
    }
}
