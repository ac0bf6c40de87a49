//! Declarative argument-parser descriptions.
//!
//! A [`ParserSpec`] is the read-only tree the introspection core walks: a
//! flat list of [`ActionDescriptor`]s plus a table of [`GroupDescriptor`]s
//! addressed by opaque [`GroupId`]s. Commands build one spec per
//! introspection call and never mutate it afterwards.

use serde_json::Value;

/// Opaque identity of a group within its owning [`ParserSpec`].
///
/// Groups are matched by identity, never by title; several groups on one
/// parser may share a display title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(usize);

/// What a declared argument does with the values it receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Store the supplied value.
    Store,
    /// Store `true` when the flag is present.
    StoreTrue,
    /// Store `false` when the flag is present.
    StoreFalse,
    /// Append a fixed constant to a list when the flag is present.
    AppendConst,
    /// Accumulate every supplied value into a list.
    Append,
}

/// Declared value converter of an argument, when one is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueParser {
    /// Integral values.
    Int,
    /// Floating-point values.
    Float,
    /// Boolean-like values.
    Bool,
}

/// Declared default of an argument.
///
/// `Suppress` is the parser's own "not user-settable" marker; the
/// introspector excludes such actions before extraction is attempted.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ActionDefault {
    /// No default declared.
    #[default]
    Unset,
    /// Excluded from introspection entirely.
    Suppress,
    /// A concrete default value.
    Value(Value),
}

/// One declared argument of a [`ParserSpec`].
#[derive(Debug, Clone, PartialEq)]
pub struct ActionDescriptor {
    /// Destination identifier; `None` marks the action suppressed.
    pub dest: Option<String>,
    /// Option strings (`-a`, `--all`); empty for positional arguments.
    pub option_strings: Vec<String>,
    /// What the argument does with supplied values.
    pub kind: ActionKind,
    /// Declared value converter, if any.
    pub value_parser: Option<ValueParser>,
    /// Explicit required flag; `None` means "infer from shape".
    pub required: Option<bool>,
    /// Declared default.
    pub default: ActionDefault,
    /// Help text.
    pub help: Option<String>,
    /// Fixed set of permissible values, if constrained.
    pub choices: Option<Vec<String>>,
    /// Membership in zero or one group of the owning parser.
    pub group: Option<GroupId>,
}

impl ActionDescriptor {
    /// A plain `Store` action with the given destination and nothing else
    /// declared.
    pub fn new(dest: impl Into<String>) -> Self {
        Self {
            dest: Some(dest.into()),
            option_strings: Vec::new(),
            kind: ActionKind::Store,
            value_parser: None,
            required: None,
            default: ActionDefault::Unset,
            help: None,
            choices: None,
            group: None,
        }
    }

    /// An action with a suppressed destination, excluded from output.
    pub fn suppressed() -> Self {
        Self {
            dest: None,
            option_strings: Vec::new(),
            kind: ActionKind::Store,
            value_parser: None,
            required: None,
            default: ActionDefault::Unset,
            help: None,
            choices: None,
            group: None,
        }
    }

    /// Add an option string such as `--all` or `-a`.
    pub fn with_option(mut self, option: impl Into<String>) -> Self {
        self.option_strings.push(option.into());
        self
    }

    /// Set the action kind.
    pub fn with_kind(mut self, kind: ActionKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the declared value converter.
    pub fn with_value_parser(mut self, value_parser: ValueParser) -> Self {
        self.value_parser = Some(value_parser);
        self
    }

    /// Set the explicit required flag.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    /// Set a concrete default value.
    pub fn with_default(mut self, default: Value) -> Self {
        self.default = ActionDefault::Value(default);
        self
    }

    /// Mark the default suppressed, excluding the action from output.
    pub fn with_suppressed_default(mut self) -> Self {
        self.default = ActionDefault::Suppress;
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Constrain values to a fixed choice set.
    pub fn with_choices<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.choices = Some(choices.into_iter().map(Into::into).collect());
        self
    }

    /// Place the action in a group of the owning parser.
    pub fn in_group(mut self, group: GroupId) -> Self {
        self.group = Some(group);
        self
    }

    /// Whether the action is positional (exposes no option strings).
    pub fn is_positional(&self) -> bool {
        self.option_strings.is_empty()
    }
}

/// A named collection of actions: a plain group or a mutually-exclusive one.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupDescriptor {
    /// Display title; not unique across groups.
    pub title: String,
    /// When set, at most one member is expected on an invocation.
    pub mutually_exclusive: bool,
}

/// The full declarative description of one command's parser.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserSpec {
    prog: String,
    actions: Vec<ActionDescriptor>,
    groups: Vec<GroupDescriptor>,
}

impl ParserSpec {
    /// An empty parser for the given program context label.
    pub fn new(prog: impl Into<String>) -> Self {
        Self {
            prog: prog.into(),
            actions: Vec::new(),
            groups: Vec::new(),
        }
    }

    /// The program context label the parser was built for.
    pub fn prog(&self) -> &str {
        &self.prog
    }

    /// Declare a plain named group and return its identity.
    pub fn add_group(&mut self, title: impl Into<String>) -> GroupId {
        self.insert_group(title.into(), false)
    }

    /// Declare a mutually-exclusive group and return its identity.
    pub fn add_exclusive_group(&mut self, title: impl Into<String>) -> GroupId {
        self.insert_group(title.into(), true)
    }

    fn insert_group(&mut self, title: String, mutually_exclusive: bool) -> GroupId {
        self.groups.push(GroupDescriptor {
            title,
            mutually_exclusive,
        });
        GroupId(self.groups.len() - 1)
    }

    /// Declare an argument.
    pub fn push(&mut self, action: ActionDescriptor) {
        self.actions.push(action);
    }

    /// All declared arguments, in declaration order.
    pub fn actions(&self) -> &[ActionDescriptor] {
        &self.actions
    }

    /// All declared groups with their identities, in declaration order.
    pub fn groups(&self) -> impl Iterator<Item = (GroupId, &GroupDescriptor)> {
        self.groups
            .iter()
            .enumerate()
            .map(|(index, group)| (GroupId(index), group))
    }

    /// Look up a group by identity.
    pub fn group(&self, id: GroupId) -> Option<&GroupDescriptor> {
        self.groups.get(id.0)
    }
}
