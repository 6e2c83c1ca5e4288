//! core::schema
//!
//! Command schemas: the declared shape of a command and its handler.
//!
//! # Types
//!
//! - [`ArgumentSpec`] - A required positional argument
//! - [`FlagSpec`] - A short/long flag, either presence-only or value-bearing
//! - [`CommandSpec`] - Name, description, arguments, flags and handler
//! - [`Invocation`] - What a handler receives: parsed input plus a catalog view
//! - [`Catalog`] - Read-only view of the registered commands
//!
//! # Validation
//!
//! Specs are assembled freely with the builder methods and checked as a whole by
//! [`CommandSpec::validate`], which registration always calls. A spec that
//! fails validation is never registered.
//!
//! # Example
//!
//! ```
//! use commandant::core::schema::{ArgumentSpec, CommandSpec, FlagSpec};
//! use commandant::core::value::ValueType;
//!
//! let spec = CommandSpec::new("greet", "Greet someone by name.")
//!     .argument(ArgumentSpec::new("name", "Who to greet", 0, ValueType::String))
//!     .flag(FlagSpec::presence("loud", "Shout the greeting", 'l', "loud"))
//!     .handler(|inv, out| {
//!         let name: String = inv.input().argument("name")?;
//!         out.write(&format!("Hello, {}!", name))
//!     });
//!
//! assert!(spec.validate().is_ok());
//! assert_eq!(spec.usage(), "Usage: > greet <name> [options]");
//! ```

use std::collections::HashSet;
use std::fmt;

use super::errors::DispatchError;
use super::parse::ParsedInput;
use super::sink::OutputSink;
use super::value::{FlagKind, ValueType};

/// Prefix of a short flag token (`-c`).
pub const SHORT_FLAG_PREFIX: &str = "-";

/// Prefix of a long flag token (`--command`).
pub const LONG_FLAG_PREFIX: &str = "--";

/// A required positional argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentSpec {
    label: String,
    description: String,
    position: usize,
    value_type: ValueType,
}

impl ArgumentSpec {
    /// Declare an argument read from `position` (0-based, after the command name).
    pub fn new(
        label: impl Into<String>,
        description: impl Into<String>,
        position: usize,
        value_type: ValueType,
    ) -> Self {
        Self {
            label: label.into(),
            description: description.into(),
            position,
            value_type,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }
}

/// A flag matched by `-<letter>` or `--<name>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagSpec {
    label: String,
    description: String,
    letter: char,
    name: String,
    kind: FlagKind,
}

impl FlagSpec {
    pub fn new(
        label: impl Into<String>,
        description: impl Into<String>,
        letter: char,
        name: impl Into<String>,
        kind: FlagKind,
    ) -> Self {
        Self {
            label: label.into(),
            description: description.into(),
            letter,
            name: name.into(),
            kind,
        }
    }

    /// Declare a flag whose presence records `true`.
    pub fn presence(
        label: impl Into<String>,
        description: impl Into<String>,
        letter: char,
        name: impl Into<String>,
    ) -> Self {
        Self::new(label, description, letter, name, FlagKind::Presence)
    }

    /// Declare a flag that consumes the following token.
    pub fn valued(
        label: impl Into<String>,
        description: impl Into<String>,
        letter: char,
        name: impl Into<String>,
        value_type: ValueType,
    ) -> Self {
        Self::new(label, description, letter, name, FlagKind::Valued(value_type))
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FlagKind {
        self.kind
    }

    /// The short token form, e.g. `-c`.
    pub fn short_token(&self) -> String {
        format!("{}{}", SHORT_FLAG_PREFIX, self.letter)
    }

    /// The long token form, e.g. `--command`.
    pub fn long_token(&self) -> String {
        format!("{}{}", LONG_FLAG_PREFIX, self.name)
    }
}

/// Read-only view of registered commands, available to handlers.
pub trait Catalog {
    /// Look up a command by name, ignoring case.
    fn command(&self, name: &str) -> Option<&CommandSpec>;

    /// Names of all registered commands, in no particular order.
    fn command_names(&self) -> Vec<&str>;
}

/// Input handed to a command handler.
pub struct Invocation<'a> {
    input: ParsedInput,
    catalog: &'a dyn Catalog,
}

impl<'a> Invocation<'a> {
    pub fn new(input: ParsedInput, catalog: &'a dyn Catalog) -> Self {
        Self { input, catalog }
    }

    /// The parsed arguments and flags.
    pub fn input(&self) -> &ParsedInput {
        &self.input
    }

    /// The commands registered alongside this one.
    pub fn catalog(&self) -> &'a dyn Catalog {
        self.catalog
    }
}

/// Boxed command handler.
pub type Handler = Box<
    dyn Fn(&Invocation<'_>, &mut dyn OutputSink) -> Result<(), DispatchError> + Send + Sync,
>;

/// A command: name, description, declared inputs and handler.
pub struct CommandSpec {
    name: String,
    description: String,
    arguments: Vec<ArgumentSpec>,
    flags: Vec<FlagSpec>,
    handler: Option<Handler>,
}

impl CommandSpec {
    /// Start a spec with no arguments, flags or handler.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            arguments: Vec::new(),
            flags: Vec::new(),
            handler: None,
        }
    }

    /// Add a positional argument.
    pub fn argument(mut self, argument: ArgumentSpec) -> Self {
        self.arguments.push(argument);
        self
    }

    /// Add a flag.
    pub fn flag(mut self, flag: FlagSpec) -> Self {
        self.flags.push(flag);
        self
    }

    /// Set the handler.
    pub fn handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&Invocation<'_>, &mut dyn OutputSink) -> Result<(), DispatchError>
            + Send
            + Sync
            + 'static,
    {
        self.handler = Some(Box::new(handler));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn arguments(&self) -> &[ArgumentSpec] {
        &self.arguments
    }

    pub fn flags(&self) -> &[FlagSpec] {
        &self.flags
    }

    pub(crate) fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Check the spec's invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Setup`] naming the first violated rule.
    pub fn validate(&self) -> Result<(), DispatchError> {
        let name = &self.name;
        if name.is_empty() {
            return Err(DispatchError::setup("command name cannot be empty"));
        }
        if name.chars().count() < 2 {
            return Err(DispatchError::setup(format!(
                "Command name {} is invalid, needs to be at least 2 characters long!",
                name
            )));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(DispatchError::setup(format!(
                "Command name '{}' is invalid, cannot contain whitespace!",
                name
            )));
        }
        if self.description.split_whitespace().count() < 2 {
            return Err(DispatchError::setup(format!(
                "Command {} is invalid, needs to have at least 2 words in its description: {}!",
                name, self.description
            )));
        }
        if self.handler.is_none() {
            return Err(DispatchError::setup(format!(
                "Command {} is not properly set up, needs to have a handler!",
                name
            )));
        }

        self.validate_arguments()?;
        self.validate_flags()
    }

    fn validate_arguments(&self) -> Result<(), DispatchError> {
        let mut labels = HashSet::new();
        let mut positions = HashSet::new();
        for arg in &self.arguments {
            if !labels.insert(arg.label()) {
                return Err(DispatchError::setup(format!(
                    "Argument {} for command {} already exists!",
                    arg.label(),
                    self.name
                )));
            }
            if !positions.insert(arg.position()) {
                return Err(DispatchError::setup(format!(
                    "Argument position {} for command {} is declared twice!",
                    arg.position(),
                    self.name
                )));
            }
            // Unique positions below the count cover 0..n exactly.
            if arg.position() >= self.arguments.len() {
                return Err(DispatchError::setup(format!(
                    "Argument {} for command {} has position {} but only {} arguments are declared!",
                    arg.label(),
                    self.name,
                    arg.position(),
                    self.arguments.len()
                )));
            }
        }
        Ok(())
    }

    fn validate_flags(&self) -> Result<(), DispatchError> {
        let mut labels = HashSet::new();
        let mut letters = HashSet::new();
        let mut names = HashSet::new();
        for flag in &self.flags {
            if flag.letter() == '-'
                || flag.letter().is_whitespace()
                || flag.name().is_empty()
                || flag.name().starts_with('-')
                || flag.name().chars().any(char::is_whitespace)
            {
                return Err(DispatchError::setup(format!(
                    "Flag {} for command {} has an invalid letter or name!",
                    flag.label(),
                    self.name
                )));
            }
            if !labels.insert(flag.label()) {
                return Err(DispatchError::setup(format!(
                    "Flag {} for command {} already exists!",
                    flag.label(),
                    self.name
                )));
            }
            if !letters.insert(flag.letter()) {
                return Err(DispatchError::setup(format!(
                    "Flag letter {} for command {} is already used!",
                    flag.short_token(),
                    self.name
                )));
            }
            if !names.insert(flag.name()) {
                return Err(DispatchError::setup(format!(
                    "Flag name {} for command {} is already used!",
                    flag.long_token(),
                    self.name
                )));
            }
        }
        Ok(())
    }

    /// Invoke the handler.
    pub fn handle(
        &self,
        invocation: &Invocation<'_>,
        out: &mut dyn OutputSink,
    ) -> Result<(), DispatchError> {
        match &self.handler {
            Some(handler) => handler(invocation, out),
            None => Err(DispatchError::setup(format!(
                "Command {} is not properly set up, needs to have a handler!",
                self.name
            ))),
        }
    }

    /// One-line usage, e.g. `Usage: > greet <name> [options]`.
    pub fn usage(&self) -> String {
        let mut usage = format!("Usage: > {}", self.name);
        let mut arguments: Vec<&ArgumentSpec> = self.arguments.iter().collect();
        arguments.sort_by_key(|a| a.position());
        for arg in arguments {
            usage.push_str(&format!(" <{}>", arg.label()));
        }
        if !self.flags.is_empty() {
            usage.push_str(" [options]");
        }
        usage
    }

    /// Description followed by the bracketed usage.
    pub fn summary(&self) -> String {
        format!("{} [{}]", self.description, self.usage())
    }

    /// The line shown for this command in a command listing.
    pub fn help_line(&self) -> String {
        format!("\t- {:<15} {}\n", format!("{}:", self.name), self.summary())
    }

    /// Full help: the listing line plus one line per flag.
    pub fn help(&self) -> String {
        let mut help = self.help_line();
        for flag in &self.flags {
            let placeholder = match flag.kind() {
                FlagKind::Presence => String::new(),
                FlagKind::Valued(ty) => format!(" {}", ty.placeholder()),
            };
            help.push_str(&format!(
                "\t   {} | {}{}:  {}\n",
                flag.short_token(),
                flag.long_token(),
                placeholder,
                flag.description()
            ));
        }
        help
    }
}

impl fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandSpec")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("arguments", &self.arguments)
            .field("flags", &self.flags)
            .field("has_handler", &self.handler.is_some())
            .finish()
    }
}
