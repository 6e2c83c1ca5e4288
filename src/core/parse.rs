//! core::parse
//!
//! Matching tokens against a [`CommandSpec`].
//!
//! # Algorithm
//!
//! 1. Fewer tokens than declared arguments is a usage error
//! 2. Positional values are read from the untouched token slice by position,
//!    then the consumed indices are removed together
//! 3. Each flag is looked up by `-<letter>`, then `--<name>`; value-bearing
//!    flags consume the following token as well
//! 4. Leftovers are an unrecognized flag if the first starts with `-`, or a
//!    usage error otherwise
//!
//! Parsing is pure; nothing is written anywhere.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use super::errors::DispatchError;
use super::schema::{CommandSpec, SHORT_FLAG_PREFIX};
use super::value::{coerce, FlagKind, FromValue, Value};

/// Arguments and flags extracted from one invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParsedInput {
    arguments: HashMap<String, Value>,
    flags: HashMap<String, Value>,
}

impl ParsedInput {
    /// All positional values by label.
    pub fn arguments(&self) -> &HashMap<String, Value> {
        &self.arguments
    }

    /// All flags that were given, by label. Presence flags hold `true`.
    pub fn flags(&self) -> &HashMap<String, Value> {
        &self.flags
    }

    /// Typed positional value.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Command`] if the label is unknown or the value
    /// has a different type.
    pub fn argument<T: FromValue>(&self, label: &str) -> Result<T, DispatchError> {
        self.arguments
            .get(label)
            .and_then(|v| T::from_value(v).ok())
            .ok_or_else(|| DispatchError::command(format!("Invalid type for argument: {}", label)))
    }

    /// Typed flag value, `None` if the flag was not given.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Command`] if the flag was given with a value of
    /// a different type.
    pub fn flag<T: FromValue>(&self, label: &str) -> Result<Option<T>, DispatchError> {
        match self.flags.get(label) {
            None => Ok(None),
            Some(v) => T::from_value(v).map(Some).map_err(|_| {
                DispatchError::command(format!("Invalid type for flag: {}", label))
            }),
        }
    }

    /// Check if a flag was given.
    pub fn is_set(&self, label: &str) -> bool {
        self.flags.contains_key(label)
    }
}

impl CommandSpec {
    /// Match tokens (everything after the command name) against this spec.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::Usage`] on a token-count mismatch, a coercion
    ///   failure or a value-bearing flag without its value
    /// - [`DispatchError::UnrecognizedFlag`] when an undeclared flag is left over
    pub fn parse<S: AsRef<str>>(&self, tokens: &[S]) -> Result<ParsedInput, DispatchError> {
        let arguments = self.arguments();
        if tokens.len() < arguments.len() {
            return Err(self.usage_error());
        }

        let mut input = ParsedInput::default();
        let mut consumed = BTreeSet::new();
        for arg in arguments {
            let raw = tokens
                .get(arg.position())
                .ok_or_else(|| self.usage_error())?
                .as_ref();
            let value = coerce(arg.value_type(), raw).map_err(|_| self.usage_error())?;
            input.arguments.insert(arg.label().to_string(), value);
            consumed.insert(arg.position());
        }

        let mut remaining: Vec<&str> = tokens
            .iter()
            .enumerate()
            .filter(|(i, _)| !consumed.contains(i))
            .map(|(_, t)| t.as_ref())
            .collect();

        for flag in self.flags() {
            let short = flag.short_token();
            let long = flag.long_token();
            let index = remaining
                .iter()
                .position(|t| *t == short)
                .or_else(|| remaining.iter().position(|t| *t == long));
            let Some(index) = index else {
                continue;
            };

            match flag.kind() {
                FlagKind::Presence => {
                    input.flags.insert(flag.label().to_string(), Value::Bool(true));
                    remaining.remove(index);
                }
                FlagKind::Valued(_) => {
                    let raw = remaining.get(index + 1).ok_or_else(|| self.usage_error())?;
                    let value = flag.kind().coerce(raw).map_err(|_| self.usage_error())?;
                    input.flags.insert(flag.label().to_string(), value);
                    remaining.drain(index..index + 2);
                }
            }
        }

        if let Some(first) = remaining.first() {
            if first.starts_with(SHORT_FLAG_PREFIX) {
                return Err(DispatchError::UnrecognizedFlag {
                    command: self.name().to_string(),
                    flag: first.to_string(),
                });
            }
            return Err(self.usage_error());
        }

        tracing::trace!(command = self.name(), ?input, "parsed input");
        Ok(input)
    }

    fn usage_error(&self) -> DispatchError {
        DispatchError::Usage {
            command: self.name().to_string(),
            help: self.summary(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::schema::{ArgumentSpec, FlagSpec};
    use crate::core::value::ValueType;

    fn greet() -> CommandSpec {
        CommandSpec::new("greet", "Greet someone by name.")
            .argument(ArgumentSpec::new("name", "Who to greet", 0, ValueType::String))
            .flag(FlagSpec::presence("loud", "Shout", 'l', "loud"))
            .handler(|_, _| Ok(()))
    }

    fn range() -> CommandSpec {
        CommandSpec::new("range", "Print a numeric range.")
            .argument(ArgumentSpec::new("start", "First value", 0, ValueType::Int))
            .argument(ArgumentSpec::new("end", "Last value", 1, ValueType::Int))
            .argument(ArgumentSpec::new("label", "Caption", 2, ValueType::String))
            .flag(FlagSpec::valued("step", "Increment", 's', "step", ValueType::Float))
            .flag(FlagSpec::presence("reverse", "Count down", 'r', "reverse"))
            .handler(|_, _| Ok(()))
    }

    #[test]
    fn parses_argument_and_presence_flag() {
        let input = greet().parse(&["world", "-l"]).unwrap();
        assert_eq!(input.arguments()["name"], Value::Str("world".into()));
        assert_eq!(input.flags()["loud"], Value::Bool(true));
        assert!(input.is_set("loud"));
    }

    #[test]
    fn long_flag_form() {
        let input = greet().parse(&["world", "--loud"]).unwrap();
        assert_eq!(input.flag::<bool>("loud").unwrap(), Some(true));
    }

    #[test]
    fn absent_flag_is_none() {
        let input = greet().parse(&["world"]).unwrap();
        assert!(!input.is_set("loud"));
        assert_eq!(input.flag::<bool>("loud").unwrap(), None);
    }

    #[test]
    fn too_few_tokens_is_usage_error() {
        let err = greet().parse::<&str>(&[]).unwrap_err();
        assert!(matches!(err, DispatchError::Usage { ref command, .. } if command == "greet"));
    }

    #[test]
    fn leftover_flag_is_unrecognized() {
        let err = greet().parse(&["world", "-x"]).unwrap_err();
        match err {
            DispatchError::UnrecognizedFlag { command, flag } => {
                assert_eq!(command, "greet");
                assert_eq!(flag, "-x");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn leftover_positional_is_usage_error() {
        let err = greet().parse(&["world", "extra"]).unwrap_err();
        assert!(matches!(err, DispatchError::Usage { .. }));
    }

    #[test]
    fn multiple_positions_do_not_drift() {
        let input = range()
            .parse(&["1", "10", "digits", "-s", "0.5", "--reverse"])
            .unwrap();
        assert_eq!(input.argument::<i64>("start").unwrap(), 1);
        assert_eq!(input.argument::<i64>("end").unwrap(), 10);
        assert_eq!(input.argument::<String>("label").unwrap(), "digits");
        assert_eq!(input.flag::<f64>("step").unwrap(), Some(0.5));
        assert!(input.is_set("reverse"));
    }

    #[test]
    fn flags_may_appear_in_any_order_after_arguments() {
        let input = range().parse(&["3", "4", "x", "-r", "--step", "2"]).unwrap();
        assert_eq!(input.flag::<f64>("step").unwrap(), Some(2.0));
        assert!(input.is_set("reverse"));
    }

    #[test]
    fn coercion_failure_is_usage_error() {
        let err = range().parse(&["one", "10", "x"]).unwrap_err();
        assert!(matches!(err, DispatchError::Usage { .. }));

        let err = range().parse(&["1", "10", "x", "-s", "fast"]).unwrap_err();
        assert!(matches!(err, DispatchError::Usage { .. }));
    }

    #[test]
    fn valued_flag_without_value_is_usage_error() {
        let err = range().parse(&["1", "2", "x", "--step"]).unwrap_err();
        assert!(matches!(err, DispatchError::Usage { .. }));
    }

    #[test]
    fn usage_error_carries_summary() {
        let err = greet().parse::<&str>(&[]).unwrap_err();
        assert_eq!(
            err.user_message(),
            "Invalid usage of command: greet\n\n> greet: Greet someone by name. [Usage: > greet <name> [options]]"
        );
    }

    #[test]
    fn typed_access_reports_label() {
        let input = greet().parse(&["world"]).unwrap();
        let err = input.argument::<i64>("name").unwrap_err();
        assert_eq!(err.user_message(), "Invalid type for argument: name");

        let err = input.argument::<String>("missing").unwrap_err();
        assert_eq!(err.user_message(), "Invalid type for argument: missing");
    }

    #[test]
    fn serializes_to_json() {
        let input = greet().parse(&["world", "-l"]).unwrap();
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["arguments"]["name"], "world");
        assert_eq!(json["flags"]["loud"], true);
    }
}
