//! engine::registry
//!
//! The command table and the single dispatch entry point.
//!
//! # Lifecycle
//!
//! ```text
//! tokens -> lookup(tokens[0]) -> parse(tokens[1..]) -> handler(invocation, sink)
//! ```
//!
//! # Invariants
//!
//! - Only specs that pass [`CommandSpec::validate`] are stored
//! - Names are stored lower-cased; lookup ignores case
//! - Registering an existing name replaces the previous command
//! - Handler errors are returned unchanged
//!
//! # Example
//!
//! ```
//! use commandant::core::schema::CommandSpec;
//! use commandant::core::sink::BufferSink;
//! use commandant::engine::Registry;
//!
//! let mut registry = Registry::new();
//! registry
//!     .register("ping", CommandSpec::new("ping", "Reply with pong.").handler(|_, out| out.write("pong")))
//!     .unwrap();
//!
//! let mut out = BufferSink::new();
//! registry.run(&["PING"], &mut out).unwrap();
//! assert_eq!(out.contents(), "pong");
//! ```

use std::collections::HashMap;

use crate::core::errors::DispatchError;
use crate::core::schema::{Catalog, CommandSpec, Invocation};
use crate::core::sink::OutputSink;
use crate::core::tokenize::tokenize;

/// Registered commands keyed by lower-cased name.
///
/// Not synchronized; callers sharing a registry across threads must wrap it
/// in a lock.
#[derive(Debug, Default)]
pub struct Registry {
    commands: HashMap<String, CommandSpec>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `spec` under `name`.
    ///
    /// The spec takes `name` as its own name before validation.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Setup`] if the spec is invalid; nothing is
    /// registered in that case.
    pub fn register(&mut self, name: &str, mut spec: CommandSpec) -> Result<(), DispatchError> {
        spec.set_name(name);
        spec.validate()?;

        let key = name.to_lowercase();
        if self.commands.insert(key.clone(), spec).is_some() {
            tracing::debug!(command = %key, "replaced existing command");
        } else {
            tracing::debug!(command = %key, "registered command");
        }
        Ok(())
    }

    /// Register a spec under its own name.
    pub fn add(&mut self, spec: CommandSpec) -> Result<(), DispatchError> {
        let name = spec.name().to_string();
        self.register(&name, spec)
    }

    /// Find a command, ignoring case.
    pub fn lookup(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.get(&name.to_lowercase())
    }

    /// Names of all registered commands. Order is unspecified.
    pub fn enumerate(&self) -> Vec<&str> {
        self.commands.keys().map(String::as_str).collect()
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands are registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Dispatch a token sequence whose first token is the command name.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::InvalidCommand`] if `tokens` is empty or the name is
    ///   not registered
    /// - Parse errors from [`CommandSpec::parse`]
    /// - Whatever the handler returns
    pub fn run<S: AsRef<str>>(
        &self,
        tokens: &[S],
        out: &mut dyn OutputSink,
    ) -> Result<(), DispatchError> {
        let Some((first, rest)) = tokens.split_first() else {
            return Err(DispatchError::invalid_command(""));
        };

        let name = first.as_ref().to_lowercase();
        let spec = self
            .commands
            .get(&name)
            .ok_or_else(|| DispatchError::invalid_command(name.clone()))?;

        let input = spec.parse(rest)?;
        tracing::debug!(command = %name, "dispatching");
        spec.handle(&Invocation::new(input, self), out)
    }

    /// Tokenize a raw line and dispatch it.
    pub fn run_line(&self, line: &str, out: &mut dyn OutputSink) -> Result<(), DispatchError> {
        self.run(&tokenize(line), out)
    }
}

impl Catalog for Registry {
    fn command(&self, name: &str) -> Option<&CommandSpec> {
        self.lookup(name)
    }

    fn command_names(&self) -> Vec<&str> {
        self.enumerate()
    }
}
