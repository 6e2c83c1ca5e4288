//! cli::shell
//!
//! The dispatch loop around a [`Registry`].
//!
//! # Modes
//!
//! - **One-shot**: a full token list (usually process argv) is dispatched once
//! - **Interactive**: lines are read from any [`BufRead`], tokenized and
//!   dispatched until end of input
//!
//! In both modes a failed command writes its user-facing message to the sink
//! and every command is followed by a newline. Diagnostics go to `tracing`.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use commandant::cli::Shell;
//! use commandant::core::sink::BufferSink;
//!
//! let mut shell = Shell::new("demo").unwrap();
//! shell.set_version("1.0.0").unwrap();
//!
//! let mut out = BufferSink::new();
//! shell.run_interactive(Cursor::new("version\n"), &mut out).unwrap();
//! assert_eq!(out.contents(), "demo> v1.0.0\ndemo> \nExiting...\n");
//! ```

use std::io::BufRead;

use super::commands::{exit_command, help_command, version_command};
use crate::core::config::{Config, DEFAULT_BANNER, DEFAULT_PROMPT};
use crate::core::errors::DispatchError;
use crate::core::schema::CommandSpec;
use crate::core::sink::OutputSink;
use crate::core::tokenize::tokenize;
use crate::engine::Registry;

/// Version reported until [`Shell::set_version`] is called.
pub const DEFAULT_VERSION: &str = "0.0.0";

/// How a dispatched command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command ran to completion (or the session ended normally).
    Completed,
    /// The command failed; its message has been written.
    Failed,
}

/// A named command shell owning its registry.
#[derive(Debug)]
pub struct Shell {
    name: String,
    symbol: String,
    interactive: bool,
    show_prompt: bool,
    registry: Registry,
}

impl Shell {
    /// Create a shell with the built-in commands registered.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Setup`] if a built-in command fails validation.
    pub fn new(name: impl Into<String>) -> Result<Self, DispatchError> {
        Self::build(
            name.into(),
            DEFAULT_PROMPT.to_string(),
            Some(DEFAULT_BANNER.to_string()),
            true,
        )
    }

    /// Create a shell from loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self, DispatchError> {
        Self::build(
            config.name().to_string(),
            config.prompt().to_string(),
            Some(config.banner().to_string()),
            config.interactive(),
        )
    }

    fn build(
        name: String,
        symbol: String,
        banner: Option<String>,
        interactive: bool,
    ) -> Result<Self, DispatchError> {
        let mut registry = Registry::new();
        registry.add(exit_command())?;
        registry.add(version_command(DEFAULT_VERSION)?)?;
        registry.add(help_command(banner))?;

        Ok(Self {
            name,
            symbol,
            interactive,
            show_prompt: true,
            registry,
        })
    }

    /// Set the version reported by the `version` command.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Setup`] if `version` is not a semantic version.
    pub fn set_version(&mut self, version: &str) -> Result<&mut Self, DispatchError> {
        self.registry.add(version_command(version)?)?;
        Ok(self)
    }

    /// Allow or forbid interactive sessions.
    pub fn set_interactive(&mut self, interactive: bool) -> &mut Self {
        self.interactive = interactive;
        self
    }

    /// Show or hide the prompt in interactive sessions.
    pub fn set_show_prompt(&mut self, show: bool) -> &mut Self {
        self.show_prompt = show;
        self
    }

    /// Register a command under its own name.
    pub fn add_command(&mut self, spec: CommandSpec) -> Result<&mut Self, DispatchError> {
        self.registry.add(spec)?;
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The interactive prompt, e.g. `demo> `.
    pub fn prompt(&self) -> String {
        format!("{}{} ", self.name, self.symbol)
    }

    /// Dispatch a full token list once.
    pub fn run_once<S: AsRef<str>>(
        &self,
        args: &[S],
        out: &mut dyn OutputSink,
    ) -> Result<Outcome, DispatchError> {
        let outcome = match self.registry.run(args, out) {
            Ok(()) => Outcome::Completed,
            Err(err) => {
                tracing::debug!(error = %err.diagnostic(), "command failed");
                out.write(&err.user_message())?;
                Outcome::Failed
            }
        };
        out.write("\n")?;
        Ok(outcome)
    }

    /// Read, dispatch and report lines until end of input.
    ///
    /// Blank lines are skipped and bytes that are not valid UTF-8 are
    /// replaced. Only sink or read failures end the session early; command
    /// failures are reported and the loop continues.
    pub fn run_interactive<R: BufRead>(
        &self,
        mut input: R,
        out: &mut dyn OutputSink,
    ) -> Result<(), DispatchError> {
        let mut buf = Vec::new();
        loop {
            if self.show_prompt {
                out.write(&self.prompt())?;
            }

            buf.clear();
            let read = input
                .read_until(b'\n', &mut buf)
                .map_err(|e| DispatchError::unexpected("failed to read input", e))?;
            if read == 0 {
                break;
            }

            let line = String::from_utf8_lossy(&buf);
            let tokens = tokenize(&line);
            if tokens.is_empty() {
                continue;
            }
            self.run_once(&tokens, out)?;
        }

        if self.show_prompt {
            out.write("\nExiting...\n")?;
        }
        Ok(())
    }

    /// Run `args` once if given, otherwise start an interactive session.
    pub fn run<S: AsRef<str>, R: BufRead>(
        &self,
        args: &[S],
        input: R,
        out: &mut dyn OutputSink,
    ) -> Result<Outcome, DispatchError> {
        if !args.is_empty() {
            return self.run_once(args, out);
        }
        if !self.interactive {
            out.write("Interactive shell is disabled!\n")?;
            return Ok(Outcome::Completed);
        }
        self.run_interactive(input, out)?;
        Ok(Outcome::Completed)
    }
}
