//! cli
//!
//! Command-line layer: the dispatch loop and the binary's glue.
//!
//! # Responsibilities
//!
//! - Parse process flags and hand the remaining argv to the shell
//! - Load configuration and install logging
//! - Own the [`Shell`], the composition root for a registry
//!
//! # Architecture
//!
//! The CLI layer is thin. All parsing of command input and all handler calls
//! happen in [`crate::engine::Registry`]; this layer only decides where lines
//! come from and where output goes.

pub mod args;
pub mod commands;
pub mod shell;

pub use args::Cli;
pub use shell::{Outcome, Shell};

use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::core::config::Config;
use crate::core::sink::WriterSink;
use crate::ui::output::{self, Verbosity};

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse_args();
    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);
    init_logging(cli.debug, verbosity);

    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    match config.loaded_from() {
        Some(path) => output::debug(format!("config: {}", path.display()), verbosity),
        None => output::debug("config: defaults", verbosity),
    }

    let mut shell = Shell::from_config(&config).context("failed to set up shell")?;
    shell
        .set_version(env!("CARGO_PKG_VERSION"))
        .context("failed to set version")?;
    shell
        .add_command(commands::echo_command())
        .context("failed to register commands")?;
    shell.set_show_prompt(verbosity.shows_prompt());
    if cli.no_interactive {
        shell.set_interactive(false);
    }

    let stdin = std::io::stdin();
    let mut out = WriterSink::stdout();
    let outcome = shell.run(&cli.command, stdin.lock(), &mut out)?;

    Ok(match outcome {
        Outcome::Completed => ExitCode::SUCCESS,
        Outcome::Failed => ExitCode::FAILURE,
    })
}

/// Install a stderr subscriber when `--debug` or `RUST_LOG` asks for one.
fn init_logging(debug: bool, verbosity: Verbosity) {
    let filter = if debug {
        EnvFilter::new("commandant=debug")
    } else {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => return,
        }
    };

    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        output::debug(format!("logging not installed: {}", err), verbosity);
    }
}
