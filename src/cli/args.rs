//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Flags
//!
//! Process-level flags must come before the command:
//! - `--config <path>`: Load configuration from this file
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: No prompt or exit banner in interactive sessions
//! - `--no-interactive`: Refuse to start an interactive session
//!
//! Everything from the first positional token on is handed to the dispatcher
//! untouched, including tokens that look like flags.

use clap::Parser;
use std::path::PathBuf;

/// Commandant - a line-oriented command shell
#[derive(Parser, Debug)]
#[command(name = "commandant")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Load configuration from this file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Hide the prompt and exit banner in interactive sessions
    #[arg(short, long)]
    pub quiet: bool,

    /// Do not start an interactive session when no command is given
    #[arg(long)]
    pub no_interactive: bool,

    /// Command to run once, followed by its arguments and flags
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_command_means_interactive() {
        let cli = Cli::try_parse_from(["commandant"]).unwrap();
        assert!(cli.command.is_empty());
        assert!(!cli.no_interactive);
    }

    #[test]
    fn command_tokens_pass_through() {
        let cli =
            Cli::try_parse_from(["commandant", "--debug", "help", "-c", "exit"]).unwrap();
        assert!(cli.debug);
        assert_eq!(cli.command, vec!["help", "-c", "exit"]);
    }

    #[test]
    fn flags_after_command_are_not_ours() {
        let cli = Cli::try_parse_from(["commandant", "echo", "hi", "--quiet"]).unwrap();
        assert!(!cli.quiet);
        assert_eq!(cli.command, vec!["echo", "hi", "--quiet"]);
    }

    #[test]
    fn config_path() {
        let cli =
            Cli::try_parse_from(["commandant", "--config", "/tmp/c.toml", "-q"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
        assert!(cli.quiet);
    }
}
