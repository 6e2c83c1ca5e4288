//! Integration tests for the `commandant` binary.
//!
//! Each test runs the binary with `HOME` and `XDG_CONFIG_HOME` pointed at a
//! temporary directory so no user configuration leaks in.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A binary invocation isolated from the user's configuration.
struct Isolated {
    home: TempDir,
}

impl Isolated {
    fn new() -> Self {
        Self {
            home: TempDir::new().expect("failed to create temp dir"),
        }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("commandant").expect("binary exists");
        cmd.env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.home.path().join("xdg"))
            .env_remove("COMMANDANT_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }
}

#[test]
fn version_one_shot() {
    Isolated::new()
        .cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(format!("v{}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn echo_with_flags() {
    Isolated::new()
        .cmd()
        .args(["echo", "hi there", "--upper", "-r", "2"])
        .assert()
        .success()
        .stdout("HI THERE HI THERE\n");
}

#[test]
fn unknown_command_fails_with_message() {
    Isolated::new()
        .cmd()
        .arg("Nope")
        .assert()
        .failure()
        .stdout("Invalid command: nope\n");
}

#[test]
fn unrecognized_flag_is_named() {
    Isolated::new()
        .cmd()
        .args(["echo", "hi", "-x"])
        .assert()
        .failure()
        .stdout("Unrecognized flag -x for command echo\n");
}

#[test]
fn help_for_unknown_command_succeeds() {
    Isolated::new()
        .cmd()
        .args(["help", "--command", "bogus"])
        .assert()
        .success()
        .stdout("No help available for command: bogus\n\n");
}

#[test]
fn help_lists_builtins() {
    Isolated::new()
        .cmd()
        .arg("help")
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("List of commands:\n")
                .and(predicate::str::contains("\t- echo:"))
                .and(predicate::str::contains("\t- exit:"))
                .and(predicate::str::contains("\t- help:"))
                .and(predicate::str::contains("\t- version:")),
        );
}

#[test]
fn exit_one_shot_prints_nothing() {
    Isolated::new()
        .cmd()
        .arg("exit")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn interactive_session_until_exit() {
    Isolated::new()
        .cmd()
        .write_stdin("echo one\n\nbogus\nexit\necho never\n")
        .assert()
        .success()
        .stdout("commandant> one\ncommandant> commandant> Invalid command: bogus\ncommandant> ");
}

#[test]
fn interactive_session_until_eof() {
    Isolated::new()
        .cmd()
        .arg("--quiet")
        .write_stdin("version\n")
        .assert()
        .success()
        .stdout(format!("v{}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_interactive_refuses_session() {
    Isolated::new()
        .cmd()
        .arg("--no-interactive")
        .write_stdin("version\n")
        .assert()
        .success()
        .stdout("Interactive shell is disabled!\n");
}

#[test]
fn config_file_sets_prompt() {
    let env = Isolated::new();
    let path = env.home.path().join("shell.toml");
    std::fs::write(&path, "name = \"inv\"\nprompt = \"$\"\n").unwrap();

    env.cmd()
        .arg("--config")
        .arg(&path)
        .write_stdin("")
        .assert()
        .success()
        .stdout("inv$ \nExiting...\n");
}

#[test]
fn config_discovered_in_home() {
    let env = Isolated::new();
    let dir = env.home.path().join(".commandant");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "interactive = false\n").unwrap();

    env.cmd()
        .assert()
        .success()
        .stdout("Interactive shell is disabled!\n");
}

#[test]
fn bad_config_is_reported() {
    let env = Isolated::new();
    let path = env.home.path().join("bad.toml");
    std::fs::write(&path, "colour = \"blue\"\n").unwrap();

    env.cmd()
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load configuration"));
}
