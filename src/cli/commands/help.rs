//! help command - List commands or describe one

use crate::core::schema::{CommandSpec, FlagSpec};
use crate::core::value::ValueType;

/// Label of the `--command` / `-c` flag.
const COMMAND_FLAG: &str = "command";

/// Build the `help` command.
///
/// Without flags it writes `banner` (if any) and one line per registered
/// command, sorted by name. With `--command <name>` it writes that command's
/// full help under a `Command description:` header, or a notice if the
/// command is unknown.
pub fn help_command(banner: Option<String>) -> CommandSpec {
    CommandSpec::new("help", "Display help information for commands.")
        .flag(FlagSpec::valued(
            COMMAND_FLAG,
            "Name of the command to get detailed help for",
            'c',
            "command",
            ValueType::String,
        ))
        .handler(move |inv, out| {
            let catalog = inv.catalog();

            if let Some(name) = inv.input().flag::<String>(COMMAND_FLAG)? {
                return match catalog.command(&name) {
                    Some(spec) => out.write(&format!("Command description:\n{}", spec.help())),
                    None => out.write(&format!("No help available for command: {}\n", name)),
                };
            }

            let mut names = catalog.command_names();
            names.sort_unstable();

            let mut text = String::new();
            if let Some(banner) = &banner {
                text.push_str(banner);
                text.push('\n');
            }
            for spec in names.into_iter().filter_map(|n| catalog.command(n)) {
                text.push_str(&spec.help_line());
            }
            out.write(&text)
        })
}
