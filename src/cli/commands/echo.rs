//! echo command - Write text back, the binary's sample command

use crate::core::errors::DispatchError;
use crate::core::schema::{ArgumentSpec, CommandSpec, FlagSpec};
use crate::core::value::ValueType;

/// Upper bound for `--repeat`.
pub const MAX_REPEAT: i64 = 1000;

/// Build the `echo` command.
pub fn echo_command() -> CommandSpec {
    CommandSpec::new("echo", "Write text back to the output.")
        .argument(ArgumentSpec::new(
            "text",
            "Text to write",
            0,
            ValueType::String,
        ))
        .flag(FlagSpec::presence(
            "upper",
            "Convert the text to upper case",
            'u',
            "upper",
        ))
        .flag(FlagSpec::valued(
            "repeat",
            "Number of times to write the text",
            'r',
            "repeat",
            ValueType::Int,
        ))
        .handler(|inv, out| {
            let input = inv.input();
            let mut text: String = input.argument("text")?;
            if input.is_set("upper") {
                text = text.to_uppercase();
            }

            let repeat = input.flag::<i64>("repeat")?.unwrap_or(1);
            if repeat < 1 {
                return Err(DispatchError::command(format!(
                    "repeat must be at least 1, got {}",
                    repeat
                )));
            }
            if repeat > MAX_REPEAT {
                return Err(DispatchError::command(format!(
                    "repeat must be at most {}, got {}",
                    MAX_REPEAT, repeat
                )));
            }

            out.write(&vec![text; repeat as usize].join(" "))
        })
}
