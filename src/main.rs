use std::process::ExitCode;

use commandant::ui::output;

fn main() -> ExitCode {
    match commandant::cli::run() {
        Ok(code) => code,
        Err(err) => {
            output::error(format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}
