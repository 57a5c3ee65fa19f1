//! Command-line client shell.

pub mod commands;
pub mod output;
pub mod types;

pub use commands::monkey::MonkeyCommands;
pub use types::{Cli, Commands};

/// Print an error (with its context chain) to stderr and exit with status 1
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let causes: Vec<String> = err.chain().skip(1).map(ToString::to_string).collect();
        let body = serde_json::json!({
            "error": err.to_string(),
            "causes": causes,
        });
        eprintln!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}
