use std::fmt::Display;

use colored::{ColoredString, Colorize};

use crate::command::PurgeCommand;

/// Formats a path in a unified format to be printed in CLI.
pub fn cli_format_path<P: Display>(path: P) -> ColoredString {
    path.to_string().yellow()
}

/// Formats a shell command in a unified format to be printed in CLI.
pub fn cli_format_command(command: &PurgeCommand) -> ColoredString {
    format!("`{}`", command).blue()
}
