//! System handlers (help, exit) and help text

use domain::commands::usage;

use super::CommandResult;

pub(super) fn handle_help() -> CommandResult {
    CommandResult::help(help_text())
}

pub(super) fn handle_exit() -> CommandResult {
    CommandResult::exit("Exiting Pet Book as requested ...")
}

/// Usage of every command, one block per command
pub fn help_text() -> String {
    usage::ALL
        .iter()
        .map(|(_, text)| *text)
        .collect::<Vec<_>>()
        .join("\n\n")
}
