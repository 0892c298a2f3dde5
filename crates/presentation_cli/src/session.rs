//! Line-oriented command session
//!
//! Each non-blank input line holds one JSON-encoded command. Lines starting
//! with `#` are comments. Every command's feedback, or the reason it failed,
//! is written to the output as one block.

use std::io::{self, BufRead, Write};

use application::{Executable, ModelPort};
use domain::PetCommand;
use tracing::{debug, info, warn};

/// Error type for session I/O
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Reading input or writing output failed
    #[error("Session I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Counts for a finished session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Commands that ran successfully
    pub succeeded: usize,
    /// Commands that were malformed or rejected
    pub failed: usize,
    /// Whether the session ended on an exit command
    pub exited: bool,
}

/// Run commands from `input` against `model` until input ends or a command
/// asks to exit
pub fn run_session<R, W>(
    model: &mut dyn ModelPort,
    input: R,
    mut output: W,
) -> Result<SessionSummary, SessionError>
where
    R: BufRead,
    W: Write,
{
    let mut summary = SessionSummary::default();

    for (number, line) in input.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let command = match serde_json::from_str::<PetCommand>(line) {
            Ok(command) => command,
            Err(e) => {
                warn!(line = number + 1, error = %e, "Malformed command");
                writeln!(output, "Invalid command format! {e}")?;
                summary.failed += 1;
                continue;
            },
        };

        debug!(line = number + 1, command = command.word(), "Command received");
        match command.execute(model) {
            Ok(result) => {
                writeln!(output, "{}", result.feedback)?;
                summary.succeeded += 1;
                if result.exit {
                    summary.exited = true;
                    break;
                }
            },
            Err(e) => {
                writeln!(output, "{e}")?;
                summary.failed += 1;
            },
        }
    }

    output.flush()?;
    info!(
        succeeded = summary.succeeded,
        failed = summary.failed,
        pets = model.pet_book().len(),
        "Session finished"
    );
    Ok(summary)
}
