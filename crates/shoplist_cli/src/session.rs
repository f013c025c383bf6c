//! Interactive read-eval-render loop over a list controller.

use crate::shell::{parse_command, Command, HELP_TEXT};
use crate::view::{describe_outcome, render_text};
use shoplist_core::{ItemStore, ListController};
use std::io::{self, BufRead, Write};

const PROMPT: &str = "shoplist> ";

/// Runs the shell until `quit` or end of input.
///
/// User-signaled errors are printed and the loop continues. Only I/O errors
/// on `input`/`output` end the session early.
pub fn run_session<S, R, W>(
    controller: &mut ListController<S>,
    input: &mut R,
    output: &mut W,
) -> io::Result<()>
where
    S: ItemStore,
    R: BufRead,
    W: Write,
{
    if let Some(warning) = controller.load_warning() {
        writeln!(output, "warning: stored list was unreadable and has been reset ({warning})")?;
    }
    write!(output, "{}", render_text(&controller.view()))?;

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(());
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(output, "error: {err}")?;
                continue;
            }
        };

        match command {
            Command::Nothing => {}
            Command::Help => writeln!(output, "{HELP_TEXT}")?,
            Command::Quit => return Ok(()),
            Command::Show => write!(output, "{}", render_text(&controller.view()))?,
            Command::ShowJson => {
                let json = serde_json::to_string_pretty(&controller.view())
                    .map_err(io::Error::other)?;
                writeln!(output, "{json}")?;
            }
            Command::Action(action) => {
                let mut confirm = |prompt: &str| ask_yes_no(&mut *input, &mut *output, prompt);
                let result = controller.dispatch(action, &mut confirm);
                match result {
                    Ok(outcome) => writeln!(output, "{}", describe_outcome(&outcome))?,
                    Err(err) if err.is_user_error() => writeln!(output, "{err}")?,
                    Err(err) => writeln!(output, "error: {err}")?,
                }
                write!(output, "{}", render_text(&controller.view()))?;
            }
        }
    }
}

/// Blocking y/N prompt. Anything but `y`/`yes`, including I/O failure, declines.
fn ask_yes_no<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> bool {
    if write!(output, "{prompt} [y/N] ").and_then(|()| output.flush()).is_err() {
        return false;
    }
    let mut answer = String::new();
    match input.read_line(&mut answer) {
        Ok(0) | Err(_) => false,
        Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
    }
}
