//! Parses shell lines into controller actions.

use shoplist_core::UiAction;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const HELP_TEXT: &str = "\
commands:
  add <text>       add an item (replaces the edit target in edit mode)
  edit <item>      select an item for editing
  rm <item>        remove an item after confirmation
  clear            remove every item
  filter [query]   show only items containing query (case-insensitive)
  list             show the list
  json             show the list state as JSON
  help             show this help
  quit             leave the shell";

/// One parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Action(UiAction),
    Show,
    ShowJson,
    Help,
    Quit,
    /// Blank line.
    Nothing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    UnknownCommand(String),
    MissingArgument(&'static str),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCommand(name) => {
                write!(f, "unknown command `{name}`; type `help` for commands")
            }
            Self::MissingArgument(command) => write!(f, "`{command}` needs an item"),
        }
    }
}

impl Error for ParseError {}

/// Parses one input line.
///
/// The argument is everything after the first space, kept verbatim so the
/// controller sees exactly what was typed.
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let line = line.trim_end_matches(['\n', '\r']);
    let trimmed = line.trim_start();
    if trimmed.trim().is_empty() {
        return Ok(Command::Nothing);
    }

    let (name, argument) = match trimmed.split_once(' ') {
        Some((name, rest)) => (name, rest),
        None => (trimmed, ""),
    };

    let command = match name.to_ascii_lowercase().as_str() {
        "add" | "a" => Command::Action(UiAction::SubmitItem(argument.to_string())),
        "edit" | "e" => Command::Action(UiAction::SelectForEdit(required(argument, "edit")?)),
        "rm" | "remove" => Command::Action(UiAction::RemoveItem(required(argument, "rm")?)),
        "clear" => Command::Action(UiAction::ClearAll),
        "filter" | "f" => Command::Action(UiAction::Filter(argument.to_string())),
        "list" | "ls" => Command::Show,
        "json" => Command::ShowJson,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(ParseError::UnknownCommand(other.to_string())),
    };
    Ok(command)
}

fn required(argument: &str, command: &'static str) -> Result<String, ParseError> {
    let argument = argument.trim();
    if argument.is_empty() {
        return Err(ParseError::MissingArgument(command));
    }
    Ok(argument.to_string())
}
