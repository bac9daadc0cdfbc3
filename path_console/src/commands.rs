//! Console command parsing
//!
//! One line of input maps to one command. Map events are spelled out
//! (`click <lat> <lng>`) since the console stands in for the map widget.

use path_editor_core::EditorCommand;
use path_types::{InsertionEnd, Point};
use services_path_store::ExportFormat;
use thiserror::Error;

/// Command parsing error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid syntax: {0}")]
    InvalidSyntax(String),
}

/// A parsed console line
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleCommand {
    /// Forwarded to the editor session
    Editor(EditorCommand),
    /// Confirm the open rename dialog with its current draft
    ConfirmDraft,
    /// Print the path list
    List,
    /// Print mode, insertion end and selection
    Status,
    /// Print recent log entries
    Log,
    /// Advance the toast clock by whole seconds
    Wait(u64),
    /// Hide every toast on screen, pinned ones included
    Dismiss,
    Help,
    Quit,
}

/// Parse a console line
pub fn parse_line(line: &str) -> Result<ConsoleCommand, CommandError> {
    let trimmed = line.trim();
    let (head, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (trimmed, ""),
    };

    let editor = |cmd: EditorCommand| -> Result<ConsoleCommand, CommandError> {
        Ok(ConsoleCommand::Editor(cmd))
    };

    match head {
        "" => Err(CommandError::InvalidSyntax("Empty command".to_string())),
        "click" => editor(EditorCommand::PrimaryClick(parse_point(rest)?)),
        "rclick" => editor(EditorCommand::SecondaryClick),
        "move" => editor(EditorCommand::PointerMove(parse_point(rest)?)),
        "moving" => editor(EditorCommand::EnterMoving),
        "editing" => editor(EditorCommand::EnterEditing),
        "end" => match InsertionEnd::parse(rest) {
            Some(end) => editor(EditorCommand::SetInsertionEnd(end)),
            None => Err(CommandError::InvalidSyntax(
                "usage: end front|back".to_string(),
            )),
        },
        "select" => {
            let index = rest.parse::<usize>().map_err(|_| {
                CommandError::InvalidSyntax("usage: select <index>".to_string())
            })?;
            editor(EditorCommand::SelectPath(index))
        }
        "add" => editor(EditorCommand::AddPath),
        "rename" => editor(EditorCommand::OpenRename),
        "confirm" if rest.is_empty() => Ok(ConsoleCommand::ConfirmDraft),
        "confirm" => editor(EditorCommand::ConfirmRename(rest.to_string())),
        "cancel" => editor(EditorCommand::CancelRename),
        "remove" => editor(EditorCommand::RemoveSelectedPath),
        "save" => editor(EditorCommand::SaveToStorage),
        "export" => match ExportFormat::parse(rest) {
            Some(format) => editor(EditorCommand::Export(format)),
            None => Err(CommandError::InvalidSyntax(
                "usage: export json|csv".to_string(),
            )),
        },
        "list" | "ls" => Ok(ConsoleCommand::List),
        "status" => Ok(ConsoleCommand::Status),
        "log" => Ok(ConsoleCommand::Log),
        "wait" => {
            let seconds = rest.parse::<u64>().map_err(|_| {
                CommandError::InvalidSyntax("usage: wait <seconds>".to_string())
            })?;
            Ok(ConsoleCommand::Wait(seconds))
        }
        "dismiss" => Ok(ConsoleCommand::Dismiss),
        "help" | "?" => Ok(ConsoleCommand::Help),
        "quit" | "q" | "exit" => Ok(ConsoleCommand::Quit),
        _ => Err(CommandError::UnknownCommand(head.to_string())),
    }
}

fn parse_point(args: &str) -> Result<Point, CommandError> {
    let usage = || CommandError::InvalidSyntax("expected <lat> <lng>".to_string());
    let mut parts = args.split_whitespace();
    let lat = parts.next().and_then(|s| s.parse::<f64>().ok()).ok_or_else(usage)?;
    let lng = parts.next().and_then(|s| s.parse::<f64>().ok()).ok_or_else(usage)?;
    if parts.next().is_some() || !lat.is_finite() || !lng.is_finite() {
        return Err(usage());
    }
    Ok(Point::new(lat, lng))
}

pub const HELP: &str = "\
click <lat> <lng>   add a point (editing mode)
rclick              remove a point from the active end (editing mode)
move <lat> <lng>    move the cursor
moving | editing    switch interaction mode
end front|back      choose the end that gains and loses points
select <index>      choose the active path
add                 append a new path
rename              open the rename dialog
confirm [name]      apply the rename (draft if no name given)
cancel              close the rename dialog
remove              remove the active path
save                store paths durably
export json|csv     write paths.json or paths.csv
list | status       inspect the session
log                 print log entries recorded since the last `log`
wait <seconds>      let toasts expire
dismiss             hide all toasts
quit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_click() {
        assert_eq!(
            parse_line("click 37.5 127.0"),
            Ok(ConsoleCommand::Editor(EditorCommand::PrimaryClick(Point::new(37.5, 127.0))))
        );
    }

    #[test]
    fn test_parse_click_rejects_bad_coordinates() {
        assert!(parse_line("click 37.5").is_err());
        assert!(parse_line("click a b").is_err());
        assert!(parse_line("click 1 2 3").is_err());
        assert!(parse_line("click NaN 2").is_err());
    }

    #[test]
    fn test_parse_end() {
        assert_eq!(
            parse_line("end front"),
            Ok(ConsoleCommand::Editor(EditorCommand::SetInsertionEnd(InsertionEnd::Front)))
        );
        assert!(matches!(parse_line("end middle"), Err(CommandError::InvalidSyntax(_))));
    }

    #[test]
    fn test_parse_confirm() {
        assert_eq!(parse_line("confirm"), Ok(ConsoleCommand::ConfirmDraft));
        assert_eq!(
            parse_line("confirm Han River"),
            Ok(ConsoleCommand::Editor(EditorCommand::ConfirmRename("Han River".to_string())))
        );
    }

    #[test]
    fn test_parse_export() {
        assert_eq!(
            parse_line("export csv"),
            Ok(ConsoleCommand::Editor(EditorCommand::Export(ExportFormat::Tabular)))
        );
        assert!(parse_line("export pdf").is_err());
    }

    #[test]
    fn test_parse_select() {
        assert_eq!(
            parse_line(" select 2 "),
            Ok(ConsoleCommand::Editor(EditorCommand::SelectPath(2)))
        );
        assert!(parse_line("select -1").is_err());
    }

    #[test]
    fn test_parse_empty_command() {
        assert_eq!(
            parse_line("   "),
            Err(CommandError::InvalidSyntax("Empty command".to_string()))
        );
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(
            parse_line("teleport"),
            Err(CommandError::UnknownCommand("teleport".to_string()))
        );
    }

    #[test]
    fn test_parse_host_commands() {
        assert_eq!(parse_line("ls"), Ok(ConsoleCommand::List));
        assert_eq!(parse_line("wait 3"), Ok(ConsoleCommand::Wait(3)));
        assert_eq!(parse_line("dismiss"), Ok(ConsoleCommand::Dismiss));
        assert_eq!(parse_line("q"), Ok(ConsoleCommand::Quit));
    }
}
