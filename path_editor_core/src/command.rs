//! Commands accepted by the editor session

use path_types::{InsertionEnd, Point};
use services_path_store::ExportFormat;

/// A single user action or map event
///
/// Hosts translate their raw UI events into commands and feed them to
/// [`PathEditorCore::apply`](crate::PathEditorCore::apply).
#[derive(Debug, Clone, PartialEq)]
pub enum EditorCommand {
    /// Left click on the map
    PrimaryClick(Point),
    /// Right click on the map
    SecondaryClick,
    /// Pointer moved over the map
    PointerMove(Point),
    EnterMoving,
    EnterEditing,
    SetInsertionEnd(InsertionEnd),
    SelectPath(usize),
    AddPath,
    OpenRename,
    ConfirmRename(String),
    CancelRename,
    RemoveSelectedPath,
    /// Persist the collection to durable storage (performed by the host)
    SaveToStorage,
    /// Produce a downloadable artifact (performed by the host)
    Export(ExportFormat),
}

impl EditorCommand {
    /// Whether the command comes from the map surface rather than the shell
    pub fn is_map_event(&self) -> bool {
        matches!(
            self,
            EditorCommand::PrimaryClick(_)
                | EditorCommand::SecondaryClick
                | EditorCommand::PointerMove(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_events() {
        assert!(EditorCommand::PrimaryClick(Point::new(0.0, 0.0)).is_map_event());
        assert!(EditorCommand::SecondaryClick.is_map_event());
        assert!(!EditorCommand::AddPath.is_map_event());
        assert!(!EditorCommand::Export(ExportFormat::Tabular).is_map_event());
    }
}
