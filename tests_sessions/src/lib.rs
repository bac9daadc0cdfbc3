//! Session Test Utilities
//!
//! Shared helpers for end-to-end editing session tests.
//!
//! ## Test Philosophy
//!
//! - **Never empty**: every sequence of commands leaves at least one path
//! - **Stable colors**: a path keeps its color key for its whole life
//! - **Recoverable storage**: unreadable data never aborts a session
//! - **Exact formats**: stored and exported text is compared byte for byte

use path_editor_core::{CoreOutcome, EditorCommand, PathEditorCore};
use path_types::Point;
use services_settings::EditorSettings;

/// A fresh session already switched to editing mode
pub fn editing_session() -> PathEditorCore {
    let mut core = PathEditorCore::new(EditorSettings::default());
    core.enter_editing();
    core
}

/// Applies every command in order and returns the outcomes
pub fn run(core: &mut PathEditorCore, commands: Vec<EditorCommand>) -> Vec<CoreOutcome> {
    commands.into_iter().map(|cmd| core.apply(cmd)).collect()
}

/// Clicks every `(lat, lng)` pair onto the selected path
pub fn click_all(core: &mut PathEditorCore, points: &[(f64, f64)]) {
    for &(lat, lng) in points {
        core.on_primary_click(Point::new(lat, lng));
    }
}

/// Names of all paths in collection order
pub fn names(core: &PathEditorCore) -> Vec<String> {
    core.paths().iter().map(|p| p.name.clone()).collect()
}

/// Points of the path at `index`
pub fn points_of(core: &PathEditorCore, index: usize) -> Vec<Point> {
    core.paths()
        .get(index)
        .map(|p| p.points.clone())
        .unwrap_or_default()
}
