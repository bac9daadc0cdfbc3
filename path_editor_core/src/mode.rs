//! Mode controller

use path_types::{EditMode, InsertionEnd};

/// The two interaction axes of a session
///
/// Transitions are explicit user toggles. Leaving editing mode keeps the
/// insertion end as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModeController {
    mode: EditMode,
    insertion_end: InsertionEnd,
}

impl ModeController {
    pub fn new(mode: EditMode, insertion_end: InsertionEnd) -> Self {
        Self {
            mode,
            insertion_end,
        }
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn insertion_end(&self) -> InsertionEnd {
        self.insertion_end
    }

    /// Point edits only take effect while editing
    pub fn allows_point_edits(&self) -> bool {
        self.mode == EditMode::Editing
    }

    /// Returns true if the mode changed
    pub fn set_mode(&mut self, mode: EditMode) -> bool {
        let changed = self.mode != mode;
        self.mode = mode;
        changed
    }

    pub fn enter_moving(&mut self) -> bool {
        self.set_mode(EditMode::Moving)
    }

    pub fn enter_editing(&mut self) -> bool {
        self.set_mode(EditMode::Editing)
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// Returns true if the end changed
    pub fn set_insertion_end(&mut self, end: InsertionEnd) -> bool {
        let changed = self.insertion_end != end;
        self.insertion_end = end;
        changed
    }

    pub fn toggle_end(&mut self) {
        self.insertion_end = self.insertion_end.toggled();
    }
}
