//! Active path tracking

use crate::error::PathError;

/// Index of the selected path after the path at `removed` was taken out
///
/// Removing the selected path moves the selection to its predecessor (or
/// keeps 0). Other removals leave the index alone, clamped to the new length.
pub fn index_after_remove(removed: usize, current: usize, new_len: usize) -> usize {
    let next = if removed == current && current > 0 {
        current - 1
    } else {
        current
    };
    next.min(new_len.saturating_sub(1))
}

/// The path currently receiving point edits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionTracker {
    index: usize,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Selects `index` if it addresses one of `len` paths
    pub fn select(&mut self, index: usize, len: usize) -> Result<bool, PathError> {
        if index >= len {
            return Err(PathError::IndexOutOfRange { index, len });
        }
        let changed = self.index != index;
        self.index = index;
        Ok(changed)
    }

    pub fn on_remove(&mut self, removed: usize, new_len: usize) {
        self.index = index_after_remove(removed, self.index, new_len);
    }

    /// Pulls the index back inside a collection of `len` paths
    pub fn clamp(&mut self, len: usize) {
        self.index = self.index.min(len.saturating_sub(1));
    }
}
