//! Editing errors

use thiserror::Error;

/// Errors raised by collection and selection operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PathError {
    /// The last remaining path cannot be removed
    #[error("Cannot remove the path. At least one path must exist.")]
    InvariantViolation,

    #[error("No path at index {index} (collection holds {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Every color key up to the largest one is taken
    #[error("Cannot add a path. No color keys are left.")]
    ColorKeysExhausted,
}
