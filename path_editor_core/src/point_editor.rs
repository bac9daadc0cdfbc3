//! Point insertion and removal on the selected path
//!
//! The insertion end is shared by both operations, so points added at the
//! front are also removed from the front.

use crate::collection::PathCollection;
use crate::error::PathError;
use crate::mode::ModeController;
use path_types::{InsertionEnd, Path, Point};

/// Adds `point` at `end` of `path`. Repeated points are kept.
pub fn push_at(path: &mut Path, point: Point, end: InsertionEnd) {
    match end {
        InsertionEnd::Back => path.points.push(point),
        InsertionEnd::Front => path.points.insert(0, point),
    }
}

/// Removes the point at `end` of `path`, if any
pub fn pop_at(path: &mut Path, end: InsertionEnd) -> Option<Point> {
    if path.points.is_empty() {
        return None;
    }
    match end {
        InsertionEnd::Back => path.points.pop(),
        InsertionEnd::Front => Some(path.points.remove(0)),
    }
}

/// Inserts into the selected path at the active insertion end
///
/// Returns `Ok(false)` without touching anything while moving.
pub fn insert_point(
    collection: &mut PathCollection,
    selected: usize,
    point: Point,
    modes: &ModeController,
) -> Result<bool, PathError> {
    if !modes.allows_point_edits() {
        return Ok(false);
    }
    let path = collection.get_mut(selected)?;
    push_at(path, point, modes.insertion_end());
    Ok(true)
}

/// Removes the most recently edited end of the selected path
///
/// Returns `Ok(None)` while moving or when the path has no points.
pub fn remove_last_edited(
    collection: &mut PathCollection,
    selected: usize,
    modes: &ModeController,
) -> Result<Option<Point>, PathError> {
    if !modes.allows_point_edits() {
        return Ok(None);
    }
    let path = collection.get_mut(selected)?;
    Ok(pop_at(path, modes.insertion_end()))
}
