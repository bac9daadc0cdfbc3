//! Named point sequences

use crate::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Creation-ordered key used to derive a stable display color
///
/// The key is assigned when a path is created and never changes afterwards,
/// so a path keeps its color when others are removed or reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorKey(pub u64);

impl ColorKey {
    /// The key given to the first path of an empty collection
    pub const FIRST: ColorKey = ColorKey(0);

    /// The largest representable key; nothing can be created after it
    pub const LAST: ColorKey = ColorKey(u64::MAX);

    /// Returns the key that follows this one, `None` past [`ColorKey::LAST`]
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(ColorKey)
    }

    /// Maps the key onto a palette of `palette_len` entries
    pub fn palette_index(self, palette_len: usize) -> usize {
        if palette_len == 0 {
            return 0;
        }
        (self.0 % palette_len as u64) as usize
    }
}

impl fmt::Display for ColorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named, ordered sequence of points forming a polyline
///
/// Point order is meaningful: it defines the drawn line and its direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub name: String,
    pub points: Vec<Point>,
    #[serde(rename = "counter")]
    pub color_key: ColorKey,
}

impl Path {
    /// Creates an empty path
    pub fn new(name: impl Into<String>, color_key: ColorKey) -> Self {
        Self {
            name: name.into(),
            points: Vec::new(),
            color_key,
        }
    }

    pub fn with_points(mut self, points: Vec<Point>) -> Self {
        self.points = points;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }
}
