//! Render-ready view of a session
//!
//! The core does not pick colors. Each polyline carries its color key and the
//! host maps it onto whatever palette it draws with.

use path_types::{ColorKey, Point};

/// One path as the map surface should draw it
#[derive(Debug, Clone, PartialEq)]
pub struct PolylineView {
    pub name: String,
    pub color_key: ColorKey,
    pub points: Vec<Point>,
    pub selected: bool,
}

/// Live pointer readout
#[derive(Debug, Clone, PartialEq)]
pub struct CursorView {
    pub position: Point,
    pub label: String,
}

/// Everything the map surface needs for one frame
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderFrame {
    pub polylines: Vec<PolylineView>,
    pub cursor: Option<CursorView>,
}

impl RenderFrame {
    pub fn selected(&self) -> Option<&PolylineView> {
        self.polylines.iter().find(|p| p.selected)
    }

    pub fn point_count(&self) -> usize {
        self.polylines.iter().map(|p| p.points.len()).sum()
    }
}
