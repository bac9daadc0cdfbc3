//! Map widget adapter
//!
//! The console plays the part of the map widget: it turns typed events into
//! editor commands and draws [`RenderFrame`]s as text.

use path_editor_core::{EditorCommand, RenderFrame};
use path_types::{ColorKey, Point};

/// Raw events the map widget reports, already in geographic coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapEvent {
    PrimaryClick(Point),
    SecondaryClick,
    PointerMove(Point),
}

impl From<MapEvent> for EditorCommand {
    fn from(event: MapEvent) -> Self {
        match event {
            MapEvent::PrimaryClick(point) => EditorCommand::PrimaryClick(point),
            MapEvent::SecondaryClick => EditorCommand::SecondaryClick,
            MapEvent::PointerMove(point) => EditorCommand::PointerMove(point),
        }
    }
}

/// Something that can draw a frame of paths
pub trait MapSurface {
    fn draw(&mut self, frame: &RenderFrame);
}

/// Stroke colors, picked by `color_key % PALETTE.len()`
pub const PALETTE: [&str; 10] = [
    "#e6194b", "#3cb44b", "#ffe119", "#4363d8", "#f58231", "#911eb4", "#46f0f0", "#f032e6",
    "#bcf60c", "#008080",
];

pub fn stroke_color(key: ColorKey) -> &'static str {
    PALETTE[key.palette_index(PALETTE.len())]
}

/// Renders frames as plain text lines
#[derive(Debug, Default)]
pub struct TextSurface {
    lines: Vec<String>,
}

impl TextSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines of the last drawn frame
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl MapSurface for TextSurface {
    fn draw(&mut self, frame: &RenderFrame) {
        self.lines.clear();
        for (index, polyline) in frame.polylines.iter().enumerate() {
            let marker = if polyline.selected { '*' } else { ' ' };
            let mut line = format!(
                "{} [{}] {} ({}) {} point{}",
                marker,
                index,
                polyline.name,
                stroke_color(polyline.color_key),
                polyline.points.len(),
                if polyline.points.len() == 1 { "" } else { "s" },
            );
            if !polyline.points.is_empty() {
                let trail: Vec<String> = polyline.points.iter().map(Point::to_string).collect();
                line.push_str(": ");
                line.push_str(&trail.join(" -> "));
            }
            self.lines.push(line);
        }
        if let Some(cursor) = &frame.cursor {
            self.lines.push(format!("cursor: {}", cursor.label));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use path_editor_core::{CursorView, PolylineView};

    #[test]
    fn test_map_event_conversion() {
        let p = Point::new(1.0, 2.0);
        assert_eq!(EditorCommand::from(MapEvent::PrimaryClick(p)), EditorCommand::PrimaryClick(p));
        assert_eq!(EditorCommand::from(MapEvent::SecondaryClick), EditorCommand::SecondaryClick);
    }

    #[test]
    fn test_stroke_color_is_stable_per_key() {
        assert_eq!(stroke_color(ColorKey(0)), "#e6194b");
        assert_eq!(stroke_color(ColorKey(11)), stroke_color(ColorKey(1)));
    }

    #[test]
    fn test_text_surface_draws_frame() {
        let frame = RenderFrame {
            polylines: vec![
                PolylineView {
                    name: "A".to_string(),
                    color_key: ColorKey(0),
                    points: vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)],
                    selected: true,
                },
                PolylineView {
                    name: "B".to_string(),
                    color_key: ColorKey(1),
                    points: vec![],
                    selected: false,
                },
            ],
            cursor: Some(CursorView {
                position: Point::new(5.0, 6.0),
                label: "lat 5.00, lng 6.00".to_string(),
            }),
        };

        let mut surface = TextSurface::new();
        surface.draw(&frame);
        assert_eq!(
            surface.lines(),
            &[
                "* [0] A (#e6194b) 2 points: (1.0, 2.0) -> (3.0, 4.0)".to_string(),
                "  [1] B (#3cb44b) 0 points".to_string(),
                "cursor: lat 5.00, lng 6.00".to_string(),
            ]
        );
    }
}
