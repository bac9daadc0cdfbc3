//! Interaction state axes
//!
//! The editor tracks two independent binary states. They vary orthogonally,
//! so they are kept as two enums instead of one combined flag set.

use serde::{Deserialize, Serialize};

/// Whether map clicks pan the map or edit the selected path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditMode {
    /// Clicks pass through to map panning
    #[default]
    Moving,
    /// Clicks add and remove points
    Editing,
}

impl EditMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EditMode::Moving => "MOVING",
            EditMode::Editing => "EDITING",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            EditMode::Moving => EditMode::Editing,
            EditMode::Editing => EditMode::Moving,
        }
    }
}

/// Which end of the selected path receives new points and loses removed ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertionEnd {
    Front,
    #[default]
    Back,
}

impl InsertionEnd {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsertionEnd::Front => "FRONT",
            InsertionEnd::Back => "BACK",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            InsertionEnd::Front => InsertionEnd::Back,
            InsertionEnd::Back => InsertionEnd::Front,
        }
    }

    /// Parses the lowercase names used by hosts and settings files
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "front" => Some(InsertionEnd::Front),
            "back" => Some(InsertionEnd::Back),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(EditMode::default(), EditMode::Moving);
        assert_eq!(InsertionEnd::default(), InsertionEnd::Back);
    }

    #[test]
    fn test_toggle_is_involution() {
        assert_eq!(EditMode::Moving.toggled().toggled(), EditMode::Moving);
        assert_eq!(InsertionEnd::Front.toggled(), InsertionEnd::Back);
    }

    #[test]
    fn test_mode_strings() {
        assert_eq!(EditMode::Moving.as_str(), "MOVING");
        assert_eq!(EditMode::Editing.as_str(), "EDITING");
        assert_eq!(InsertionEnd::Front.as_str(), "FRONT");
        assert_eq!(InsertionEnd::Back.as_str(), "BACK");
    }

    #[test]
    fn test_parse_insertion_end() {
        assert_eq!(InsertionEnd::parse("front"), Some(InsertionEnd::Front));
        assert_eq!(InsertionEnd::parse(" back "), Some(InsertionEnd::Back));
        assert_eq!(InsertionEnd::parse("middle"), None);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&EditMode::Editing).unwrap(), r#""editing""#);
        let end: InsertionEnd = serde_json::from_str(r#""front""#).unwrap();
        assert_eq!(end, InsertionEnd::Front);
    }
}
