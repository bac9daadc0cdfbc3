//! Geographic points

use serde::{Deserialize, Serialize};
use std::fmt;

/// A latitude/longitude pair as reported by the map surface
///
/// Coordinates are passed through untouched: no projection, no range
/// clamping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub lat: f64,
    pub lng: f64,
}

impl Point {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Both coordinates are finite numbers
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Formats the point for a live cursor readout, rounded to `precision`
    /// decimal places.
    pub fn readout(&self, precision: usize) -> String {
        format!(
            "lat {:.*}, lng {:.*}",
            precision, self.lat, precision, self.lng
        )
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.lat, self.lng)
    }
}
