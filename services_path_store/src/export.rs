//! Downloadable export artifacts
//!
//! Two formats: a structured JSON dump identical to the stored payload, and
//! a `;`-delimited table with one row per point.

use crate::persistence::{serialize_paths, PersistenceError};
use path_types::Path;

/// Header row of the tabular export
///
/// `x` holds the latitude and `y` the longitude. Consumers of the format
/// depend on this mapping.
pub const CSV_HEADER: &str = "datatype;x;y";

const CSV_DELIMITER: char = ';';

/// Export format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Structured,
    Tabular,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Structured => "json",
            ExportFormat::Tabular => "csv",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Structured => "application/json",
            ExportFormat::Tabular => "text/csv",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "json" | "structured" => Some(ExportFormat::Structured),
            "csv" | "tabular" => Some(ExportFormat::Tabular),
            _ => None,
        }
    }
}

/// A named text file ready for download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub format: ExportFormat,
    pub content: String,
}

impl ExportArtifact {
    pub fn new(file_name: impl Into<String>, format: ExportFormat, content: String) -> Self {
        Self {
            file_name: file_name.into(),
            format,
            content,
        }
    }
}

/// Full-fidelity JSON dump, identical to the stored payload
pub fn export_structured(paths: &[Path]) -> Result<String, PersistenceError> {
    serialize_paths(paths)
}

/// Flattened `name;lat;lng` table under [`CSV_HEADER`], LF-joined
///
/// Paths without points contribute no rows. Names are written verbatim.
pub fn export_tabular(paths: &[Path]) -> String {
    let mut lines = vec![CSV_HEADER.to_string()];
    for path in paths {
        for point in &path.points {
            lines.push(format!(
                "{}{}{:?}{}{:?}",
                path.name, CSV_DELIMITER, point.lat, CSV_DELIMITER, point.lng
            ));
        }
    }
    lines.join("\n")
}
