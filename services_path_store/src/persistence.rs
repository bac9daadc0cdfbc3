//! Durable encoding of the path list
//!
//! The payload is a JSON array of `{"name", "points": [{"lat", "lng"}],
//! "counter"}` objects, the layout the editor has always written under the
//! `paths` key.

use crate::store::{KeyValueStore, StoreError};
use path_types::{ColorKey, Path};
use thiserror::Error;

/// Persistence errors
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The stored payload is not a valid path list
    #[error("Malformed path data: {0}")]
    Format(String),

    #[error("Failed to serialize paths: {0}")]
    Serialization(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl PersistenceError {
    pub fn is_format(&self) -> bool {
        matches!(self, PersistenceError::Format(_))
    }
}

/// Encodes the full path list losslessly
///
/// JSON has no encoding for NaN or infinity, so a non-finite point is an
/// error instead of an unreadable payload.
pub fn serialize_paths(paths: &[Path]) -> Result<String, PersistenceError> {
    for path in paths {
        if let Some(point) = path.points.iter().find(|p| !p.is_finite()) {
            return Err(PersistenceError::Serialization(format!(
                "path {:?} holds non-finite point {}",
                path.name, point
            )));
        }
    }
    serde_json::to_string(paths).map_err(|e| PersistenceError::Serialization(e.to_string()))
}

/// Decodes a stored payload
///
/// `None` means nothing was ever stored and yields `Ok(None)`. A payload that
/// is not a JSON array of paths, or an empty array, is a format error: a
/// collection always holds at least one path.
pub fn deserialize_paths(payload: Option<&str>) -> Result<Option<Vec<Path>>, PersistenceError> {
    let Some(payload) = payload else {
        return Ok(None);
    };

    let paths: Vec<Path> =
        serde_json::from_str(payload).map_err(|e| PersistenceError::Format(e.to_string()))?;

    if paths.is_empty() {
        return Err(PersistenceError::Format(
            "stored collection holds no paths".to_string(),
        ));
    }

    if paths.iter().any(|p| p.color_key == ColorKey::LAST) {
        return Err(PersistenceError::Format(format!(
            "stored color key {} leaves no key for new paths",
            ColorKey::LAST
        )));
    }

    let mut keys: Vec<_> = paths.iter().map(|p| p.color_key).collect();
    keys.sort();
    if keys.windows(2).any(|w| w[0] == w[1]) {
        return Err(PersistenceError::Format(
            "stored collection repeats a color key".to_string(),
        ));
    }

    Ok(Some(paths))
}

/// Reads and decodes the path list stored under `key`
pub fn load_paths(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<Vec<Path>>, PersistenceError> {
    let payload = store.get(key)?;
    deserialize_paths(payload.as_deref())
}

/// Encodes and writes the path list under `key`
pub fn save_paths(
    store: &mut dyn KeyValueStore,
    key: &str,
    paths: &[Path],
) -> Result<(), PersistenceError> {
    let payload = serialize_paths(paths)?;
    store.set(key, &payload)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use path_types::{ColorKey, Point};

    fn sample() -> Vec<Path> {
        vec![
            Path::new("Unnamed path 1", ColorKey(0))
                .with_points(vec![Point::new(37.5642135, 127.0016985)]),
            Path::new("River", ColorKey(3)),
        ]
    }

    #[test]
    fn test_roundtrip_is_exact() {
        let paths = sample();
        let payload = serialize_paths(&paths).unwrap();
        let restored = deserialize_paths(Some(&payload)).unwrap().unwrap();
        assert_eq!(restored, paths);
    }

    #[test]
    fn test_payload_layout() {
        let paths = vec![Path::new("A", ColorKey(0)).with_points(vec![Point::new(1.0, 2.0)])];
        assert_eq!(
            serialize_paths(&paths).unwrap(),
            r#"[{"name":"A","points":[{"lat":1.0,"lng":2.0}],"counter":0}]"#
        );
    }

    #[test]
    fn test_absent_payload_is_first_run() {
        assert!(deserialize_paths(None).unwrap().is_none());
    }

    #[test]
    fn test_malformed_payload_is_format_error() {
        let err = deserialize_paths(Some("{not json")).unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_wrong_shape_is_format_error() {
        let err = deserialize_paths(Some(r#"{"name":"A"}"#)).unwrap_err();
        assert!(err.is_format());
        let err = deserialize_paths(Some(r#"[{"name":"A","points":"x","counter":0}]"#))
            .unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_empty_array_is_format_error() {
        let err = deserialize_paths(Some("[]")).unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_repeated_color_key_is_format_error() {
        let payload = r#"[{"name":"A","points":[],"counter":1},{"name":"B","points":[],"counter":1}]"#;
        assert!(deserialize_paths(Some(payload)).unwrap_err().is_format());
    }

    #[test]
    fn test_largest_color_key_is_format_error() {
        let payload = r#"[{"name":"A","points":[],"counter":18446744073709551615}]"#;
        assert!(deserialize_paths(Some(payload)).unwrap_err().is_format());

        let payload = r#"[{"name":"A","points":[],"counter":18446744073709551614}]"#;
        assert!(deserialize_paths(Some(payload)).unwrap().is_some());
    }

    #[test]
    fn test_non_finite_point_is_not_serialized() {
        let paths = vec![Path::new("A", ColorKey(0))
            .with_points(vec![Point::new(1.0, 2.0), Point::new(f64::INFINITY, 2.0)])];
        let err = serialize_paths(&paths).unwrap_err();
        assert!(matches!(err, PersistenceError::Serialization(_)));

        let mut store = MemoryStore::new();
        assert!(save_paths(&mut store, "paths", &paths).is_err());
        assert!(store.get("paths").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_names_are_accepted() {
        // Renames may legitimately produce duplicate names.
        let payload = r#"[{"name":"A","points":[],"counter":0},{"name":"A","points":[],"counter":1}]"#;
        let paths = deserialize_paths(Some(payload)).unwrap().unwrap();
        assert_eq!(paths.len(), 2);
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::new();
        assert!(load_paths(&store, "paths").unwrap().is_none());

        save_paths(&mut store, "paths", &sample()).unwrap();
        let loaded = load_paths(&store, "paths").unwrap().unwrap();
        assert_eq!(loaded, sample());
    }
}
