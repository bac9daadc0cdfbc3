//! Session snapshot for deterministic parity testing

use path_types::{EditMode, InsertionEnd, Path, Point};
use serde::{Deserialize, Serialize};

/// Complete observable session state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorSnapshot {
    pub mode: EditMode,
    pub insertion_end: InsertionEnd,
    pub selected_index: usize,
    pub paths: Vec<Path>,
    pub cursor: Option<Point>,
    pub pending_rename: Option<String>,
}

impl EditorSnapshot {
    /// Compute a deterministic hash of the snapshot state
    /// This is used for fast comparison in parity tests
    #[cfg(test)]
    pub fn hash(&self) -> u64 {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();

        hasher.update([self.mode as u8, self.insertion_end as u8]);
        hasher.update(self.selected_index.to_le_bytes());

        for path in &self.paths {
            hasher.update(path.name.as_bytes());
            hasher.update(b"\n");
            hasher.update(path.color_key.0.to_le_bytes());
            for point in &path.points {
                hasher.update(point.lat.to_bits().to_le_bytes());
                hasher.update(point.lng.to_bits().to_le_bytes());
            }
        }

        if let Some(cursor) = self.cursor {
            hasher.update(cursor.lat.to_bits().to_le_bytes());
            hasher.update(cursor.lng.to_bits().to_le_bytes());
        }

        if let Some(draft) = &self.pending_rename {
            hasher.update(draft.as_bytes());
        }

        let result = hasher.finalize();
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&result[..8]);
        u64::from_le_bytes(bytes)
    }
}
