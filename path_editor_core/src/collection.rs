//! The ordered collection of named paths

use crate::error::PathError;
use path_types::{ColorKey, Path};
use std::collections::HashSet;

/// Ordered list of paths, never empty
///
/// Names are unique whenever a path is created; color keys are unique and
/// strictly increasing in creation order.
#[derive(Debug, Clone, PartialEq)]
pub struct PathCollection {
    paths: Vec<Path>,
}

impl PathCollection {
    /// A collection holding one empty path named `name`
    pub fn with_default_path(name: impl Into<String>) -> Self {
        Self {
            paths: vec![Path::new(name, ColorKey::FIRST)],
        }
    }

    /// Wraps restored paths; an empty list cannot form a collection
    pub fn from_paths(paths: Vec<Path>) -> Result<Self, PathError> {
        if paths.is_empty() {
            return Err(PathError::InvariantViolation);
        }
        Ok(Self { paths })
    }

    /// Key for the next created path: one past the largest key in use
    pub fn next_color_key(&self) -> Result<ColorKey, PathError> {
        match self.paths.iter().map(|p| p.color_key).max() {
            Some(max) => max.next().ok_or(PathError::ColorKeysExhausted),
            None => Ok(ColorKey::FIRST),
        }
    }

    /// Builds an empty path with the next color key without inserting it
    pub fn create_path(&self, name: impl Into<String>) -> Result<Path, PathError> {
        Ok(Path::new(name, self.next_color_key()?))
    }

    pub fn append(&mut self, path: Path) {
        self.paths.push(path);
    }

    /// Removes the path at `index` and returns its name
    pub fn remove(&mut self, index: usize) -> Result<String, PathError> {
        if self.paths.len() == 1 {
            return Err(PathError::InvariantViolation);
        }
        self.check_index(index)?;
        Ok(self.paths.remove(index).name)
    }

    /// Replaces the name at `index`, returning the old one
    ///
    /// Uniqueness is not re-checked here.
    pub fn rename(&mut self, index: usize, new_name: impl Into<String>) -> Result<String, PathError> {
        self.check_index(index)?;
        Ok(std::mem::replace(
            &mut self.paths[index].name,
            new_name.into(),
        ))
    }

    pub fn get(&self, index: usize) -> Option<&Path> {
        self.paths.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Result<&mut Path, PathError> {
        let len = self.paths.len();
        self.paths
            .get_mut(index)
            .ok_or(PathError::IndexOutOfRange { index, len })
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Always false for a well-formed collection
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter()
    }

    pub fn as_slice(&self) -> &[Path] {
        &self.paths
    }

    pub fn into_paths(self) -> Vec<Path> {
        self.paths
    }

    /// The current set of names
    pub fn names(&self) -> HashSet<&str> {
        self.paths.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.paths.iter().position(|p| p.name == name)
    }

    fn check_index(&self, index: usize) -> Result<(), PathError> {
        if index < self.paths.len() {
            Ok(())
        } else {
            Err(PathError::IndexOutOfRange {
                index,
                len: self.paths.len(),
            })
        }
    }
}
