//! Delivery targets for export artifacts

use crate::export::ExportArtifact;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Sink errors
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Failed to write {file}: {source}")]
    Io {
        file: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Receives finished export artifacts, the way a browser receives a download
pub trait DownloadSink {
    /// Delivers the artifact and returns where it ended up
    fn deliver(&mut self, artifact: &ExportArtifact) -> Result<PathBuf, SinkError>;
}

/// Writes artifacts as files into a directory
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for DirectorySink {
    fn deliver(&mut self, artifact: &ExportArtifact) -> Result<PathBuf, SinkError> {
        let file = self.dir.join(&artifact.file_name);
        fs::create_dir_all(&self.dir).map_err(|source| SinkError::Io {
            file: self.dir.clone(),
            source,
        })?;
        fs::write(&file, artifact.content.as_bytes()).map_err(|source| SinkError::Io {
            file: file.clone(),
            source,
        })?;
        Ok(file)
    }
}

/// Keeps delivered artifacts in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    delivered: Vec<ExportArtifact>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delivered(&self) -> &[ExportArtifact] {
        &self.delivered
    }

    pub fn find(&self, file_name: &str) -> Option<&ExportArtifact> {
        self.delivered.iter().rev().find(|a| a.file_name == file_name)
    }
}

impl DownloadSink for MemorySink {
    fn deliver(&mut self, artifact: &ExportArtifact) -> Result<PathBuf, SinkError> {
        self.delivered.push(artifact.clone());
        Ok(PathBuf::from(&artifact.file_name))
    }
}
