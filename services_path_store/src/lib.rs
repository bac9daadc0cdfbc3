//! # Path Store Service
//!
//! Persistence and export for path collections.
//!
//! ## Philosophy
//!
//! - **Absence is not an error**: a missing storage key means "first run"
//! - **Corruption is recoverable**: malformed payloads surface as a typed
//!   [`PersistenceError::Format`] so callers can start fresh
//! - **Stable formats**: the stored payload, the structured export and the
//!   tabular export keep the layouts existing consumers already read
//! - **Explicit IO**: storage backends and download targets are traits handed
//!   in by the host, never ambient globals
//!
//! ## Design
//!
//! - [`KeyValueStore`]: durable string storage ([`MemoryStore`], [`FileStore`])
//! - [`persistence`]: lossless encoding of the path list
//! - [`export`]: `paths.json` and `paths.csv` artifacts
//! - [`DownloadSink`]: where export artifacts are delivered

pub mod export;
pub mod persistence;
pub mod sink;
pub mod store;

pub use export::{export_structured, export_tabular, ExportArtifact, ExportFormat, CSV_HEADER};
pub use persistence::{
    deserialize_paths, load_paths, save_paths, serialize_paths, PersistenceError,
};
pub use sink::{DirectorySink, DownloadSink, MemorySink, SinkError};
pub use store::{validate_key, FileStore, KeyValueStore, MemoryStore, StoreError};
