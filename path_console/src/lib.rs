//! # Path Console
//!
//! A line-oriented host for the path editor.
//!
//! It stands in for the map widget and the UI shell: map clicks are typed as
//! commands, the path list is drawn as text, durable storage is a directory
//! of JSON files and downloads land in an output directory.

pub mod commands;
pub mod host;
pub mod map;

pub use commands::{parse_line, CommandError, ConsoleCommand};
pub use host::{ConsoleHost, HostReply};
pub use map::{MapEvent, MapSurface, TextSurface};
