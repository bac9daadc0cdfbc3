//! # Path Editor Core
//!
//! The editing model behind the map path editor.
//!
//! ## Philosophy
//!
//! - **Deterministic**: same event trace => same session state
//! - **Modal editing**: clicks only mutate points in editing mode
//! - **Mechanism over policy**: the core mutates paths, hosts decide rendering
//! - **No ambient authority**: storage and downloads are requested explicitly,
//!   never performed behind the host's back
//!
//! ## Design
//!
//! The core provides:
//! - PathCollection: the ordered, never-empty list of named paths
//! - Point editor: front/back insertion and removal on the selected path
//! - ModeController: the moving/editing and front/back axes
//! - Naming: collision-free default names
//! - SelectionTracker: the active path index
//! - PathEditorCore: the session object tying it together behind a command
//!   interface that returns structured [`CoreOutcome`]s

pub mod collection;
pub mod command;
pub mod core;
pub mod error;
pub mod mode;
pub mod naming;
pub mod point_editor;
pub mod render;
pub mod selection;
pub mod snapshot;

pub use collection::PathCollection;
pub use command::EditorCommand;
pub use core::{CoreIoRequest, CoreOutcome, Feedback, FeedbackLevel, PathEditorCore};
pub use error::PathError;
pub use mode::ModeController;
pub use naming::{default_name, RenameOutcome};
pub use render::{CursorView, PolylineView, RenderFrame};
pub use selection::SelectionTracker;
pub use snapshot::EditorSnapshot;
