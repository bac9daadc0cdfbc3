//! PathEditorCore session object
//!
//! One editing session: the authoritative path collection plus the
//! transient interaction state, behind a synchronous command interface.
//! Every recoverable failure is turned into a [`Feedback`] here and never
//! escapes to the host as an error.

use std::sync::Arc;

use path_types::{EditMode, InsertionEnd, Point, SessionId};
use services_logger::{LogEntry, LogLevel, SessionLog};
use services_path_store::{
    export_structured, export_tabular, load_paths, save_paths, DownloadSink, ExportArtifact,
    ExportFormat, KeyValueStore, PersistenceError,
};
use services_settings::EditorSettings;

use crate::{
    collection::PathCollection,
    command::EditorCommand,
    error::PathError,
    mode::ModeController,
    naming::{default_name, rename_path},
    point_editor,
    render::{CursorView, PolylineView, RenderFrame},
    selection::SelectionTracker,
    snapshot::EditorSnapshot,
};

/// Severity of a user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A message the host should show to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub level: FeedbackLevel,
    pub message: String,
}

impl Feedback {
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(FeedbackLevel::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(FeedbackLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(FeedbackLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(FeedbackLevel::Error, message)
    }

    fn new(level: FeedbackLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// Outcome from applying a command to the session
///
/// Anything other than `Continue` means the host should redraw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreOutcome {
    /// Nothing observable changed
    Continue,
    /// State changed (points, selection, mode, ...)
    Changed,
    /// Show a message; state may have changed as well
    Feedback(Feedback),
    /// Request IO operation from host
    RequestIo(CoreIoRequest),
}

impl CoreOutcome {
    pub fn feedback(&self) -> Option<&Feedback> {
        match self {
            CoreOutcome::Feedback(feedback) => Some(feedback),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.feedback(), Some(f) if f.level == FeedbackLevel::Error)
    }
}

/// IO request from editor core to host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreIoRequest {
    /// Persist the collection via [`PathEditorCore::save_to_storage`]
    SaveToStorage,
    /// Deliver an artifact via [`PathEditorCore::export`]
    Export(ExportFormat),
}

/// Editor session state machine
pub struct PathEditorCore {
    settings: EditorSettings,
    paths: Arc<PathCollection>,
    selection: SelectionTracker,
    modes: ModeController,
    cursor: Option<Point>,
    pending_rename: Option<String>,
    log: SessionLog,
}

impl PathEditorCore {
    /// Starts a session with a single default path
    pub fn new(settings: EditorSettings) -> Self {
        let session = SessionId::new();
        let mut log = SessionLog::new(session, settings.log_capacity);
        log.info("session.start", "new session with default collection");
        Self {
            paths: Arc::new(Self::default_collection(&settings)),
            selection: SelectionTracker::new(),
            modes: ModeController::new(settings.initial_mode, settings.initial_insertion_end),
            cursor: None,
            pending_rename: None,
            log,
            settings,
        }
    }

    /// Starts a session from durable storage
    ///
    /// Missing data starts a default collection silently; unreadable data
    /// does the same and reports a warning in the returned outcome.
    pub fn restore(settings: EditorSettings, store: &dyn KeyValueStore) -> (Self, CoreOutcome) {
        let mut core = Self::new(settings);
        let outcome = core.reload_from_storage(store);
        (core, outcome)
    }

    /// Replaces the collection with the stored one
    pub fn reload_from_storage(&mut self, store: &dyn KeyValueStore) -> CoreOutcome {
        let key = self.settings.storage_key.clone();
        let loaded = load_paths(store, &key).and_then(|paths| match paths {
            Some(paths) => PathCollection::from_paths(paths)
                .map(Some)
                .map_err(|e| PersistenceError::Format(e.to_string())),
            None => Ok(None),
        });

        let (collection, outcome) = match loaded {
            Ok(Some(collection)) => {
                self.log.record(
                    LogEntry::new(LogLevel::Info, "storage.load", "restored stored paths")
                        .with_field("key", &key)
                        .with_field("paths", collection.len()),
                );
                (collection, CoreOutcome::Changed)
            }
            Ok(None) => {
                self.log.record(
                    LogEntry::new(LogLevel::Info, "storage.load", "no stored paths, first run")
                        .with_field("key", &key),
                );
                (Self::default_collection(&self.settings), CoreOutcome::Changed)
            }
            Err(e) => {
                self.log.record(
                    LogEntry::new(LogLevel::Warn, "storage.load.fallback", e.to_string())
                        .with_field("key", &key),
                );
                (
                    Self::default_collection(&self.settings),
                    CoreOutcome::Feedback(Feedback::warning(
                        "Stored paths could not be read. Started a new path list.",
                    )),
                )
            }
        };

        self.paths = Arc::new(collection);
        self.selection = SelectionTracker::new();
        self.pending_rename = None;
        outcome
    }

    /// Dispatches a command
    ///
    /// Storage and export commands are not performed here: they come back as
    /// [`CoreOutcome::RequestIo`] for the host to carry out with its own
    /// store or sink.
    pub fn apply(&mut self, command: EditorCommand) -> CoreOutcome {
        match command {
            EditorCommand::PrimaryClick(point) => self.on_primary_click(point),
            EditorCommand::SecondaryClick => self.on_secondary_click(),
            EditorCommand::PointerMove(point) => self.on_pointer_move(point),
            EditorCommand::EnterMoving => self.enter_moving(),
            EditorCommand::EnterEditing => self.enter_editing(),
            EditorCommand::SetInsertionEnd(end) => self.set_insertion_end(end),
            EditorCommand::SelectPath(index) => self.select_path(index),
            EditorCommand::AddPath => self.add_path(),
            EditorCommand::OpenRename => self.open_rename(),
            EditorCommand::ConfirmRename(name) => self.confirm_rename(&name),
            EditorCommand::CancelRename => self.cancel_rename(),
            EditorCommand::RemoveSelectedPath => self.remove_selected_path(),
            EditorCommand::SaveToStorage => CoreOutcome::RequestIo(CoreIoRequest::SaveToStorage),
            EditorCommand::Export(format) => CoreOutcome::RequestIo(CoreIoRequest::Export(format)),
        }
    }

    // Map events

    pub fn on_primary_click(&mut self, point: Point) -> CoreOutcome {
        if !self.modes.allows_point_edits() {
            return CoreOutcome::Continue;
        }
        if !point.is_finite() {
            self.log.record(
                LogEntry::new(LogLevel::Warn, "point.insert", "non-finite point rejected")
                    .with_field("point", point),
            );
            return CoreOutcome::Feedback(Feedback::warning(format!(
                "Ignored point {}: coordinates must be finite.",
                point
            )));
        }
        let selected = self.selection.index();
        let modes = self.modes;
        match point_editor::insert_point(self.paths_mut(), selected, point, &modes) {
            Ok(true) => {
                self.log.record(
                    LogEntry::new(LogLevel::Debug, "point.insert", "point added")
                        .with_field("path", selected)
                        .with_field("end", modes.insertion_end().as_str())
                        .with_field("point", point),
                );
                CoreOutcome::Changed
            }
            Ok(false) => CoreOutcome::Continue,
            Err(e) => self.index_error("point.insert", e),
        }
    }

    pub fn on_secondary_click(&mut self) -> CoreOutcome {
        if !self.modes.allows_point_edits() {
            return CoreOutcome::Continue;
        }
        let selected = self.selection.index();
        if self.paths.get(selected).is_some_and(|p| p.is_empty()) {
            return CoreOutcome::Continue;
        }
        let modes = self.modes;
        match point_editor::remove_last_edited(self.paths_mut(), selected, &modes) {
            Ok(Some(point)) => {
                self.log.record(
                    LogEntry::new(LogLevel::Debug, "point.remove", "point removed")
                        .with_field("path", selected)
                        .with_field("end", modes.insertion_end().as_str())
                        .with_field("point", point),
                );
                CoreOutcome::Changed
            }
            Ok(None) => CoreOutcome::Continue,
            Err(e) => self.index_error("point.remove", e),
        }
    }

    /// Non-finite positions leave the cursor where it was
    pub fn on_pointer_move(&mut self, point: Point) -> CoreOutcome {
        if !point.is_finite() || self.cursor == Some(point) {
            return CoreOutcome::Continue;
        }
        self.cursor = Some(point);
        CoreOutcome::Changed
    }

    // Mode commands

    pub fn enter_moving(&mut self) -> CoreOutcome {
        self.mode_outcome(|modes| modes.enter_moving())
    }

    pub fn enter_editing(&mut self) -> CoreOutcome {
        self.mode_outcome(|modes| modes.enter_editing())
    }

    pub fn set_insertion_end(&mut self, end: InsertionEnd) -> CoreOutcome {
        self.mode_outcome(|modes| modes.set_insertion_end(end))
    }

    // Path commands

    pub fn select_path(&mut self, index: usize) -> CoreOutcome {
        match self.selection.select(index, self.paths.len()) {
            Ok(true) => {
                self.log.record(
                    LogEntry::new(LogLevel::Debug, "path.select", "selection changed")
                        .with_field("index", index),
                );
                CoreOutcome::Changed
            }
            Ok(false) => CoreOutcome::Continue,
            Err(e) => self.index_error("path.select", e),
        }
    }

    /// Appends a path with the lowest free default name
    ///
    /// The selection stays where it was.
    pub fn add_path(&mut self) -> CoreOutcome {
        let name = default_name(
            &self.settings.default_name_prefix,
            self.paths.iter().map(|p| p.name.as_str()),
        );
        let path = match self.paths.create_path(name.clone()) {
            Ok(path) => path,
            Err(e) => {
                self.log.error("path.add", e.to_string());
                return CoreOutcome::Feedback(Feedback::error(e.to_string()));
            }
        };
        let color_key = path.color_key;
        self.paths_mut().append(path);

        self.log.record(
            LogEntry::new(LogLevel::Info, "path.add", "path appended")
                .with_field("name", &name)
                .with_field("color_key", color_key),
        );
        CoreOutcome::Feedback(Feedback::success(format!("Added \"{}\".", name)))
    }

    /// Opens the rename dialog with the selected path's current name
    pub fn open_rename(&mut self) -> CoreOutcome {
        let current = self
            .paths
            .get(self.selection.index())
            .map(|p| p.name.clone())
            .unwrap_or_default();
        self.pending_rename = Some(current);
        CoreOutcome::Changed
    }

    /// Renames the selected path and closes the dialog
    ///
    /// Ignored when no dialog is open. The new name is applied even if
    /// another path already uses it.
    pub fn confirm_rename(&mut self, name: &str) -> CoreOutcome {
        if self.pending_rename.take().is_none() {
            self.log.debug("path.rename", "confirm without open dialog ignored");
            return CoreOutcome::Continue;
        }

        let selected = self.selection.index();
        match rename_path(self.paths_mut(), selected, name) {
            Ok(outcome) => {
                let level = if outcome.duplicate {
                    LogLevel::Warn
                } else {
                    LogLevel::Info
                };
                self.log.record(
                    LogEntry::new(level, "path.rename", "path renamed")
                        .with_field("from", &outcome.old_name)
                        .with_field("to", &outcome.new_name)
                        .with_field("duplicate", outcome.duplicate),
                );
                CoreOutcome::Feedback(Feedback::success(format!(
                    "Renamed \"{}\" to \"{}\".",
                    outcome.old_name, outcome.new_name
                )))
            }
            Err(e) => self.index_error("path.rename", e),
        }
    }

    /// Closes the rename dialog without touching the collection
    pub fn cancel_rename(&mut self) -> CoreOutcome {
        if self.pending_rename.take().is_some() {
            CoreOutcome::Changed
        } else {
            CoreOutcome::Continue
        }
    }

    pub fn remove_selected_path(&mut self) -> CoreOutcome {
        if self.paths.len() == 1 {
            return self.refuse_last_removal();
        }

        let selected = self.selection.index();
        match self.paths_mut().remove(selected) {
            Ok(name) => {
                let new_len = self.paths.len();
                self.selection.on_remove(selected, new_len);
                self.log.record(
                    LogEntry::new(LogLevel::Info, "path.remove", "path removed")
                        .with_field("name", &name)
                        .with_field("selected", self.selection.index()),
                );
                CoreOutcome::Feedback(Feedback::success(format!("Removed path \"{}\".", name)))
            }
            Err(PathError::InvariantViolation) => self.refuse_last_removal(),
            Err(e) => self.index_error("path.remove", e),
        }
    }

    // Persistence and export

    /// Writes the collection under the configured storage key
    pub fn save_to_storage(&mut self, store: &mut dyn KeyValueStore) -> CoreOutcome {
        let key = self.settings.storage_key.clone();
        match save_paths(store, &key, self.paths.as_slice()) {
            Ok(()) => {
                self.log.record(
                    LogEntry::new(LogLevel::Info, "storage.save", "paths saved")
                        .with_field("key", &key)
                        .with_field("paths", self.paths.len()),
                );
                CoreOutcome::Feedback(Feedback::success("Saved work to local storage."))
            }
            Err(e) => {
                self.log.record(
                    LogEntry::new(LogLevel::Error, "storage.save", e.to_string())
                        .with_field("key", &key),
                );
                CoreOutcome::Feedback(Feedback::error(format!("Could not save paths: {}", e)))
            }
        }
    }

    /// The `paths.json` artifact
    pub fn export_structured(&self) -> Result<ExportArtifact, PersistenceError> {
        let content = export_structured(self.paths.as_slice())?;
        Ok(ExportArtifact::new(
            self.settings.json_file_name.clone(),
            ExportFormat::Structured,
            content,
        ))
    }

    /// The `paths.csv` artifact
    pub fn export_tabular(&self) -> ExportArtifact {
        ExportArtifact::new(
            self.settings.csv_file_name.clone(),
            ExportFormat::Tabular,
            export_tabular(self.paths.as_slice()),
        )
    }

    /// Builds the artifact for `format` and hands it to `sink`
    pub fn export(&mut self, format: ExportFormat, sink: &mut dyn DownloadSink) -> CoreOutcome {
        let artifact = match format {
            ExportFormat::Structured => self.export_structured(),
            ExportFormat::Tabular => Ok(self.export_tabular()),
        };

        let delivered = artifact.map_err(|e| e.to_string()).and_then(|artifact| {
            sink.deliver(&artifact)
                .map(|location| (artifact.file_name, location))
                .map_err(|e| e.to_string())
        });

        match delivered {
            Ok((file_name, location)) => {
                self.log.record(
                    LogEntry::new(LogLevel::Info, "export", "artifact delivered")
                        .with_field("format", format.extension())
                        .with_field("mime", format.mime_type())
                        .with_field("location", location.display()),
                );
                CoreOutcome::Feedback(Feedback::info(format!("Downloaded {}.", file_name)))
            }
            Err(reason) => {
                self.log.record(
                    LogEntry::new(LogLevel::Error, "export", reason.clone())
                        .with_field("format", format.extension()),
                );
                CoreOutcome::Feedback(Feedback::error(format!("Export failed: {}", reason)))
            }
        }
    }

    // Public accessors for rendering/testing

    /// Shared snapshot of the collection; later edits never show through it
    pub fn paths(&self) -> Arc<PathCollection> {
        Arc::clone(&self.paths)
    }

    pub fn selected_index(&self) -> usize {
        self.selection.index()
    }

    pub fn mode(&self) -> EditMode {
        self.modes.mode()
    }

    pub fn insertion_end(&self) -> InsertionEnd {
        self.modes.insertion_end()
    }

    pub fn cursor_position(&self) -> Option<Point> {
        self.cursor
    }

    /// Cursor readout, e.g. `lat 37.56, lng 127.00`
    pub fn cursor_label(&self) -> Option<String> {
        self.cursor
            .map(|p| p.readout(self.settings.cursor_precision))
    }

    /// Draft name while the rename dialog is open
    pub fn pending_rename(&self) -> Option<&str> {
        self.pending_rename.as_deref()
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn session_id(&self) -> SessionId {
        self.log.session()
    }

    pub fn log(&self) -> &SessionLog {
        &self.log
    }

    pub fn drain_log(&mut self) -> Vec<LogEntry> {
        self.log.drain()
    }

    /// Get a complete snapshot of session state (for parity testing)
    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot {
            mode: self.modes.mode(),
            insertion_end: self.modes.insertion_end(),
            selected_index: self.selection.index(),
            paths: self.paths.as_slice().to_vec(),
            cursor: self.cursor,
            pending_rename: self.pending_rename.clone(),
        }
    }

    pub fn render_frame(&self) -> RenderFrame {
        let selected = self.selection.index();
        RenderFrame {
            polylines: self
                .paths
                .iter()
                .enumerate()
                .map(|(i, path)| PolylineView {
                    name: path.name.clone(),
                    color_key: path.color_key,
                    points: path.points.clone(),
                    selected: i == selected,
                })
                .collect(),
            cursor: self.cursor.map(|position| CursorView {
                position,
                label: position.readout(self.settings.cursor_precision),
            }),
        }
    }

    // Private helpers

    fn default_collection(settings: &EditorSettings) -> PathCollection {
        PathCollection::with_default_path(default_name(&settings.default_name_prefix, []))
    }

    /// Copy-on-write access: clones the collection if a reader holds it
    fn paths_mut(&mut self) -> &mut PathCollection {
        Arc::make_mut(&mut self.paths)
    }

    fn mode_outcome(&mut self, change: impl FnOnce(&mut ModeController) -> bool) -> CoreOutcome {
        if !change(&mut self.modes) {
            return CoreOutcome::Continue;
        }
        self.log.record(
            LogEntry::new(LogLevel::Debug, "mode.change", "interaction mode changed")
                .with_field("mode", self.modes.mode().as_str())
                .with_field("end", self.modes.insertion_end().as_str()),
        );
        CoreOutcome::Changed
    }

    fn refuse_last_removal(&mut self) -> CoreOutcome {
        let error = PathError::InvariantViolation;
        self.log.warn("path.remove", error.to_string());
        CoreOutcome::Feedback(Feedback::error(error.to_string()))
    }

    fn index_error(&mut self, event: &str, error: PathError) -> CoreOutcome {
        self.log.warn(event, error.to_string());
        self.selection.clamp(self.paths.len());
        CoreOutcome::Feedback(Feedback::warning(error.to_string()))
    }
}

impl Default for PathEditorCore {
    fn default() -> Self {
        Self::new(EditorSettings::default())
    }
}
