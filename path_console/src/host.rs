//! Console host
//!
//! Wires an editor session to a key-value store, a download sink, the
//! toast tray and a text map surface. It is the UI shell the
//! editor core expects: it forwards commands, performs requested IO and
//! shows feedback.

use path_editor_core::{
    CoreIoRequest, CoreOutcome, EditorCommand, FeedbackLevel, PathEditorCore,
};
use services_logger::LogLevel;
use services_notification::{Severity, ToastTray};
use services_path_store::{DownloadSink, KeyValueStore};
use services_settings::EditorSettings;

use crate::commands::{parse_line, ConsoleCommand, HELP};
use crate::map::{MapEvent, MapSurface, TextSurface};

const LOG_TAIL: usize = 20;
const SECOND_NS: u64 = 1_000_000_000;

/// Output of one console line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostReply {
    pub lines: Vec<String>,
    pub quit: bool,
}

impl HostReply {
    fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }
}

/// Maps editor feedback onto toast severity
pub fn severity(level: FeedbackLevel) -> Severity {
    match level {
        FeedbackLevel::Info => Severity::Info,
        FeedbackLevel::Success => Severity::Success,
        FeedbackLevel::Warning => Severity::Warning,
        FeedbackLevel::Error => Severity::Error,
    }
}

/// Interactive host around one editor session
pub struct ConsoleHost {
    core: PathEditorCore,
    store: Box<dyn KeyValueStore>,
    sink: Box<dyn DownloadSink>,
    toasts: ToastTray,
    surface: TextSurface,
}

impl ConsoleHost {
    /// Restores the session from `store` and prepares the surface
    ///
    /// A storage warning at startup stays pinned until `dismiss`.
    pub fn open(
        settings: EditorSettings,
        store: Box<dyn KeyValueStore>,
        sink: Box<dyn DownloadSink>,
    ) -> (Self, HostReply) {
        let (core, outcome) = PathEditorCore::restore(settings, store.as_ref());
        let mut host = Self {
            core,
            store,
            sink,
            toasts: ToastTray::new(),
            surface: TextSurface::new(),
        };
        let mut reply = HostReply::default();
        match outcome {
            CoreOutcome::Feedback(feedback) => {
                let level = severity(feedback.level);
                reply.line(format!("[{}] {}", level, feedback.message));
                host.toasts.pin(level, feedback.message);
                host.refresh_status();
            }
            outcome => host.handle_outcome(outcome, &mut reply),
        }
        host.redraw(&mut reply);
        (host, reply)
    }

    pub fn core(&self) -> &PathEditorCore {
        &self.core
    }

    pub fn toasts(&self) -> &ToastTray {
        &self.toasts
    }

    pub fn status(&self) -> &str {
        self.toasts.status()
    }

    /// Feeds a map event straight to the session
    pub fn dispatch_map_event(&mut self, event: MapEvent) -> HostReply {
        let mut reply = HostReply::default();
        self.run_editor_command(event.into(), &mut reply);
        reply
    }

    /// Executes one console line
    pub fn execute(&mut self, line: &str) -> HostReply {
        let mut reply = HostReply::default();
        let command = match parse_line(line) {
            Ok(command) => command,
            Err(e) => {
                reply.line(format!("error: {}", e));
                return reply;
            }
        };

        match command {
            ConsoleCommand::Editor(command) => self.run_editor_command(command, &mut reply),
            ConsoleCommand::ConfirmDraft => match self.core.pending_rename() {
                Some(draft) => {
                    let draft = draft.to_string();
                    self.run_editor_command(EditorCommand::ConfirmRename(draft), &mut reply);
                }
                None => reply.line("No rename in progress."),
            },
            ConsoleCommand::List => self.redraw(&mut reply),
            ConsoleCommand::Status => reply.line(self.status_line()),
            ConsoleCommand::Log => {
                let entries = self.core.drain_log();
                let skip = entries.len().saturating_sub(LOG_TAIL);
                if skip > 0 {
                    reply.line(format!("({} earlier entries not shown)", skip));
                }
                reply
                    .lines
                    .extend(entries.iter().skip(skip).map(|e| e.to_string()));
                self.refresh_status();
            }
            ConsoleCommand::Wait(seconds) => {
                self.toasts.tick(seconds.saturating_mul(SECOND_NS));
                let visible: Vec<String> =
                    self.toasts.visible().iter().map(|t| t.to_string()).collect();
                reply.line(format!("{} toast(s) on screen", visible.len()));
                reply.lines.extend(visible);
            }
            ConsoleCommand::Dismiss => {
                let count = self.toasts.dismiss_visible();
                reply.line(format!("Dismissed {} toast(s).", count));
            }
            ConsoleCommand::Help => reply.lines.extend(HELP.lines().map(str::to_string)),
            ConsoleCommand::Quit => reply.quit = true,
        }
        reply
    }

    /// Map events that change the session redraw the map
    fn run_editor_command(&mut self, command: EditorCommand, reply: &mut HostReply) {
        let opens_rename = command == EditorCommand::OpenRename;
        let from_map = command.is_map_event();
        let outcome = self.core.apply(command);
        let redraw = from_map && outcome == CoreOutcome::Changed;
        self.handle_outcome(outcome, reply);
        if redraw {
            self.redraw(reply);
        }

        if opens_rename {
            if let Some(draft) = self.core.pending_rename() {
                reply.line(format!(
                    "Renaming \"{}\": type `confirm <new name>` or `cancel`.",
                    draft
                ));
            }
        }
    }

    fn handle_outcome(&mut self, outcome: CoreOutcome, reply: &mut HostReply) {
        match outcome {
            CoreOutcome::Continue => {}
            CoreOutcome::Changed => self.refresh_status(),
            CoreOutcome::Feedback(feedback) => {
                let level = severity(feedback.level);
                reply.line(format!("[{}] {}", level, feedback.message));
                self.toasts.push(level, feedback.message);
                self.refresh_status();
            }
            CoreOutcome::RequestIo(request) => {
                let outcome = match request {
                    CoreIoRequest::SaveToStorage => self.core.save_to_storage(self.store.as_mut()),
                    CoreIoRequest::Export(format) => self.core.export(format, self.sink.as_mut()),
                };
                self.handle_outcome(outcome, reply);
            }
        }
    }

    fn redraw(&mut self, reply: &mut HostReply) {
        self.surface.draw(&self.core.render_frame());
        reply.lines.extend(self.surface.lines().iter().cloned());
    }

    fn refresh_status(&mut self) {
        let status = self.status_line();
        self.toasts.set_status(status);
    }

    fn status_line(&self) -> String {
        let paths = self.core.paths();
        let selected = self.core.selected_index();
        let name = paths.get(selected).map(|p| p.name.as_str()).unwrap_or("?");
        let mut status = format!(
            "{} | {} | [{}] {}",
            self.core.mode().as_str(),
            self.core.insertion_end().as_str(),
            selected,
            name
        );
        if let Some(label) = self.core.cursor_label() {
            status.push_str(" | ");
            status.push_str(&label);
        }
        let problems = self.core.log().entries_at_least(LogLevel::Warn).len();
        if problems > 0 {
            status.push_str(&format!(" | {} unread warning(s)", problems));
        }
        status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use path_types::Point;
    use services_path_store::{KeyValueStore, MemorySink, MemoryStore};

    fn host() -> ConsoleHost {
        let (host, _) = ConsoleHost::open(
            EditorSettings::default(),
            Box::new(MemoryStore::new()),
            Box::new(MemorySink::new()),
        );
        host
    }

    #[test]
    fn test_open_draws_default_path() {
        let (_, reply) = ConsoleHost::open(
            EditorSettings::default(),
            Box::new(MemoryStore::new()),
            Box::new(MemorySink::new()),
        );
        assert_eq!(reply.lines, vec!["* [0] Unnamed path 1 (#e6194b) 0 points".to_string()]);
    }

    #[test]
    fn test_editing_session() {
        let mut host = host();
        host.execute("editing");
        host.execute("click 1 2");
        host.execute("click 3 4");
        let reply = host.execute("list");
        assert_eq!(
            reply.lines,
            vec!["* [0] Unnamed path 1 (#e6194b) 2 points: (1.0, 2.0) -> (3.0, 4.0)".to_string()]
        );
        assert_eq!(host.status(), "EDITING | BACK | [0] Unnamed path 1");
    }

    #[test]
    fn test_map_events() {
        let mut host = host();
        host.execute("editing");
        host.dispatch_map_event(MapEvent::PrimaryClick(Point::new(1.0, 1.0)));
        host.dispatch_map_event(MapEvent::PointerMove(Point::new(2.0, 2.0)));
        assert_eq!(host.core().paths().get(0).unwrap().len(), 1);
        assert_eq!(
            host.status(),
            "EDITING | BACK | [0] Unnamed path 1 | lat 2.00, lng 2.00"
        );
    }

    #[test]
    fn test_feedback_becomes_toast() {
        let mut host = host();
        let reply = host.execute("remove");
        assert_eq!(
            reply.lines,
            vec!["[ERROR] Cannot remove the path. At least one path must exist.".to_string()]
        );
        assert_eq!(host.toasts().visible().len(), 1);

        let reply = host.execute("wait 11");
        assert_eq!(reply.lines, vec!["0 toast(s) on screen".to_string()]);
    }

    #[test]
    fn test_rename_with_draft() {
        let mut host = host();
        let reply = host.execute("rename");
        assert_eq!(
            reply.lines,
            vec!["Renaming \"Unnamed path 1\": type `confirm <new name>` or `cancel`.".to_string()]
        );
        let reply = host.execute("confirm");
        assert_eq!(
            reply.lines,
            vec!["[SUCCESS] Renamed \"Unnamed path 1\" to \"Unnamed path 1\".".to_string()]
        );
        assert_eq!(host.execute("confirm").lines, vec!["No rename in progress.".to_string()]);
    }

    #[test]
    fn test_save_request_is_performed() {
        let mut host = host();
        let reply = host.execute("save");
        assert_eq!(reply.lines, vec!["[SUCCESS] Saved work to local storage.".to_string()]);
    }

    #[test]
    fn test_export_request_is_performed() {
        let mut host = host();
        let reply = host.execute("export csv");
        assert_eq!(reply.lines, vec!["[INFO] Downloaded paths.csv.".to_string()]);
    }

    #[test]
    fn test_parse_errors_are_reported() {
        let mut host = host();
        let reply = host.execute("fly 1 2");
        assert_eq!(reply.lines, vec!["error: Unknown command: fly".to_string()]);
    }

    #[test]
    fn test_map_changes_redraw() {
        let mut host = host();
        assert!(host.execute("click 1 2").lines.is_empty());

        host.execute("editing");
        let reply = host.execute("click 1 2");
        assert_eq!(
            reply.lines,
            vec!["* [0] Unnamed path 1 (#e6194b) 1 point: (1.0, 2.0)".to_string()]
        );
    }

    #[test]
    fn test_non_finite_map_event_is_refused() {
        let mut host = host();
        host.execute("editing");
        let reply = host.dispatch_map_event(MapEvent::PrimaryClick(Point::new(f64::NAN, 1.0)));
        assert_eq!(
            reply.lines,
            vec!["[WARNING] Ignored point (NaN, 1.0): coordinates must be finite.".to_string()]
        );
        assert!(host.core().paths().get(0).unwrap().is_empty());
    }

    #[test]
    fn test_log_shows_new_entries_once() {
        let mut host = host();
        host.execute("remove");
        assert!(host.status().ends_with("| 1 unread warning(s)"));

        let reply = host.execute("log");
        assert!(reply.lines.iter().any(|l| l.starts_with("[WARN] path.remove:")));
        assert_eq!(host.status(), "MOVING | BACK | [0] Unnamed path 1");
        assert!(host.execute("log").lines.is_empty());
    }

    #[test]
    fn test_startup_warning_is_pinned() {
        let mut store = MemoryStore::new();
        store.set("paths", "[]").unwrap();
        let (mut host, reply) = ConsoleHost::open(
            EditorSettings::default(),
            Box::new(store),
            Box::new(MemorySink::new()),
        );
        assert_eq!(
            reply.lines[0],
            "[WARNING] Stored paths could not be read. Started a new path list."
        );

        host.execute("wait 60");
        assert_eq!(host.toasts().visible().len(), 1);
        assert_eq!(host.execute("dismiss").lines, vec!["Dismissed 1 toast(s).".to_string()]);
        assert!(host.toasts().visible().is_empty());
    }

    #[test]
    fn test_quit() {
        let mut host = host();
        assert!(host.execute("quit").quit);
    }
}
