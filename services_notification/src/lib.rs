//! # Notification Service
//!
//! The toast tray and status line shown by path editor hosts.
//!
//! ## Philosophy
//!
//! - **Feedback is data**: every message carries a severity and an id
//! - **Quiet repeats**: a message that is already on screen is counted again
//!   instead of stacking a second toast
//! - **Deterministic**: the clock is logical and advanced by the host, so
//!   expiry is reproducible in tests
//!
//! ## Example
//!
//! ```ignore
//! use services_notification::{Severity, ToastTray};
//!
//! let mut tray = ToastTray::new();
//! tray.push(Severity::Success, "Added \"Unnamed path 2\".");
//! tray.set_status("EDITING | BACK | [0] Unnamed path 1");
//! tray.tick(4_000_000_000);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use uuid::Uuid;

/// Toasts kept for `history`, visible or not
pub const DEFAULT_HISTORY: usize = 100;

const SECOND_NS: u64 = 1_000_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToastId(Uuid);

impl ToastId {
    fn fresh() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast:{}", self.0)
    }
}

/// How serious a toast is; higher severities stay on screen longer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// Display time on the logical clock
    pub fn lifetime_ns(self) -> u64 {
        match self {
            Severity::Success => 3 * SECOND_NS,
            Severity::Info => 5 * SECOND_NS,
            Severity::Warning => 7 * SECOND_NS,
            Severity::Error => 10 * SECOND_NS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Success => "SUCCESS",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One message in the tray
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub id: ToastId,
    pub severity: Severity,
    pub message: String,
    pub shown_at_ns: u64,
    /// `None` keeps the toast until it is dismissed
    pub expires_at_ns: Option<u64>,
    /// How many times the same message was pushed while visible
    pub repeats: u32,
    pub dismissed: bool,
}

impl Toast {
    fn new(severity: Severity, message: String, now_ns: u64) -> Self {
        Self {
            id: ToastId::fresh(),
            severity,
            message,
            shown_at_ns: now_ns,
            expires_at_ns: Some(now_ns.saturating_add(severity.lifetime_ns())),
            repeats: 1,
            dismissed: false,
        }
    }

    pub fn is_visible(&self, now_ns: u64) -> bool {
        !self.dismissed && self.expires_at_ns.map_or(true, |at| now_ns < at)
    }
}

impl fmt::Display for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)?;
        if self.repeats > 1 {
            write!(f, " (x{})", self.repeats)?;
        }
        Ok(())
    }
}

/// Toasts plus a one-line status, on a logical clock
#[derive(Debug, Clone)]
pub struct ToastTray {
    toasts: VecDeque<Toast>,
    history: usize,
    status: String,
    now_ns: u64,
}

impl ToastTray {
    pub fn new() -> Self {
        Self::with_history(DEFAULT_HISTORY)
    }

    pub fn with_history(history: usize) -> Self {
        Self {
            toasts: VecDeque::new(),
            history: history.max(1),
            status: String::from("Ready"),
            now_ns: 0,
        }
    }

    pub fn now(&self) -> u64 {
        self.now_ns
    }

    /// Moves the clock forward; expired toasts stay in history
    pub fn tick(&mut self, delta_ns: u64) {
        self.now_ns = self.now_ns.saturating_add(delta_ns);
    }

    /// Shows `message`, or re-arms the identical toast already on screen
    pub fn push(&mut self, severity: Severity, message: impl Into<String>) -> ToastId {
        let message = message.into();
        let now = self.now_ns;

        if let Some(toast) = self
            .toasts
            .iter_mut()
            .rev()
            .find(|t| t.is_visible(now) && t.severity == severity && t.message == message)
        {
            toast.repeats += 1;
            toast.expires_at_ns = Some(now.saturating_add(severity.lifetime_ns()));
            return toast.id;
        }

        let toast = Toast::new(severity, message, now);
        let id = toast.id;
        self.toasts.push_back(toast);
        while self.toasts.len() > self.history {
            self.toasts.pop_front();
        }
        id
    }

    /// Shows `message` until it is dismissed
    pub fn pin(&mut self, severity: Severity, message: impl Into<String>) -> ToastId {
        let id = self.push(severity, message);
        if let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) {
            toast.expires_at_ns = None;
        }
        id
    }

    /// On-screen toasts, oldest first
    pub fn visible(&self) -> Vec<&Toast> {
        self.toasts
            .iter()
            .filter(|t| t.is_visible(self.now_ns))
            .collect()
    }

    /// Newest first, including expired and dismissed toasts
    pub fn history(&self, limit: usize) -> Vec<&Toast> {
        self.toasts.iter().rev().take(limit).collect()
    }

    pub fn dismiss(&mut self, id: ToastId) -> bool {
        match self.toasts.iter_mut().find(|t| t.id == id && !t.dismissed) {
            Some(toast) => {
                toast.dismissed = true;
                true
            }
            None => false,
        }
    }

    pub fn dismiss_visible(&mut self) -> usize {
        let now = self.now_ns;
        let mut count = 0;
        for toast in self.toasts.iter_mut().filter(|t| t.is_visible(now)) {
            toast.dismissed = true;
            count += 1;
        }
        count
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Default for ToastTray {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_lifetimes() {
        assert_eq!(Severity::Success.lifetime_ns(), 3 * SECOND_NS);
        assert_eq!(Severity::Error.lifetime_ns(), 10 * SECOND_NS);
        assert!(Severity::Warning > Severity::Info);
    }

    #[test]
    fn test_toasts_expire_by_severity() {
        let mut tray = ToastTray::new();
        tray.push(Severity::Success, "Added \"Unnamed path 2\".");
        tray.push(Severity::Error, "Cannot remove the path.");
        assert_eq!(tray.visible().len(), 2);

        tray.tick(4 * SECOND_NS);
        let visible = tray.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].severity, Severity::Error);

        tray.tick(6 * SECOND_NS);
        assert!(tray.visible().is_empty());
        assert_eq!(tray.len(), 2);
    }

    #[test]
    fn test_repeated_message_coalesces() {
        let mut tray = ToastTray::new();
        let first = tray.push(Severity::Error, "Cannot remove the path.");
        tray.tick(8 * SECOND_NS);
        let second = tray.push(Severity::Error, "Cannot remove the path.");

        assert_eq!(first, second);
        assert_eq!(tray.len(), 1);
        tray.tick(8 * SECOND_NS);
        let visible = tray.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].to_string(), "[ERROR] Cannot remove the path. (x2)");
    }

    #[test]
    fn test_expired_message_is_shown_again() {
        let mut tray = ToastTray::new();
        let first = tray.push(Severity::Info, "Downloaded paths.csv.");
        tray.tick(5 * SECOND_NS);
        let second = tray.push(Severity::Info, "Downloaded paths.csv.");
        assert_ne!(first, second);
        assert_eq!(tray.visible().len(), 1);
    }

    #[test]
    fn test_pinned_toast_stays() {
        let mut tray = ToastTray::new();
        let id = tray.pin(Severity::Warning, "Stored paths could not be read.");
        tray.tick(u64::MAX);
        assert_eq!(tray.visible().len(), 1);
        assert!(tray.dismiss(id));
        assert!(!tray.dismiss(id));
        assert!(tray.visible().is_empty());
    }

    #[test]
    fn test_dismiss_visible() {
        let mut tray = ToastTray::new();
        tray.push(Severity::Info, "a");
        tray.push(Severity::Info, "b");
        assert_eq!(tray.dismiss_visible(), 2);
        assert!(tray.visible().is_empty());
    }

    #[test]
    fn test_history_is_bounded() {
        let mut tray = ToastTray::with_history(3);
        for i in 0..5 {
            tray.push(Severity::Info, i.to_string());
        }
        assert_eq!(tray.len(), 3);
        assert_eq!(tray.history(1)[0].message, "4");
    }

    #[test]
    fn test_status_line() {
        let mut tray = ToastTray::new();
        assert_eq!(tray.status(), "Ready");
        tray.set_status("EDITING | BACK");
        assert_eq!(tray.status(), "EDITING | BACK");
    }

    #[test]
    fn test_toast_serializes() {
        let mut tray = ToastTray::new();
        tray.push(Severity::Warning, "x");
        let toast = tray.visible()[0].clone();
        let json = serde_json::to_string(&toast).unwrap();
        assert!(json.contains("\"severity\":\"warning\""));
        let back: Toast = serde_json::from_str(&json).unwrap();
        assert_eq!(back, toast);
    }
}
