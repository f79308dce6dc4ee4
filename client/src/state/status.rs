//! Shared status line shown above the results.
//!
//! DESIGN
//! ======
//! Every `show` hands back a [`StatusTicket`] carrying a sequence number.
//! Delayed work (auto-hide, follow-up messages) presents its ticket later and
//! only takes effect while that ticket is still current, so a stale timer can
//! never touch a newer status.

use std::time::Duration;

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

/// How long a success status stays up before hiding itself.
pub const SUCCESS_AUTO_HIDE: Duration = Duration::from_secs(5);

/// Severity of a status message; drives styling and auto-hide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusSeverity {
    Info,
    Success,
    Error,
}

impl StatusSeverity {
    /// CSS modifier class for this severity.
    #[must_use]
    pub fn as_class(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Delay after which a status of this severity hides itself, if any.
    #[must_use]
    pub fn auto_hide_after(self) -> Option<Duration> {
        match self {
            Self::Success => Some(SUCCESS_AUTO_HIDE),
            Self::Info | Self::Error => None,
        }
    }
}

/// A single status line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub severity: StatusSeverity,
}

/// Proof of which status update a delayed callback belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusTicket(u64);

/// Status line state.
#[derive(Clone, Debug, Default)]
pub struct StatusState {
    pub message: Option<StatusMessage>,
    pub visible: bool,
    seq: u64,
}

impl StatusState {
    /// Replace the current status and make it visible.
    pub fn show(&mut self, text: impl Into<String>, severity: StatusSeverity) -> StatusTicket {
        self.seq += 1;
        self.message = Some(StatusMessage { text: text.into(), severity });
        self.visible = true;
        StatusTicket(self.seq)
    }

    /// Whether no status update has happened since `ticket` was issued.
    #[must_use]
    pub fn is_current(&self, ticket: StatusTicket) -> bool {
        ticket.0 == self.seq
    }

    /// Hide the status if `ticket` is still the latest success status.
    ///
    /// Returns `true` when the status was hidden.
    pub fn expire(&mut self, ticket: StatusTicket) -> bool {
        if !self.is_current(ticket) || self.severity() != Some(StatusSeverity::Success) {
            return false;
        }
        self.visible = false;
        true
    }

    /// Severity of the current status, if any.
    #[must_use]
    pub fn severity(&self) -> Option<StatusSeverity> {
        self.message.as_ref().map(|m| m.severity)
    }

    /// Text of the current status, or empty.
    #[must_use]
    pub fn text(&self) -> &str {
        self.message.as_ref().map_or("", |m| m.text.as_str())
    }

    /// Full class attribute for the status element.
    #[must_use]
    pub fn class(&self) -> String {
        match self.severity() {
            Some(severity) => format!("status-message {}", severity.as_class()),
            None => "status-message".to_owned(),
        }
    }
}
