//! Remote-control events.
//!
//! Translates terminal keys into remote events and formats them for the
//! remote log. Focus and blur notifications also arrive through the remote
//! listener but are dropped here; the touchables already log them.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// Key action reported when a remote key goes down.
pub const KEY_DOWN: i32 = 0;
/// Key action reported when a remote key comes back up.
pub const KEY_UP: i32 = 1;

/// A single event from the remote listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteEvent {
    pub event_type: String,
    pub event_key_action: Option<i32>,
}

impl RemoteEvent {
    pub fn new(event_type: impl Into<String>, event_key_action: Option<i32>) -> Self {
        RemoteEvent {
            event_type: event_type.into(),
            event_key_action,
        }
    }

    /// Focus and blur are not logged as remote events.
    pub fn is_focus_change(&self) -> bool {
        self.event_type == "focus" || self.event_type == "blur"
    }

    /// Log line for this event, or `None` if it is filtered out.
    pub fn describe(&self) -> Option<String> {
        if self.is_focus_change() {
            return None;
        }
        let action = self
            .event_key_action
            .map(|a| a.to_string())
            .unwrap_or_default();
        Some(format!("type={}, action={}", self.event_type, action))
    }

    /// Maps a terminal key to the remote event a TV remote would send.
    ///
    /// Returns `None` for keys with no remote counterpart.
    pub fn from_key(key: &KeyEvent) -> Option<RemoteEvent> {
        let event_type = match key.code {
            KeyCode::Up => "up",
            KeyCode::Down => "down",
            KeyCode::Left => "left",
            KeyCode::Right => "right",
            KeyCode::Enter | KeyCode::Char(' ') => "select",
            KeyCode::Backspace => "menu",
            KeyCode::Char('p') => "playPause",
            KeyCode::Char('r') => "rewind",
            KeyCode::Char('f') => "fastForward",
            _ => return None,
        };
        Some(RemoteEvent::new(event_type, Some(key_action(key.kind))))
    }
}

/// Key action code for a terminal key event kind.
pub fn key_action(kind: KeyEventKind) -> i32 {
    match kind {
        KeyEventKind::Press | KeyEventKind::Repeat => KEY_DOWN,
        KeyEventKind::Release => KEY_UP,
    }
}
