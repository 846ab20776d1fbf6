//! The demo screen.
//!
//! Owns the widget column, the focus position and the two event logs: one
//! fed by the remote listener, one fed by the touchables. Both logs are
//! replaced wholesale on every event.

use crate::config::InputConfig;
use crate::event_log::{EventLog, CAPACITY};
use crate::platform::Platform;
use crate::remote::{key_action, RemoteEvent, KEY_DOWN, KEY_UP};
use crate::touchable::{TouchEvent, Touchable};
use crate::tui::{is_quit_key, KeyOutcome};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tracing::{debug, warn};

const BUTTON_WIDTH: u16 = 30;
const BUTTON_HEIGHT: u16 = 3;
const PANEL_WIDTH: u16 = 42;

const HELP_TEXT: &str =
    "↑/↓ focus  ⏎/space select  l long press  ⌫ menu  p play/pause  r/f rewind/forward  q quit";

/// Progress of a held select key. Only tracked when the terminal reports
/// repeat and release events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SelectHold {
    Idle,
    Down,
    LongPressing,
}

pub struct Screen {
    platform: Platform,
    touchables: Vec<Touchable>,
    focused: Option<usize>,
    remote_log: EventLog,
    pressable_log: EventLog,
    input: InputConfig,
    select_hold: SelectHold,
    simulated_long_press: bool,
    show_help: bool,
}

impl Screen {
    /// Creates a screen with the platform's default widgets and empty logs.
    pub fn new(platform: Platform, input: InputConfig) -> Self {
        Screen {
            platform,
            touchables: Touchable::defaults_for(&platform),
            focused: None,
            remote_log: EventLog::new(),
            pressable_log: EventLog::new(),
            input,
            select_hold: SelectHold::Idle,
            simulated_long_press: false,
            show_help: true,
        }
    }

    pub fn with_help(mut self, show_help: bool) -> Self {
        self.show_help = show_help;
        self
    }

    /// Switches select handling between press-on-release (with long press
    /// on hold) and press-on-press.
    pub fn set_key_release_events(&mut self, enabled: bool) {
        self.input.key_release_events = enabled;
        self.select_hold = SelectHold::Idle;
    }

    pub fn touchables(&self) -> &[Touchable] {
        &self.touchables
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn remote_log(&self) -> &EventLog {
        &self.remote_log
    }

    pub fn pressable_log(&self) -> &EventLog {
        &self.pressable_log
    }

    /// Index of the widget with the given title (case-insensitive) or
    /// position.
    pub fn find_touchable(&self, name: &str) -> Option<usize> {
        if let Ok(index) = name.parse::<usize>() {
            return (index < self.touchables.len()).then_some(index);
        }
        self.touchables
            .iter()
            .position(|t| t.title.eq_ignore_ascii_case(name))
    }

    /// Delivers a remote-control event. Focus and blur are dropped.
    pub fn remote(&mut self, event: RemoteEvent) {
        match event.describe() {
            Some(entry) => {
                debug!(%entry, "remote event");
                self.remote_log = self.remote_log.appended(entry);
            }
            None => debug!(event_type = %event.event_type, "remote event filtered"),
        }
    }

    /// Delivers a touch event to the widget at `index`.
    pub fn touch(&mut self, index: usize, event: TouchEvent) {
        match self.touchables.get(index) {
            Some(touchable) => {
                debug!(widget = %touchable.title, ?event, "touch event");
                touchable.dispatch(event, &mut self.pressable_log);
            }
            None => debug!(index, "touch event for unknown widget ignored"),
        }
    }

    /// Moves focus to `index`, blurring the previous widget first.
    pub fn focus(&mut self, index: usize) {
        if index >= self.touchables.len() || self.focused == Some(index) {
            return;
        }
        if let Some(previous) = self.focused.take() {
            self.touch(previous, TouchEvent::Blur);
            self.remote(RemoteEvent::new("blur", None));
        }
        self.focused = Some(index);
        self.touch(index, TouchEvent::Focus);
        self.remote(RemoteEvent::new("focus", None));
    }

    pub fn focus_next(&mut self) {
        let count = self.touchables.len();
        if count == 0 {
            return;
        }
        let next = match self.focused {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.focus(next);
    }

    pub fn focus_previous(&mut self) {
        let count = self.touchables.len();
        if count == 0 {
            return;
        }
        let previous = match self.focused {
            Some(i) => (i + count - 1) % count,
            None => count - 1,
        };
        self.focus(previous);
    }

    /// Routes a terminal key to the remote listener and the focused widget.
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if is_quit_key(&key) {
            return KeyOutcome::Quit;
        }
        let pressed = key.kind != KeyEventKind::Release;

        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.handle_select(key.kind),
            KeyCode::Char('l') if pressed => self.toggle_long_press(),
            KeyCode::Up | KeyCode::Down => {
                if let Some(event) = RemoteEvent::from_key(&key) {
                    self.remote(event);
                }
                if pressed {
                    if key.code == KeyCode::Up {
                        self.focus_previous();
                    } else {
                        self.focus_next();
                    }
                }
            }
            _ => match RemoteEvent::from_key(&key) {
                Some(event) => self.remote(event),
                None => return KeyOutcome::Ignored,
            },
        }
        KeyOutcome::Handled
    }

    fn handle_select(&mut self, kind: KeyEventKind) {
        if self.input.key_release_events
            && kind == KeyEventKind::Press
            && self.select_hold == SelectHold::Down
        {
            // A second press without a release in between: releases are not
            // being reported after all.
            warn!("select pressed twice without a release; pressing on key down from now on");
            self.press_focused(TouchEvent::Press);
            self.set_key_release_events(false);
        }

        if !self.input.key_release_events {
            self.remote(RemoteEvent::new("select", Some(key_action(kind))));
            if kind == KeyEventKind::Press {
                self.press_focused(TouchEvent::Press);
            }
            return;
        }

        match (kind, self.select_hold) {
            (KeyEventKind::Press, _) => {
                self.remote(RemoteEvent::new("select", Some(KEY_DOWN)));
                self.select_hold = SelectHold::Down;
            }
            (KeyEventKind::Repeat, SelectHold::Down) => {
                self.remote(RemoteEvent::new("longSelect", Some(KEY_DOWN)));
                self.press_focused(TouchEvent::LongPress {
                    key_action: Some(KEY_DOWN),
                });
                self.select_hold = SelectHold::LongPressing;
            }
            (KeyEventKind::Repeat, _) => {}
            (KeyEventKind::Release, hold) => {
                self.remote(RemoteEvent::new("select", Some(KEY_UP)));
                match hold {
                    SelectHold::LongPressing => self.press_focused(TouchEvent::LongPress {
                        key_action: Some(KEY_UP),
                    }),
                    SelectHold::Down => self.press_focused(TouchEvent::Press),
                    SelectHold::Idle => {}
                }
                self.select_hold = SelectHold::Idle;
            }
        }
    }

    fn toggle_long_press(&mut self) {
        if self.focused.is_none() {
            debug!("long press with no widget focused");
            return;
        }
        let key_action = if self.simulated_long_press { KEY_UP } else { KEY_DOWN };
        self.simulated_long_press = !self.simulated_long_press;
        self.press_focused(TouchEvent::LongPress {
            key_action: Some(key_action),
        });
    }

    fn press_focused(&mut self, event: TouchEvent) {
        match self.focused {
            Some(index) => self.touch(index, event),
            None => debug!(?event, "no widget focused"),
        }
    }

    pub fn render<B: Backend>(&self, f: &mut Frame<B>) {
        let scale = self.platform.scale();
        let widgets_height = BUTTON_HEIGHT * self.touchables.len() as u16;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                [
                    Constraint::Length(widgets_height),
                    Constraint::Length(CAPACITY as u16 + 2),
                    Constraint::Min(0),
                ]
                .as_ref(),
            )
            .split(f.size());

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(BUTTON_HEIGHT); self.touchables.len()])
            .split(chunks[0]);
        for (i, touchable) in self.touchables.iter().enumerate() {
            let focused = self.focused == Some(i);
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(BUTTON_WIDTH * scale), Constraint::Min(0)].as_ref())
                .split(rows[i]);
            let border = if focused {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let button = Paragraph::new(touchable.label(focused))
                .style(touchable.style(focused))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).border_style(border));
            f.render_widget(button, columns[0]);
        }

        let panels = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(
                [
                    Constraint::Length(PANEL_WIDTH * scale),
                    Constraint::Length(PANEL_WIDTH * scale),
                    Constraint::Min(0),
                ]
                .as_ref(),
            )
            .split(chunks[1]);
        let remote = Paragraph::new(self.remote_log.render())
            .block(Block::default().borders(Borders::ALL).title("Remote"));
        let pressable = Paragraph::new(self.pressable_log.render())
            .block(Block::default().borders(Borders::ALL).title("Touchables"));
        f.render_widget(remote, panels[0]);
        f.render_widget(pressable, panels[1]);

        if self.show_help {
            let help = Paragraph::new(HELP_TEXT).style(Style::default().add_modifier(Modifier::DIM));
            f.render_widget(help, chunks[2]);
        }
    }
}
