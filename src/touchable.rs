//! Touchable widget variants.
//!
//! Each variant reports focus, blur, press and long-press. The variants
//! differ only in how they look; all of them funnel their events through
//! an [`EventSink`] as formatted strings.

use crate::event_log::EventSink;
use crate::platform::Platform;
use ratatui::style::{Color, Modifier, Style};
use std::fmt;
use std::str::FromStr;

/// Background for an idle widget.
const IDLE_BG: Color = Color::Blue;
/// Background for a focused `Pressable` (#000088).
const FOCUSED_BG: Color = Color::Rgb(0x00, 0x00, 0x88);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchableKind {
    Pressable,
    TouchableOpacity,
    TouchableHighlight,
    TouchableNativeFeedback,
}

impl TouchableKind {
    pub fn name(&self) -> &'static str {
        match self {
            TouchableKind::Pressable => "Pressable",
            TouchableKind::TouchableOpacity => "TouchableOpacity",
            TouchableKind::TouchableHighlight => "TouchableHighlight",
            TouchableKind::TouchableNativeFeedback => "TouchableNativeFeedback",
        }
    }
}

impl fmt::Display for TouchableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An interaction reported by a touchable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchEvent {
    Focus,
    Blur,
    Press,
    /// `key_action` is 0 when the long press starts; anything else,
    /// including no value, marks its end.
    LongPress { key_action: Option<i32> },
}

impl TouchEvent {
    /// Log line for this event on the widget called `name`.
    pub fn describe(&self, name: &str) -> String {
        match self {
            TouchEvent::Focus => format!("{} focus", name),
            TouchEvent::Blur => format!("{} blur", name),
            TouchEvent::Press => format!("{} pressed", name),
            TouchEvent::LongPress { key_action } => {
                let phase = if *key_action == Some(0) { "start" } else { "end" };
                format!("{} long press {}", name, phase)
            }
        }
    }
}

impl FromStr for TouchEvent {
    type Err = String;

    /// Parses the bare event name; long presses parse without a key action.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "focus" => Ok(TouchEvent::Focus),
            "blur" => Ok(TouchEvent::Blur),
            "press" => Ok(TouchEvent::Press),
            "longpress" | "long-press" => Ok(TouchEvent::LongPress { key_action: None }),
            other => Err(format!("unknown touch event '{}'", other)),
        }
    }
}

/// A titled widget that forwards its interactions to an [`EventSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Touchable {
    pub title: String,
    pub kind: TouchableKind,
}

impl Touchable {
    pub fn new(title: impl Into<String>, kind: TouchableKind) -> Self {
        Touchable {
            title: title.into(),
            kind,
        }
    }

    /// One widget per variant, titled after it. The native-feedback variant
    /// is only included where the platform has it.
    pub fn defaults_for(platform: &Platform) -> Vec<Touchable> {
        let mut kinds = vec![
            TouchableKind::Pressable,
            TouchableKind::TouchableOpacity,
            TouchableKind::TouchableHighlight,
        ];
        if platform.has_native_feedback() {
            kinds.push(TouchableKind::TouchableNativeFeedback);
        }
        kinds
            .into_iter()
            .map(|kind| Touchable::new(kind.name(), kind))
            .collect()
    }

    pub fn dispatch(&self, event: TouchEvent, sink: &mut dyn EventSink) {
        sink.on_event(event.describe(&self.title));
    }

    pub fn on_focus(&self, sink: &mut dyn EventSink) {
        self.dispatch(TouchEvent::Focus, sink);
    }

    pub fn on_blur(&self, sink: &mut dyn EventSink) {
        self.dispatch(TouchEvent::Blur, sink);
    }

    pub fn on_press(&self, sink: &mut dyn EventSink) {
        self.dispatch(TouchEvent::Press, sink);
    }

    pub fn on_long_press(&self, key_action: Option<i32>, sink: &mut dyn EventSink) {
        self.dispatch(TouchEvent::LongPress { key_action }, sink);
    }

    /// Text shown on the widget.
    pub fn label(&self, focused: bool) -> String {
        match self.kind {
            TouchableKind::Pressable if focused => format!("{} focused", self.title),
            _ => self.title.clone(),
        }
    }

    pub fn style(&self, focused: bool) -> Style {
        let base = Style::default().fg(Color::White).bg(IDLE_BG);
        if !focused {
            return base;
        }
        match self.kind {
            TouchableKind::Pressable => base.bg(FOCUSED_BG),
            TouchableKind::TouchableOpacity => base.add_modifier(Modifier::DIM),
            TouchableKind::TouchableHighlight => base.bg(Color::Black),
            TouchableKind::TouchableNativeFeedback => base.add_modifier(Modifier::REVERSED),
        }
    }
}
