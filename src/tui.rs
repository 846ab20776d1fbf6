/*
 * Terminal front end.
 * Sets up crossterm raw mode and the alternate screen, then feeds key
 * events into a Screen and redraws it with ratatui until the user quits.
 */

use crate::core::Result;
use crate::screen::Screen;
use crossterm::{
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{debug, info, warn};

/// What the screen did with a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// No remote or widget meaning.
    Ignored,
    /// Routed to the remote listener or a widget.
    Handled,
    Quit,
}

/// `q`, `Esc` or `Ctrl-C`. Releases never quit.
pub fn is_quit_key(key: &KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => key.modifiers.is_empty(),
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Reads the key events the screen should see.
pub struct KeyReader {
    poll_timeout: Duration,
    key_release_events: bool,
}

impl KeyReader {
    const POLL_TIMEOUT_MS: u64 = 100;

    pub fn new(key_release_events: bool) -> Self {
        KeyReader {
            poll_timeout: Duration::from_millis(Self::POLL_TIMEOUT_MS),
            key_release_events,
        }
    }

    /// Repeats and releases only pass when they were asked for.
    pub fn accepts(&self, key: &KeyEvent) -> bool {
        self.key_release_events || key.kind == KeyEventKind::Press
    }

    /// Waits up to the poll timeout for the next accepted key.
    pub fn next_key(&self) -> io::Result<Option<KeyEvent>> {
        if !event::poll(self.poll_timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) if self.accepts(&key) => Ok(Some(key)),
            Event::Resize(width, height) => {
                debug!(width, height, "terminal resized");
                Ok(None)
            }
            _ => Ok(None),
        }
    }
}

/// Asks the terminal whether it understands keyboard enhancement flags.
/// Pushing the flags to a terminal that does not is silently ignored, and
/// releases would then never arrive.
fn keyboard_enhancement_available() -> bool {
    match supports_keyboard_enhancement() {
        Ok(supported) => supported,
        Err(e) => {
            warn!(error = %e, "could not query keyboard enhancement support");
            false
        }
    }
}

pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    keys: KeyReader,
    key_release_events: bool,
}

impl Tui {
    /// Switches the terminal into raw mode on the alternate screen.
    ///
    /// With `key_release_events` requested, asks the terminal to report key
    /// repeats and releases as well, if it can.
    pub fn init(key_release_events: bool) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        let key_release_events = key_release_events && {
            let available = keyboard_enhancement_available();
            if !available {
                info!("terminal does not report key releases; long press falls back to 'l'");
            }
            available
        };
        if key_release_events {
            execute!(
                stdout,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
        }

        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Tui {
            terminal,
            keys: KeyReader::new(key_release_events),
            key_release_events,
        })
    }

    /// Whether key releases are actually being reported.
    pub fn key_release_events(&self) -> bool {
        self.key_release_events
    }

    /// Runs the draw/poll loop until the screen asks to quit.
    pub fn run(&mut self, screen: &mut Screen) -> Result<()> {
        info!("Entering terminal event loop");
        loop {
            self.terminal.draw(|f| screen.render(f))?;
            if let Some(key) = self.keys.next_key()? {
                if screen.handle_key(key) == KeyOutcome::Quit {
                    break;
                }
            }
        }
        info!("Leaving terminal event loop");
        Ok(())
    }

    /// Puts the terminal back the way it was found.
    pub fn restore(&mut self) -> Result<()> {
        if self.key_release_events {
            if let Err(e) = execute!(self.terminal.backend_mut(), PopKeyboardEnhancementFlags) {
                warn!(error = %e, "failed to pop keyboard enhancement flags");
            }
        }
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

/// Runs the screen in the terminal, restoring the terminal even when the
/// loop fails. The screen is told whether releases really arrive.
pub fn run_tui(screen: &mut Screen, key_release_events: bool) -> Result<()> {
    let mut tui = Tui::init(key_release_events)?;
    screen.set_key_release_events(tui.key_release_events());
    let result = tui.run(screen);
    tui.restore()?;
    result
}
