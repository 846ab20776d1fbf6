use crate::command_palette::CommandPalette;
use crate::core::{Result, TvEventsError};
use crate::event_log::EventLog;
use crate::remote::RemoteEvent;
use crate::screen::Screen;
use crate::touchable::TouchEvent;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// Which log `:show` prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSelection {
    Both,
    Remote,
    Pressable,
}

/// Represents a parsed console command.
#[derive(Debug, PartialEq)]
pub enum Command {
    Remote { event_type: String, action: Option<i32> },
    Touch { widget: String, event: TouchEvent },
    Next,
    Prev,
    Show(LogSelection),
    Widgets,
    Help,
    Quit,
    Unknown(String),
}

/// Parses a line of console input into a `Command`.
///
/// Key actions that are not integers are treated as absent rather than
/// rejected, matching how the screen formats a missing action.
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let Some(trimmed) = input.strip_prefix(':') else {
        return Command::Unknown(input.to_string());
    };
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    if parts.is_empty() {
        return Command::Unknown(input.to_string());
    }
    let action = || parts.get(2).and_then(|a| a.parse::<i32>().ok());
    let touch = |event: TouchEvent| match parts.get(1) {
        Some(widget) => Command::Touch {
            widget: widget.to_string(),
            event,
        },
        None => Command::Unknown(input.to_string()),
    };

    match parts[0] {
        "remote" => match parts.get(1) {
            Some(event_type) => Command::Remote {
                event_type: event_type.to_string(),
                action: action(),
            },
            None => Command::Unknown(input.to_string()),
        },
        "next" => Command::Next,
        "prev" => Command::Prev,
        "show" => match parts.get(1).copied() {
            None => Command::Show(LogSelection::Both),
            Some("remote") => Command::Show(LogSelection::Remote),
            Some("pressable") => Command::Show(LogSelection::Pressable),
            Some(_) => Command::Unknown(input.to_string()),
        },
        "widgets" => Command::Widgets,
        "help" => Command::Help,
        "quit" | "q" => Command::Quit,
        name => match name.parse::<TouchEvent>() {
            Ok(TouchEvent::LongPress { .. }) => touch(TouchEvent::LongPress {
                key_action: action(),
            }),
            Ok(event) => touch(event),
            Err(_) => Command::Unknown(input.to_string()),
        },
    }
}

/// Prints the newest `count` entries of `log` oldest-first, the order in
/// which they happened.
fn print_new<W: Write>(out: &mut W, label: &str, log: &EventLog, count: usize) -> io::Result<()> {
    for entry in log.entries()[..count.min(log.len())].iter().rev() {
        writeln!(out, "{}: {}", label, entry)?;
    }
    Ok(())
}

fn print_log<W: Write>(out: &mut W, title: &str, log: &EventLog) -> io::Result<()> {
    writeln!(out, "[{}]", title)?;
    if !log.is_empty() {
        writeln!(out, "{}", log.render())?;
    }
    Ok(())
}

/// Moves focus with `step` and reports the blur/focus entries it produced.
fn report_focus_change<W: Write>(
    screen: &mut Screen,
    out: &mut W,
    step: impl FnOnce(&mut Screen),
) -> io::Result<()> {
    let before = screen.focused();
    step(screen);
    let after = screen.focused();
    let appended = match (before, after) {
        (b, a) if b == a => 0,
        (Some(_), Some(_)) => 2,
        _ => 1,
    };
    print_new(out, "pressable", screen.pressable_log(), appended)
}

/// Applies one command to the screen. Returns `Ok(false)` when the console
/// should stop.
pub fn execute_command<W: Write>(
    screen: &mut Screen,
    command: Command,
    palette: &CommandPalette,
    out: &mut W,
) -> Result<bool> {
    match command {
        Command::Remote { event_type, action } => {
            let event = RemoteEvent::new(event_type, action);
            match event.describe() {
                Some(entry) => writeln!(out, "remote: {}", entry)?,
                None => writeln!(out, "remote: {} filtered", event.event_type)?,
            }
            screen.remote(event);
        }
        Command::Touch { widget, event } => {
            let index = screen
                .find_touchable(&widget)
                .ok_or_else(|| TvEventsError::Command(format!("no widget named '{}'", widget)))?;
            if event == TouchEvent::Focus {
                report_focus_change(screen, out, |s| s.focus(index))?;
            } else {
                screen.touch(index, event);
                print_new(out, "pressable", screen.pressable_log(), 1)?;
            }
        }
        Command::Next => report_focus_change(screen, out, Screen::focus_next)?,
        Command::Prev => report_focus_change(screen, out, Screen::focus_previous)?,
        Command::Show(selection) => {
            if selection != LogSelection::Pressable {
                print_log(out, "remote", screen.remote_log())?;
            }
            if selection != LogSelection::Remote {
                print_log(out, "pressable", screen.pressable_log())?;
            }
        }
        Command::Widgets => {
            for (i, touchable) in screen.touchables().iter().enumerate() {
                let marker = if screen.focused() == Some(i) { "*" } else { " " };
                writeln!(out, "{} {} {} ({})", marker, i, touchable.title, touchable.kind)?;
            }
        }
        Command::Help => {
            writeln!(out, "Available commands:")?;
            for line in palette.help_lines() {
                writeln!(out, "{}", line)?;
            }
            writeln!(out, "\nWidgets can be named by title or by index.")?;
        }
        Command::Quit => return Ok(false),
        Command::Unknown(input) => {
            writeln!(out, "Unknown command: {}", input)?;
            let query = input.trim_start_matches(':');
            let query = query.split_whitespace().next().unwrap_or("");
            if !query.is_empty() {
                let suggestions = palette.filter_commands(query);
                if !suggestions.is_empty() {
                    writeln!(out, "Did you mean:")?;
                    for suggestion in suggestions {
                        writeln!(out, "  {} - {}", suggestion.usage, suggestion.description)?;
                    }
                }
            }
        }
    }
    Ok(true)
}

/// Reads commands line by line from `input` until `:quit` or end of input,
/// applying each to `screen` and writing feedback to `out`.
pub fn run_console<R: BufRead, W: Write>(screen: &mut Screen, mut input: R, out: &mut W) -> Result<()> {
    let palette = CommandPalette::new();
    let mut line = String::new();

    loop {
        write!(out, "> ")?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let command = parse_command(trimmed);
        debug!(?command, "console command");
        match execute_command(screen, command, &palette, out) {
            Ok(true) => {}
            Ok(false) => break,
            Err(TvEventsError::Command(msg)) => writeln!(out, "Error: {}", msg)?,
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

/// Runs the console on standard input and output. Type ":quit" to exit.
pub fn run_repl(screen: &mut Screen) -> Result<()> {
    info!("Starting event console");
    println!("Welcome to the tvevents console! Type :help for commands, :quit to exit.");
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_console(screen, stdin.lock(), &mut stdout.lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InputConfig;
    use crate::platform::{Os, Platform};

    fn run(script: &str) -> (Screen, String) {
        let mut screen = Screen::new(Platform::new(Os::Android, true), InputConfig::default());
        let mut out = Vec::new();
        run_console(&mut screen, script.as_bytes(), &mut out).unwrap();
        (screen, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_remote_command() {
        assert_eq!(
            parse_command(":remote select 1"),
            Command::Remote {
                event_type: "select".to_string(),
                action: Some(1)
            }
        );
    }

    #[test]
    fn test_parse_remote_command_with_bad_action() {
        assert_eq!(
            parse_command(":remote menu abc"),
            Command::Remote {
                event_type: "menu".to_string(),
                action: None
            }
        );
    }

    #[test]
    fn test_parse_longpress_command() {
        assert_eq!(
            parse_command(":longpress Pressable 0"),
            Command::Touch {
                widget: "Pressable".to_string(),
                event: TouchEvent::LongPress { key_action: Some(0) }
            }
        );
    }

    #[test]
    fn test_parse_touch_commands() {
        assert_eq!(
            parse_command(":blur 2"),
            Command::Touch {
                widget: "2".to_string(),
                event: TouchEvent::Blur
            }
        );
        assert_eq!(
            parse_command(":long-press TouchableOpacity 1"),
            Command::Touch {
                widget: "TouchableOpacity".to_string(),
                event: TouchEvent::LongPress { key_action: Some(1) }
            }
        );
        assert_eq!(
            parse_command(":longpress Pressable"),
            Command::Touch {
                widget: "Pressable".to_string(),
                event: TouchEvent::LongPress { key_action: None }
            }
        );
    }

    #[test]
    fn test_parse_show_command() {
        assert_eq!(parse_command(":show"), Command::Show(LogSelection::Both));
        assert_eq!(parse_command(":show remote"), Command::Show(LogSelection::Remote));
        assert_eq!(
            parse_command(":show everything"),
            Command::Unknown(":show everything".to_string())
        );
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(parse_command(":invalid"), Command::Unknown(":invalid".to_string()));
        assert_eq!(parse_command("select"), Command::Unknown("select".to_string()));
        assert_eq!(parse_command(":press"), Command::Unknown(":press".to_string()));
    }

    #[test]
    fn test_console_remote_and_touch() {
        let (screen, output) = run(":remote select 1\n:remote focus\n:press Pressable\n:quit\n");
        assert!(output.contains("remote: type=select, action=1"));
        assert!(output.contains("remote: focus filtered"));
        assert!(output.contains("pressable: Pressable pressed"));
        assert_eq!(screen.remote_log().entries(), ["type=select, action=1"]);
    }

    #[test]
    fn test_console_focus_reports_blur_then_focus() {
        let (_, output) = run(":focus 0\n:next\n");
        let expected = "pressable: Pressable blur\npressable: TouchableOpacity focus\n";
        assert!(output.contains(expected), "output was: {}", output);
    }

    #[test]
    fn test_console_unknown_widget() {
        let (screen, output) = run(":press Button\n:show pressable\n");
        assert!(output.contains("Error: no widget named 'Button'"));
        assert!(screen.pressable_log().is_empty());
    }

    #[test]
    fn test_console_suggestions() {
        let (_, output) = run(":long\n");
        assert!(output.contains("Unknown command: :long"));
        assert!(output.contains("Did you mean:"));
        assert!(output.contains(":longpress <widget> [action]"));
    }

    #[test]
    fn test_console_stops_at_quit() {
        let (screen, _) = run(":quit\n:remote up 0\n");
        assert!(screen.remote_log().is_empty());
    }
}
