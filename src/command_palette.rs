// Command Palette Module for TVEvents
//
// Lists the event console commands with their usage and descriptions, and
// suggests matching commands when the user types something the console
// does not understand.

#[derive(Debug, Clone)]
pub struct Command {
    pub name: String,
    pub usage: String,
    pub description: String,
}

impl Command {
    fn new(name: &str, usage: &str, description: &str) -> Self {
        Command {
            name: name.to_string(),
            usage: usage.to_string(),
            description: description.to_string(),
        }
    }
}

pub struct CommandPalette {
    commands: Vec<Command>,
}

impl CommandPalette {
    /// Creates a new CommandPalette with every console command.
    pub fn new() -> Self {
        let commands = vec![
            Command::new("remote", ":remote <type> [action]", "Send a remote-control event"),
            Command::new("focus", ":focus <widget>", "Move focus to a widget"),
            Command::new("blur", ":blur <widget>", "Send a blur event to a widget"),
            Command::new("press", ":press <widget>", "Press a widget"),
            Command::new(
                "longpress",
                ":longpress <widget> [action]",
                "Long-press a widget (action 0 starts, anything else ends)",
            ),
            Command::new("next", ":next", "Focus the next widget"),
            Command::new("prev", ":prev", "Focus the previous widget"),
            Command::new("show", ":show [remote|pressable]", "Print the event logs"),
            Command::new("widgets", ":widgets", "List the widgets on the screen"),
            Command::new("help", ":help", "List all available commands"),
            Command::new("quit", ":quit", "Leave the console"),
        ];
        CommandPalette { commands }
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Searches for commands that contain the given query as a substring (case-insensitive)
    /// and returns the filtered list.
    pub fn filter_commands(&self, query: &str) -> Vec<Command> {
        let q = query.to_lowercase();
        self.commands
            .iter()
            .filter(|cmd| cmd.name.to_lowercase().contains(&q) || cmd.description.to_lowercase().contains(&q))
            .cloned()
            .collect()
    }

    /// One line per command, usage padded into a column.
    pub fn help_lines(&self) -> Vec<String> {
        let width = self.commands.iter().map(|c| c.usage.len()).max().unwrap_or(0);
        self.commands
            .iter()
            .map(|c| format!("  {:width$}  {}", c.usage, c.description, width = width))
            .collect()
    }
}

impl Default for CommandPalette {
    fn default() -> Self {
        Self::new()
    }
}
