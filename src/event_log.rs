//! Bounded event log.
//!
//! A fixed-capacity, newest-first list of display strings. Appending never
//! mutates an existing log; it returns a new one with the oldest entry
//! evicted when the log is full.

/// Maximum number of entries a log holds.
pub const CAPACITY: usize = 6;

/// Ordered sequence of event descriptions, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    entries: Vec<String>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        EventLog {
            entries: Vec::new(),
        }
    }

    /// Returns a new log with `entry` at the front, keeping at most
    /// `CAPACITY - 1` of the current entries behind it.
    pub fn appended(&self, entry: impl Into<String>) -> EventLog {
        let keep = self.entries.len().min(CAPACITY - 1);
        let mut entries = Vec::with_capacity(keep + 1);
        entries.push(entry.into());
        entries.extend(self.entries[..keep].iter().cloned());
        EventLog { entries }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recently appended entry.
    pub fn latest(&self) -> Option<&str> {
        self.entries.first().map(String::as_str)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.entries.iter()
    }

    /// Joins the entries with line breaks, newest on top.
    pub fn render(&self) -> String {
        self.entries.join("\n")
    }
}

impl<'a> IntoIterator for &'a EventLog {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Free-function form of [`EventLog::appended`].
pub fn append(log: &EventLog, entry: impl Into<String>) -> EventLog {
    log.appended(entry)
}

/// Receiver for formatted event descriptions.
///
/// Every widget adapter and the remote listener report through this one
/// capability, so they never need to know where their entries end up.
pub trait EventSink {
    fn on_event(&mut self, entry: String);
}

impl EventSink for EventLog {
    fn on_event(&mut self, entry: String) {
        // Replace the whole value; the previous log is left untouched.
        *self = self.appended(entry);
    }
}

impl EventSink for Vec<String> {
    fn on_event(&mut self, entry: String) {
        self.push(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    fn log_of(entries: &[&str]) -> EventLog {
        // Build newest-first by appending in reverse.
        entries
            .iter()
            .rev()
            .fold(EventLog::new(), |log, e| log.appended(*e))
    }

    #[test]
    fn test_append_to_empty() {
        let log = append(&EventLog::new(), "A");
        assert_eq!(log.entries(), ["A"]);
        assert_eq!(log.latest(), Some("A"));
    }

    #[test]
    fn test_append_evicts_oldest_when_full() {
        let full = log_of(&["F", "E", "D", "C", "B", "A"]);
        assert_eq!(full.len(), CAPACITY);

        let next = append(&full, "G");
        assert_eq!(next.entries(), ["G", "F", "E", "D", "C", "B"]);
    }

    #[test]
    fn test_append_leaves_input_untouched() {
        let before = log_of(&["B", "A"]);
        let snapshot = before.clone();
        let _after = before.appended("C");
        assert_eq!(before, snapshot);
    }

    #[test]
    fn test_sink_replaces_value() {
        let mut log = EventLog::new();
        for i in 0..10 {
            log.on_event(format!("event {}", i));
        }
        assert_eq!(log.len(), CAPACITY);
        assert_eq!(log.latest(), Some("event 9"));
        assert_eq!(log.entries()[CAPACITY - 1], "event 4");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(EventLog::new().render(), "");
        assert!(EventLog::new().is_empty());
    }

    #[test]
    fn test_render_newest_first() {
        let log = log_of(&["type=select, action=1", "type=up, action=0", "type=menu, action="]);
        assert_snapshot!(log.render(), @r"
        type=select, action=1
        type=up, action=0
        type=menu, action=
        ");
    }
}
