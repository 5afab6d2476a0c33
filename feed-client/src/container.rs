//! List container
//!
//! The container is the element whose children are the displayed event
//! records. `MemoryContainer` is the in-process implementation; `render_text`
//! turns its entries into terminal output.

use crate::payload::EventRecord;

/// Identifier of the list the feed renders into
pub const CONTAINER_ID: &str = "itemList";

/// Fixed heading of every entry
pub const ENTRY_HEADING: &str = "Malicious traffic detected";

/// Style property set on every entry (styling hook only)
pub const ENTRY_STYLE: (&str, &str) = ("--i", "2");

/// One rendered list item: a heading and its text lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub heading: String,
    pub lines: Vec<String>,
    pub style: (&'static str, &'static str),
}

impl ListEntry {
    pub fn for_record(record: &EventRecord) -> Self {
        Self {
            heading: ENTRY_HEADING.to_string(),
            lines: vec![
                format!("Source IP: {}", record.ip_text()),
                format!("Attack type: {}", record.attack_type_text()),
            ],
            style: ENTRY_STYLE,
        }
    }

    /// Heading and lines, newline separated
    pub fn text(&self) -> String {
        let mut text = self.heading.clone();
        for line in &self.lines {
            text.push('\n');
            text.push_str(line);
        }
        text
    }
}

/// A list the renderer can clear and append to
pub trait Container: Send {
    /// Remove every entry
    fn clear(&mut self);

    /// Append an entry after the existing ones
    fn append(&mut self, entry: ListEntry);

    /// Current entries, in display order
    fn entries(&self) -> &[ListEntry];
}

#[derive(Debug, Clone)]
pub struct MemoryContainer {
    id: String,
    entries: Vec<ListEntry>,
}

impl MemoryContainer {
    pub fn new() -> Self {
        Self {
            id: CONTAINER_ID.to_string(),
            entries: Vec::new(),
        }
    }

    /// Identifier of the list this container stands for
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MemoryContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl Container for MemoryContainer {
    fn clear(&mut self) {
        self.entries.clear();
    }

    fn append(&mut self, entry: ListEntry) {
        self.entries.push(entry);
    }

    fn entries(&self) -> &[ListEntry] {
        &self.entries
    }
}

/// Render entries for a terminal
pub fn render_text(entries: &[ListEntry]) -> String {
    if entries.is_empty() {
        return "No malicious traffic detected.\n".to_string();
    }

    let mut buf = String::new();
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            buf.push('\n');
        }
        buf.push_str(&format!("[{}] {}\n", i + 1, entry.heading));
        for line in &entry.lines {
            buf.push_str(&format!("    {}\n", line));
        }
    }
    buf
}
